//! Supporting artifacts the renderer is instructed to produce.

use serde::Serialize;

/// A supporting file the renderer must additionally produce, opaque to the
/// transformation itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportingFile {
    /// Template the renderer should instantiate.
    pub template: String,
    /// Folder the output lands in, relative to the output root.
    pub folder: String,
    /// Destination file name.
    pub destination: String,
}

impl SupportingFile {
    pub fn new(
        template: impl Into<String>,
        folder: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            folder: folder.into(),
            destination: destination.into(),
        }
    }
}
