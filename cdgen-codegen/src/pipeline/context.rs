//! Generation context passed through pipeline phases.

use cdgen_ir::{ModelDescriptor, OperationDescriptor};
use cdgen_spec::SpecDocument;

use super::diagnostic::Diagnostic;
use crate::config::GeneratorConfig;

/// Context carried through all pipeline phases.
///
/// Holds the specification and the immutable configuration snapshot going
/// in, and accumulates descriptors and diagnostics on the way out.
#[derive(Debug)]
pub struct GenerationContext {
    /// The parsed specification being transformed.
    pub spec: SpecDocument,
    /// Configuration snapshot, read-only for the whole run.
    pub config: GeneratorConfig,
    /// Model descriptors (populated by the lower phase).
    pub models: Vec<ModelDescriptor>,
    /// Operation descriptors (populated by the lower phase).
    pub operations: Vec<OperationDescriptor>,
    /// Diagnostics collected during the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    /// Create a new context from a specification and configuration.
    pub fn new(spec: SpecDocument, config: GeneratorConfig) -> Self {
        Self {
            spec,
            config,
            models: Vec::new(),
            operations: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity.is_warning())
    }

    /// Count the error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity.is_error())
            .count()
    }

    /// Count the warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity.is_warning())
            .count()
    }
}
