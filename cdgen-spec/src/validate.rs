//! Parser-boundary validation.
//!
//! The transformation engine downstream is permissive by design; structural
//! inconsistency between a path template and its declared parameters is
//! caught here, before the document is handed over.

use cdgen_core::path_placeholders;

use crate::{Error, ParameterLocation, Result, SpecDocument};

/// Check that every `{placeholder}` in every path template has a matching
/// path-located parameter on each of the path's operations.
pub fn check_path_parameters(document: &SpecDocument) -> Result<()> {
    for (path, operations) in &document.paths {
        let placeholders = path_placeholders(path);
        for (method, operation) in operations {
            for placeholder in &placeholders {
                let declared = operation.parameters.iter().any(|parameter| {
                    parameter.location == ParameterLocation::Path
                        && parameter.name == *placeholder
                });
                if !declared {
                    return Err(Error::unmatched_placeholder(path, method, placeholder));
                }
            }
        }
    }
    Ok(())
}
