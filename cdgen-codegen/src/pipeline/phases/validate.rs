//! Validate phase - runs lints on the specification.
//!
//! The transformation is permissive: the built-in lints only warn or inform,
//! they never reject a suspicious document. Strict-mode validation belongs
//! upstream at the parser boundary.

use cdgen_spec::SpecDocument;
use eyre::{Result, bail};

use crate::pipeline::{Diagnostic, GenerationContext, Phase};

/// A lint that checks the specification for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the document and add any diagnostics.
    fn check(&self, spec: &SpecDocument, diagnostics: &mut Vec<Diagnostic>);
}

/// Phase that validates the specification using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(MissingDescriptionLint),
                Box::new(EmptyDefinitionLint),
                Box::new(MissingOperationIdLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Run lints over the specification"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.spec, &mut ctx.diagnostics);
        }

        // Warnings are allowed; only errors stop the run.
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

// ============================================================================
// Built-in lints
// ============================================================================

/// Lint that warns about model definitions missing a description.
pub struct MissingDescriptionLint;

impl Lint for MissingDescriptionLint {
    fn name(&self) -> &'static str {
        "missing-description"
    }

    fn check(&self, spec: &SpecDocument, diagnostics: &mut Vec<Diagnostic>) {
        for (name, schema) in &spec.definitions {
            if schema.description.as_deref().unwrap_or("").is_empty() {
                diagnostics.push(
                    Diagnostic::warning("validate", format!("model '{}' has no description", name))
                        .at(format!("definitions.{}", name)),
                );
            }
        }
    }
}

/// Lint that notes model definitions with no properties.
pub struct EmptyDefinitionLint;

impl Lint for EmptyDefinitionLint {
    fn name(&self) -> &'static str {
        "empty-definition"
    }

    fn check(&self, spec: &SpecDocument, diagnostics: &mut Vec<Diagnostic>) {
        for (name, schema) in &spec.definitions {
            if schema.properties.is_empty() {
                diagnostics.push(
                    Diagnostic::info("validate", format!("model '{}' has no properties", name))
                        .at(format!("definitions.{}", name)),
                );
            }
        }
    }
}

/// Lint that warns about operations missing an operationId.
pub struct MissingOperationIdLint;

impl Lint for MissingOperationIdLint {
    fn name(&self) -> &'static str {
        "missing-operation-id"
    }

    fn check(&self, spec: &SpecDocument, diagnostics: &mut Vec<Diagnostic>) {
        for (path, operations) in &spec.paths {
            for (method, operation) in operations {
                if operation.operation_id.is_none() {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!("operation {} {} has no operationId", method, path),
                        )
                        .at(format!("paths.{}.{}", path, method)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use cdgen_spec::SpecDocument;

    use super::*;
    use crate::config::GeneratorConfig;

    fn parse_document(json: &str) -> SpecDocument {
        json.parse().expect("document should parse")
    }

    #[test]
    fn test_missing_description_lint() {
        let document = parse_document(r#"{"definitions": {"Pet": {"properties": {}}}}"#);

        let mut diagnostics = Vec::new();
        MissingDescriptionLint.check(&document, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert!(diagnostics[0].message.contains("Pet"));
    }

    #[test]
    fn test_missing_operation_id_lint() {
        let document = parse_document(r#"{"paths": {"/pets": {"get": {}}}}"#);

        let mut diagnostics = Vec::new();
        MissingOperationIdLint.check(&document, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("/pets"));
    }

    #[test]
    fn test_validate_phase_allows_warnings() {
        let document = parse_document(r#"{"definitions": {"Pet": {"properties": {}}}}"#);
        let mut ctx = GenerationContext::new(document, GeneratorConfig::default());

        let result = ValidatePhase::new().run(&mut ctx);

        assert!(result.is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_validate_phase_fails_on_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn check(&self, _spec: &SpecDocument, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("test", "forced error"));
            }
        }

        let mut ctx =
            GenerationContext::new(SpecDocument::default(), GeneratorConfig::default());

        let phase = ValidatePhase::empty().with_lint(AlwaysErrorLint);
        assert!(phase.run(&mut ctx).is_err());
        assert!(ctx.has_errors());
    }
}
