//! Pipeline orchestrator.

use cdgen_spec::SpecDocument;
use eyre::Result;

use super::{
    GenerationContext, Phase,
    phases::{LowerPhase, ValidatePhase},
};
use crate::config::GeneratorConfig;

/// The transformation pipeline orchestrator.
///
/// Runs the built-in phases (validate → lower) followed by any user phases.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new();
/// let ctx = pipeline.run(document, config)?;
/// serde_json::to_string(&ctx.models)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with the default built-in phases.
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on a specification document.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally (validation errors from
    /// custom lints included).
    pub fn run(&self, spec: SpecDocument, config: GeneratorConfig) -> Result<GenerationContext> {
        let mut ctx = GenerationContext::new(spec, config);

        let builtin_phases: Vec<Box<dyn Phase>> =
            vec![Box::new(ValidatePhase::new()), Box::new(LowerPhase)];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
