//! Pipeline phase trait.

use eyre::Result;

use super::GenerationContext;

/// A phase of the transformation pipeline.
///
/// Phases run in order and may read or extend the generation context.
/// Non-fatal issues belong in the context's diagnostics; an `Err` stops the
/// run.
///
/// Built-in phases:
/// - `ValidatePhase` - runs lints over the specification
/// - `LowerPhase` - transforms the specification into descriptors
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the generation context.
    fn run(&self, ctx: &mut GenerationContext) -> Result<()>;
}
