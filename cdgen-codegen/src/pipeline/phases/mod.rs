//! Built-in pipeline phases.

mod lower;
mod validate;

pub use lower::LowerPhase;
pub use validate::{Lint, ValidatePhase};
