//! Renderer-ready descriptor types for the cdgen generator.
//!
//! The transformation engine produces one tree of these descriptors per
//! generation run and hands it, read-only, to an external template renderer.
//! Nothing here is mutated after construction and nothing persists beyond
//! one run.

mod artifacts;
mod model;
mod operation;

pub use artifacts::SupportingFile;
pub use model::{EnumValue, ModelDescriptor, PropertyDescriptor};
pub use operation::{OperationDescriptor, ParameterDescriptor};
