//! Parsed API specification surface for the cdgen generator.
//!
//! This crate models the input boundary of the generator: an
//! already-structured specification document (named schema definitions plus
//! path-to-operation mappings), deserialized from JSON. It owns the fatal
//! boundary conditions — an unreadable or malformed document, and a path
//! placeholder with no matching declared parameter — so the transformation
//! engine downstream can stay permissive.

mod document;
mod error;
mod operation;
mod schema;
pub mod validate;

pub use document::{PathItem, SpecDocument};
pub use error::{Error, Result};
pub use operation::{OperationSpec, Parameter, ParameterLocation, ResponseSpec};
pub use schema::{SchemaObject, SchemaProperty};
