//! Core vocabulary and utilities for the cdgen generator.
//!
//! This crate provides the fundamental types and string utilities shared
//! across the specification surface, the descriptor IR, and the
//! transformation engine.

mod types;
mod utils;

pub use types::SchemaType;
pub use utils::{
    capitalize_first, parse_lenient_bool, path_placeholders, to_camel_case, to_pascal_case,
};
