//! Model and property descriptors.

use std::collections::BTreeSet;

use serde::Serialize;

/// One allowed value of an enum-constrained property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValue {
    /// Display label, first character upper-cased.
    pub label: String,
    /// The raw specification value.
    pub raw: String,
}

impl EnumValue {
    pub fn new(label: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            raw: raw.into(),
        }
    }
}

/// Renderer-ready description of one model property.
///
/// Invariant: `is_enum` implies `allowable_values` is non-empty and
/// `enum_type_name` is set.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyDescriptor {
    pub name: String,
    /// The declared field type. Always the opaque placeholder for
    /// collection-valued properties; the backing store cannot carry element
    /// types at the field level.
    pub declared_type: String,
    pub required: bool,
    /// Whether the rendered field carries an optional wrapper.
    pub is_optional: bool,
    pub is_enum: bool,
    /// Display/raw pairs, in declaration order.
    pub allowable_values: Vec<EnumValue>,
    /// Derived enum type name, reserved-word safe.
    pub enum_type_name: Option<String>,
    /// Fully element-typed construction expression for collection kinds.
    pub instantiation_type: Option<String>,
    /// Never set: "no value" stays representable as absence rather than a
    /// library-chosen default.
    pub default_value: Option<String>,
    pub description: Option<String>,
}

impl PropertyDescriptor {
    /// Returns true when a construction expression should be emitted.
    pub fn has_instantiation(&self) -> bool {
        self.instantiation_type.is_some()
    }
}

/// Renderer-ready description of one model class.
#[derive(Debug, Clone, Serialize)]
pub struct ModelDescriptor {
    pub name: String,
    pub class_name: String,
    pub description: Option<String>,
    /// Properties in schema declaration order.
    pub vars: Vec<PropertyDescriptor>,
    /// Referenced model type names, deduplicated.
    pub imports: BTreeSet<String>,
    pub has_vars: bool,
    pub empty_vars: bool,
    pub has_enums: bool,
    /// Cross-model positional flag, owned by the caller iterating all
    /// models.
    pub has_more_models: bool,
    /// Pass-through vendor flags below; their interpretation belongs to the
    /// renderer.
    pub is_init_required: bool,
    pub is_build_core_data: bool,
    pub is_protocol_uuid_type: bool,
    pub is_protocol_sort_order_type: bool,
    pub is_protocol_name_type: bool,
    pub is_protocol_soft_deletable_type: bool,
}
