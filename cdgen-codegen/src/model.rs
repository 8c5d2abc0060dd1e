//! Model assembly.

use std::collections::BTreeSet;

use cdgen_ir::{ModelDescriptor, PropertyDescriptor};
use cdgen_spec::SchemaObject;

use crate::{
    config::GeneratorConfig,
    naming::to_model_name,
    property::from_property,
    type_mapper::COREDATA_MAPPING,
};

/// Aggregate property descriptors and metadata flags into a model
/// descriptor.
///
/// Properties keep schema declaration order. Duplicate property names are
/// assumed pre-validated upstream. `has_more_models` is a cross-model
/// positional flag owned by the caller iterating all models; it starts out
/// false here.
pub fn from_model(
    name: &str,
    schema: &SchemaObject,
    config: &GeneratorConfig,
) -> ModelDescriptor {
    let vars: Vec<PropertyDescriptor> = schema
        .properties
        .iter()
        .map(|(property_name, property)| {
            from_property(
                property_name,
                property,
                schema.is_required(property_name),
                config,
            )
        })
        .collect();

    ModelDescriptor {
        name: name.to_string(),
        class_name: to_model_name(name),
        description: schema.description.clone(),
        imports: collect_imports(schema),
        has_vars: !vars.is_empty(),
        empty_vars: vars.is_empty(),
        has_enums: vars.iter().any(|var| var.is_enum),
        has_more_models: false,
        is_init_required: schema.ext_flag("x-init-required"),
        is_build_core_data: schema.ext_flag("x-build-core-data"),
        is_protocol_uuid_type: schema.ext_flag("x-protocol-uuid-type"),
        is_protocol_sort_order_type: schema.ext_flag("x-protocol-sort-order-type"),
        is_protocol_name_type: schema.ext_flag("x-protocol-name-type"),
        is_protocol_soft_deletable_type: schema.ext_flag("x-protocol-soft-deleteable-type"),
        vars,
    }
}

/// Collect the user-defined model types a definition's properties refer to,
/// descending through collection element types.
fn collect_imports(schema: &SchemaObject) -> BTreeSet<String> {
    let mut imports = BTreeSet::new();
    for property in schema.properties.values() {
        let schema_type = property.schema_type();
        let mut refs = Vec::new();
        schema_type.collect_model_refs(&mut refs);
        for reference in refs {
            let target = to_model_name(reference);
            if COREDATA_MAPPING.lookup(reference).is_none()
                && !COREDATA_MAPPING.is_primitive(&target)
            {
                imports.insert(target);
            }
        }
    }
    imports
}
