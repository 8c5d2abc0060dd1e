//! Property transformation.
//!
//! Composes the type mapper, the enum materializer, and the identifier
//! sanitizer into one pure function from schema property to property
//! descriptor.

use cdgen_core::{SchemaType, capitalize_first, to_pascal_case};
use cdgen_ir::{EnumValue, PropertyDescriptor};
use cdgen_spec::SchemaProperty;

use crate::{
    config::GeneratorConfig,
    naming::SWIFT_NAMING,
    type_mapper::{COREDATA_MAPPING, TRANSFORMABLE, TypeMapping},
};

/// Suffix carried by the combined type+enum name the baseline produces.
const ENUM_SUFFIX: &str = "Enum";

/// Produce a property descriptor from a schema property.
pub fn from_property(
    name: &str,
    property: &SchemaProperty,
    required: bool,
    config: &GeneratorConfig,
) -> PropertyDescriptor {
    let schema_type = property.schema_type();
    let mut descriptor = baseline_property(name, property, &schema_type, required, config);

    if descriptor.is_enum {
        materialize_enum(&mut descriptor);
    }

    descriptor.instantiation_type = to_instantiation_type(&schema_type, &COREDATA_MAPPING);
    descriptor
}

/// Build the starting descriptor every target shares.
///
/// Enum values come through as identity label/raw pairs and the combined
/// `{Name}Enum` type name; [`materialize_enum`] reworks both for this
/// target.
fn baseline_property(
    name: &str,
    property: &SchemaProperty,
    schema_type: &SchemaType,
    required: bool,
    config: &GeneratorConfig,
) -> PropertyDescriptor {
    let is_enum = property.is_enum();
    let allowable_values = property
        .raw_enum_values()
        .into_iter()
        .map(|raw| EnumValue::new(raw.clone(), raw))
        .collect();

    PropertyDescriptor {
        name: name.to_string(),
        declared_type: declared_type(schema_type, &COREDATA_MAPPING),
        required,
        is_optional: !(required && config.unwrap_required),
        is_enum,
        allowable_values,
        enum_type_name: is_enum.then(|| format!("{}{}", to_pascal_case(name), ENUM_SUFFIX)),
        instantiation_type: None,
        // This target never emits a literal default, whatever the
        // specification declares; absence must stay representable.
        default_value: None,
        description: property.description.clone(),
    }
}

/// Target type used to declare a field of the given schema type.
///
/// Collection kinds are always declared as the opaque placeholder; element
/// types survive only in the construction expression.
pub fn declared_type(schema_type: &SchemaType, mapping: &TypeMapping) -> String {
    match schema_type {
        SchemaType::Array(_) | SchemaType::Map(_) => TRANSFORMABLE.to_string(),
        SchemaType::Primitive(name) | SchemaType::ModelRef(name) => mapping.map(name),
    }
}

/// Rework baseline enum data into display/raw pairs and derive the enum
/// type name from the combined name.
fn materialize_enum(descriptor: &mut PropertyDescriptor) {
    for value in &mut descriptor.allowable_values {
        value.label = capitalize_first(&value.raw);
    }
    if let Some(combined) = descriptor.enum_type_name.take() {
        let trimmed = combined
            .strip_suffix(ENUM_SUFFIX)
            .map(str::to_string)
            .unwrap_or(combined);
        descriptor.enum_type_name = Some(SWIFT_NAMING.safe_name(&trimmed));
    }
}

/// Compute the fully-typed construction expression for collection kinds.
///
/// Returns `None` for anything else; callers must not emit an instantiation
/// expression for non-collection properties.
pub fn to_instantiation_type(schema_type: &SchemaType, mapping: &TypeMapping) -> Option<String> {
    match schema_type {
        SchemaType::Map(value) => Some(format!("[String:{}]", element_type(value, mapping))),
        SchemaType::Array(element) => Some(format!("[{}]", element_type(element, mapping))),
        _ => None,
    }
}

fn element_type(schema_type: &SchemaType, mapping: &TypeMapping) -> String {
    match schema_type {
        SchemaType::Primitive(name) | SchemaType::ModelRef(name) => mapping.map(name),
        SchemaType::Array(element) => format!("[{}]", element_type(element, mapping)),
        SchemaType::Map(value) => format!("[String:{}]", element_type(value, mapping)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_property(json: &str) -> SchemaProperty {
        serde_json::from_str(json).expect("property should parse")
    }

    #[test]
    fn test_primitive_property() {
        let property = parse_property(r#"{"type": "string"}"#);
        let descriptor = from_property("name", &property, false, &GeneratorConfig::default());

        assert_eq!(descriptor.declared_type, "String");
        assert!(!descriptor.is_enum);
        assert!(descriptor.allowable_values.is_empty());
        assert!(descriptor.enum_type_name.is_none());
        assert!(descriptor.instantiation_type.is_none());
    }

    #[test]
    fn test_enum_materialization() {
        let property = parse_property(r#"{"type": "string", "enum": ["active", "inactive"]}"#);
        let descriptor = from_property("status", &property, false, &GeneratorConfig::default());

        assert!(descriptor.is_enum);
        assert_eq!(
            descriptor.allowable_values,
            vec![
                EnumValue::new("Active", "active"),
                EnumValue::new("Inactive", "inactive"),
            ]
        );
        assert_eq!(descriptor.enum_type_name.as_deref(), Some("Status"));
    }

    #[test]
    fn test_enum_label_capitalizes_only_first_character() {
        let property = parse_property(r#"{"type": "string", "enum": ["in_progress"]}"#);
        let descriptor = from_property("state", &property, false, &GeneratorConfig::default());

        assert_eq!(descriptor.allowable_values[0].label, "In_progress");
        assert_eq!(descriptor.allowable_values[0].raw, "in_progress");
    }

    #[test]
    fn test_enum_type_name_collision_is_escaped() {
        // "type" derives the combined name "TypeEnum"; the trimmed "Type"
        // collides with a Swift keyword.
        let property = parse_property(r#"{"type": "string", "enum": ["a", "b"]}"#);
        let descriptor = from_property("type", &property, false, &GeneratorConfig::default());

        assert_eq!(descriptor.enum_type_name.as_deref(), Some("SwaggerType"));
    }

    #[test]
    fn test_array_property_is_declared_opaquely() {
        let property = parse_property(r#"{"type": "array", "items": {"type": "string"}}"#);
        let descriptor = from_property("tags", &property, false, &GeneratorConfig::default());

        assert_eq!(descriptor.declared_type, TRANSFORMABLE);
        assert_eq!(descriptor.instantiation_type.as_deref(), Some("[String]"));
    }

    #[test]
    fn test_map_property_is_declared_opaquely() {
        let property = parse_property(
            r#"{"type": "object", "additionalProperties": {"type": "integer"}}"#,
        );
        let descriptor = from_property("counts", &property, false, &GeneratorConfig::default());

        assert_eq!(descriptor.declared_type, TRANSFORMABLE);
        assert_eq!(
            descriptor.instantiation_type.as_deref(),
            Some("[String:Integer 32]")
        );
    }

    #[test]
    fn test_array_of_models_keeps_element_fidelity() {
        let property = parse_property(
            r##"{"type": "array", "items": {"$ref": "#/definitions/Tag"}}"##,
        );
        let descriptor = from_property("tags", &property, false, &GeneratorConfig::default());

        assert_eq!(descriptor.declared_type, TRANSFORMABLE);
        assert_eq!(descriptor.instantiation_type.as_deref(), Some("[Tag]"));
    }

    #[test]
    fn test_no_default_is_ever_emitted() {
        let property = parse_property(r#"{"type": "string", "default": "fallback"}"#);
        let descriptor = from_property("name", &property, false, &GeneratorConfig::default());

        assert!(descriptor.default_value.is_none());
    }

    #[test]
    fn test_unwrap_required_drops_optional_wrapper() {
        let property = parse_property(r#"{"type": "string"}"#);

        let config = GeneratorConfig::default();
        let descriptor = from_property("name", &property, true, &config);
        assert!(descriptor.is_optional);

        let config = GeneratorConfig {
            unwrap_required: true,
            ..GeneratorConfig::default()
        };
        let descriptor = from_property("name", &property, true, &config);
        assert!(!descriptor.is_optional);

        // An optional property stays optional either way.
        let descriptor = from_property("name", &property, false, &config);
        assert!(descriptor.is_optional);
    }

    #[test]
    fn test_instantiation_type_for_non_collection_is_none() {
        assert_eq!(
            to_instantiation_type(&SchemaType::primitive("string"), &COREDATA_MAPPING),
            None
        );
        assert_eq!(
            to_instantiation_type(&SchemaType::model_ref("Pet"), &COREDATA_MAPPING),
            None
        );
    }

    #[test]
    fn test_nested_collection_instantiation() {
        let ty = SchemaType::array(SchemaType::map(SchemaType::primitive("string")));
        assert_eq!(
            to_instantiation_type(&ty, &COREDATA_MAPPING).as_deref(),
            Some("[[String:String]]")
        );
    }
}
