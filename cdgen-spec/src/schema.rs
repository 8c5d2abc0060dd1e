//! Schema definition and property types.

use cdgen_core::{SchemaType, parse_lenient_bool};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// One named model definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaObject {
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Names of required properties.
    #[serde(default)]
    pub required: Vec<String>,
    /// Properties in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, SchemaProperty>,
    /// Everything else, including vendor extensions (`x-` keys).
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

impl SchemaObject {
    /// Returns true when `name` is listed as required.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|required| required == name)
    }

    /// Read a boolean vendor extension.
    ///
    /// Lenient: a JSON `true`, or the string "true" in any case, is true;
    /// everything else (including an absent key) is false.
    pub fn ext_flag(&self, key: &str) -> bool {
        match self.extensions.get(key) {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(s)) => parse_lenient_bool(s),
            _ => false,
        }
    }
}

/// One field of a model definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaProperty {
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default, rename = "$ref")]
    pub reference: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Element schema for array-kinded properties.
    #[serde(default)]
    pub items: Option<Box<SchemaProperty>>,
    /// Value schema for map-kinded properties.
    #[serde(default, rename = "additionalProperties")]
    pub additional_properties: Option<Box<SchemaProperty>>,
    /// Allowed values for enum-constrained properties.
    #[serde(default, rename = "enum")]
    pub enum_values: Option<Vec<Value>>,
    /// Declared default; intentionally ignored by the Core Data target.
    #[serde(default)]
    pub default: Option<Value>,
}

impl SchemaProperty {
    /// Decide the schema type of this property.
    ///
    /// This is the single point where raw `type`/`format`/`$ref` fields are
    /// interpreted; everything downstream pattern-matches on the result. An
    /// untyped property falls back to the generic "object" primitive.
    pub fn schema_type(&self) -> SchemaType {
        if let Some(reference) = &self.reference {
            return SchemaType::model_ref(reference_name(reference));
        }
        match self.type_name.as_deref() {
            Some("array") => {
                let element = self
                    .items
                    .as_ref()
                    .map(|items| items.schema_type())
                    .unwrap_or_else(|| SchemaType::primitive("object"));
                SchemaType::array(element)
            }
            Some("object") => match &self.additional_properties {
                Some(value) => SchemaType::map(value.schema_type()),
                None => SchemaType::primitive("object"),
            },
            Some(name) => SchemaType::primitive(primitive_name(name, self.format.as_deref())),
            None => SchemaType::primitive("object"),
        }
    }

    /// Returns true when the property carries a non-empty enum constraint.
    pub fn is_enum(&self) -> bool {
        self.enum_values
            .as_ref()
            .is_some_and(|values| !values.is_empty())
    }

    /// Raw allowed values as strings, in declaration order.
    pub fn raw_enum_values(&self) -> Vec<String> {
        self.enum_values
            .iter()
            .flatten()
            .map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect()
    }
}

/// Refine a raw `type`/`format` pair into the specification's primitive
/// vocabulary.
fn primitive_name(type_name: &str, format: Option<&str>) -> String {
    match (type_name, format) {
        ("integer", Some("int64")) => "long".to_string(),
        ("integer", _) => "integer".to_string(),
        ("number", Some("float")) => "float".to_string(),
        ("number", Some("double")) => "double".to_string(),
        ("number", _) => "number".to_string(),
        ("string", Some("date")) => "date".to_string(),
        ("string", Some("date-time")) => "DateTime".to_string(),
        ("string", Some("binary" | "byte")) => "file".to_string(),
        (other, _) => other.to_string(),
    }
}

/// Last segment of a `#/definitions/Name` reference.
fn reference_name(reference: &str) -> String {
    reference
        .rsplit('/')
        .next()
        .unwrap_or(reference)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_property(json: &str) -> SchemaProperty {
        serde_json::from_str(json).expect("property should parse")
    }

    #[test]
    fn test_schema_type_primitive() {
        let prop = parse_property(r#"{"type": "string"}"#);
        assert_eq!(prop.schema_type(), SchemaType::primitive("string"));
    }

    #[test]
    fn test_schema_type_format_refinement() {
        let prop = parse_property(r#"{"type": "integer", "format": "int64"}"#);
        assert_eq!(prop.schema_type(), SchemaType::primitive("long"));

        let prop = parse_property(r#"{"type": "number", "format": "double"}"#);
        assert_eq!(prop.schema_type(), SchemaType::primitive("double"));

        let prop = parse_property(r#"{"type": "string", "format": "date-time"}"#);
        assert_eq!(prop.schema_type(), SchemaType::primitive("DateTime"));
    }

    #[test]
    fn test_schema_type_reference() {
        let prop = parse_property(r##"{"$ref": "#/definitions/Pet"}"##);
        assert_eq!(prop.schema_type(), SchemaType::model_ref("Pet"));
    }

    #[test]
    fn test_schema_type_array() {
        let prop = parse_property(r#"{"type": "array", "items": {"type": "string"}}"#);
        assert_eq!(
            prop.schema_type(),
            SchemaType::array(SchemaType::primitive("string"))
        );
    }

    #[test]
    fn test_schema_type_map() {
        let prop = parse_property(
            r#"{"type": "object", "additionalProperties": {"type": "integer"}}"#,
        );
        assert_eq!(
            prop.schema_type(),
            SchemaType::map(SchemaType::primitive("integer"))
        );
    }

    #[test]
    fn test_schema_type_plain_object() {
        let prop = parse_property(r#"{"type": "object"}"#);
        assert_eq!(prop.schema_type(), SchemaType::primitive("object"));
    }

    #[test]
    fn test_schema_type_untyped() {
        let prop = parse_property("{}");
        assert_eq!(prop.schema_type(), SchemaType::primitive("object"));
    }

    #[test]
    fn test_raw_enum_values() {
        let prop = parse_property(r#"{"type": "string", "enum": ["active", "inactive"]}"#);
        assert!(prop.is_enum());
        assert_eq!(prop.raw_enum_values(), vec!["active", "inactive"]);
    }

    #[test]
    fn test_numeric_enum_values() {
        let prop = parse_property(r#"{"type": "integer", "enum": [1, 2]}"#);
        assert_eq!(prop.raw_enum_values(), vec!["1", "2"]);
    }

    #[test]
    fn test_empty_enum_is_not_enum() {
        let prop = parse_property(r#"{"type": "string", "enum": []}"#);
        assert!(!prop.is_enum());
    }

    #[test]
    fn test_vendor_extension_flags() {
        let schema: SchemaObject = serde_json::from_str(
            r#"{
                "properties": {},
                "x-init-required": true,
                "x-build-core-data": "true",
                "x-protocol-uuid-type": "yes"
            }"#,
        )
        .expect("schema should parse");

        assert!(schema.ext_flag("x-init-required"));
        assert!(schema.ext_flag("x-build-core-data"));
        assert!(!schema.ext_flag("x-protocol-uuid-type"));
        assert!(!schema.ext_flag("x-missing"));
    }

    #[test]
    fn test_is_required() {
        let schema: SchemaObject = serde_json::from_str(
            r#"{"required": ["id"], "properties": {"id": {"type": "integer"}}}"#,
        )
        .expect("schema should parse");

        assert!(schema.is_required("id"));
        assert!(!schema.is_required("name"));
    }
}
