//! Fundamental schema type vocabulary.

/// The kind of a schema-declared type, decided once at the parse boundary.
///
/// Transformer logic pattern-matches on this variant instead of inspecting
/// raw specification fields, so type-kind decisions live in exactly one
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaType {
    /// A named primitive from the specification vocabulary (e.g. "string",
    /// "integer", "DateTime").
    Primitive(String),
    /// An ordered collection of the element type.
    Array(Box<SchemaType>),
    /// A keyed collection from string keys to the value type.
    Map(Box<SchemaType>),
    /// A reference to a user-defined model.
    ModelRef(String),
}

impl SchemaType {
    /// Build a primitive type.
    pub fn primitive(name: impl Into<String>) -> Self {
        SchemaType::Primitive(name.into())
    }

    /// Build an array of the given element type.
    pub fn array(element: SchemaType) -> Self {
        SchemaType::Array(Box::new(element))
    }

    /// Build a map from string keys to the given value type.
    pub fn map(value: SchemaType) -> Self {
        SchemaType::Map(Box::new(value))
    }

    /// Build a reference to a user-defined model.
    pub fn model_ref(name: impl Into<String>) -> Self {
        SchemaType::ModelRef(name.into())
    }

    /// Returns true for collection kinds (arrays and maps).
    pub fn is_collection(&self) -> bool {
        matches!(self, SchemaType::Array(_) | SchemaType::Map(_))
    }

    /// Collect the names of all user-defined models this type refers to,
    /// descending through collection element types.
    pub fn collect_model_refs<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            SchemaType::ModelRef(name) => out.push(name),
            SchemaType::Array(inner) | SchemaType::Map(inner) => inner.collect_model_refs(out),
            SchemaType::Primitive(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_collection() {
        assert!(SchemaType::array(SchemaType::primitive("string")).is_collection());
        assert!(SchemaType::map(SchemaType::primitive("integer")).is_collection());
        assert!(!SchemaType::primitive("string").is_collection());
        assert!(!SchemaType::model_ref("Pet").is_collection());
    }

    #[test]
    fn test_collect_model_refs_direct() {
        let ty = SchemaType::model_ref("Pet");
        let mut refs = Vec::new();
        ty.collect_model_refs(&mut refs);
        assert_eq!(refs, vec!["Pet"]);
    }

    #[test]
    fn test_collect_model_refs_nested() {
        let ty = SchemaType::array(SchemaType::map(SchemaType::model_ref("Tag")));
        let mut refs = Vec::new();
        ty.collect_model_refs(&mut refs);
        assert_eq!(refs, vec!["Tag"]);
    }

    #[test]
    fn test_collect_model_refs_primitive() {
        let ty = SchemaType::array(SchemaType::primitive("string"));
        let mut refs = Vec::new();
        ty.collect_model_refs(&mut refs);
        assert!(refs.is_empty());
    }
}
