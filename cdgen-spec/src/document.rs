//! Specification document types and parsing.

use std::{fs, path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, OperationSpec, Result, SchemaObject};

/// Operations available on one path, keyed by HTTP method.
pub type PathItem = IndexMap<String, OperationSpec>;

/// Root of a parsed specification document.
///
/// The document is expected to be pre-structured: a mapping from model name
/// to schema definition plus a mapping from URL path template to operations.
/// Declaration order is preserved in both mappings because it is semantic
/// for generated output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecDocument {
    /// Named schema definitions, in declaration order.
    #[serde(default)]
    pub definitions: IndexMap<String, SchemaObject>,
    /// Path templates mapped to their operations.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
}

impl SpecDocument {
    /// Read and parse a specification document from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        serde_json::from_str(&content).map_err(|source| Error::parse(path, source))
    }
}

impl FromStr for SpecDocument {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|source| Error::parse("<inline>", source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_document() {
        let doc: SpecDocument = "{}".parse().expect("empty document should parse");
        assert!(doc.definitions.is_empty());
        assert!(doc.paths.is_empty());
    }

    #[test]
    fn test_parse_preserves_declaration_order() {
        let doc: SpecDocument = r#"{
            "definitions": {
                "Zebra": {"properties": {}},
                "Apple": {"properties": {}}
            }
        }"#
        .parse()
        .expect("document should parse");

        let names: Vec<_> = doc.definitions.keys().collect();
        assert_eq!(names, vec!["Zebra", "Apple"]);
    }

    #[test]
    fn test_parse_paths_and_methods() {
        let doc: SpecDocument = r#"{
            "paths": {
                "/pets": {
                    "get": {"operationId": "listPets"},
                    "post": {"operationId": "createPet"}
                }
            }
        }"#
        .parse()
        .expect("document should parse");

        let item = doc.paths.get("/pets").expect("path should be present");
        assert_eq!(item.len(), 2);
        assert_eq!(
            item.get("get").and_then(|op| op.operation_id.as_deref()),
            Some("listPets")
        );
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result: Result<SpecDocument> = "not json".parse();
        assert!(matches!(*result.unwrap_err(), Error::Parse { .. }));
    }
}
