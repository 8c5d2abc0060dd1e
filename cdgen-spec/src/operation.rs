//! Operation and parameter types.

use cdgen_core::SchemaType;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::SchemaProperty;

/// One operation declared on a path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationSpec {
    #[serde(default, rename = "operationId")]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Grouping tags; the first one names the API the operation belongs to.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Declared parameters, in declaration order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Responses keyed by status code.
    #[serde(default)]
    pub responses: IndexMap<String, ResponseSpec>,
    /// Everything else, including vendor extensions.
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

impl OperationSpec {
    /// Schema of the success response, when one is declared.
    pub fn success_schema(&self) -> Option<&SchemaProperty> {
        self.responses
            .get("200")
            .and_then(|response| response.schema.as_ref())
    }
}

/// One declared response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseSpec {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schema: Option<SchemaProperty>,
}

/// One declared operation parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: Option<String>,
    /// Raw type for non-body parameters.
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    /// Schema for body parameters.
    #[serde(default)]
    pub schema: Option<SchemaProperty>,
}

impl Parameter {
    /// Decide the schema type of this parameter.
    pub fn schema_type(&self) -> SchemaType {
        if let Some(schema) = &self.schema {
            return schema.schema_type();
        }
        SchemaProperty {
            type_name: self.type_name.clone(),
            format: self.format.clone(),
            ..SchemaProperty::default()
        }
        .schema_type()
    }
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Body,
    #[serde(rename = "formData")]
    FormData,
}

impl ParameterLocation {
    /// The specification's name for this location.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Body => "body",
            ParameterLocation::FormData => "formData",
        }
    }

    /// Returns true for header-carried parameters.
    pub fn is_header(&self) -> bool {
        matches!(self, ParameterLocation::Header)
    }
}
