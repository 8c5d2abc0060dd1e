//! Operation descriptors.

use serde::Serialize;

/// Renderer-ready description of one operation parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterDescriptor {
    pub name: String,
    /// Where the parameter is carried (path, query, body, formData). Header
    /// parameters never reach a descriptor.
    pub location: String,
    pub data_type: String,
    pub required: bool,
    pub description: Option<String>,
}

/// Renderer-ready description of one API operation.
#[derive(Debug, Clone, Serialize)]
pub struct OperationDescriptor {
    /// Path template with placeholders rewritten to the target's parameter
    /// naming convention.
    pub path: String,
    pub http_method: String,
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    /// Name of the API type grouping this operation.
    pub api_name: String,
    /// Parameters in declaration order, header-located ones excluded.
    pub parameters: Vec<ParameterDescriptor>,
    pub has_params: bool,
    pub return_type: Option<String>,
    /// Alternate return-wrapper representations selected by configuration.
    pub response_wrappers: Vec<String>,
}
