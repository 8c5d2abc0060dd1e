//! Operation transformation and path normalization.

use std::sync::LazyLock;

use cdgen_core::to_camel_case;
use cdgen_ir::{OperationDescriptor, ParameterDescriptor};
use cdgen_spec::{OperationSpec, Parameter};
use regex::Regex;

use crate::{
    config::GeneratorConfig,
    naming::to_api_name,
    property::declared_type,
    type_mapper::COREDATA_MAPPING,
};

/// One-or-more letters or underscores between braces.
static PATH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[a-zA-Z_]+\}").expect("placeholder pattern is valid"));

/// Produce an operation descriptor from a path, method, and operation spec.
///
/// Header-carried parameters are supplied by the transport layer and removed
/// up front; the order of the remaining parameters is preserved.
pub fn from_operation(
    path: &str,
    http_method: &str,
    operation: &OperationSpec,
    config: &GeneratorConfig,
) -> OperationDescriptor {
    let parameters: Vec<ParameterDescriptor> = operation
        .parameters
        .iter()
        .filter(|parameter| !parameter.location.is_header())
        .map(from_parameter)
        .collect();

    let return_type = operation
        .success_schema()
        .map(|schema| declared_type(&schema.schema_type(), &COREDATA_MAPPING));

    OperationDescriptor {
        path: normalize_path(path),
        http_method: http_method.to_uppercase(),
        operation_id: operation.operation_id.clone(),
        summary: operation.summary.clone(),
        api_name: to_api_name(operation.tags.first().map(String::as_str).unwrap_or("")),
        has_params: !parameters.is_empty(),
        parameters,
        return_type,
        response_wrappers: config.response_as.clone(),
    }
}

fn from_parameter(parameter: &Parameter) -> ParameterDescriptor {
    ParameterDescriptor {
        name: parameter.name.clone(),
        location: parameter.location.as_str().to_string(),
        data_type: declared_type(&parameter.schema_type(), &COREDATA_MAPPING),
        required: parameter.required,
        description: parameter.description.clone(),
    }
}

/// Rewrite each `{placeholder}` identifier to the target's camelCase
/// parameter naming convention.
///
/// Matches are processed left to right and never overlap; literal text is
/// copied unchanged, so the result carries the same placeholders in the same
/// order. A path with no placeholders comes back unchanged.
pub fn normalize_path(path: &str) -> String {
    PATH_PARAM
        .replace_all(path, |captures: &regex::Captures<'_>| {
            let matched = &captures[0];
            let identifier = &matched[1..matched.len() - 1];
            format!("{{{}}}", to_camel_case(identifier))
        })
        .into_owned()
}
