//! Generator configuration.

use cdgen_core::parse_lenient_bool;
use cdgen_ir::SupportingFile;
use indexmap::IndexMap;

/// Option key selecting the generated project name.
pub const PROJECT_NAME: &str = "projectName";
/// Option key rendering required properties without an optional wrapper.
pub const UNWRAP_REQUIRED: &str = "unwrapRequired";
/// Option key selecting alternate response-wrapper representations.
pub const RESPONSE_AS: &str = "responseAs";

/// Process-wide generator configuration.
///
/// Built once from accumulated startup options and read-only for the rest of
/// the run; every transformer receives it explicitly.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Name of the generated project.
    pub project_name: String,
    /// When true, properties the specification marks required are rendered
    /// without an optional wrapper.
    pub unwrap_required: bool,
    /// Alternate return-wrapper type names for operation return types.
    pub response_as: Vec<String>,
    /// Folder supporting files are rooted in.
    pub source_folder: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_name: "SwaggerClient".to_string(),
            unwrap_required: false,
            response_as: Vec::new(),
            source_folder: "CoreDataBase".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Build a configuration from accumulated `key=value` options.
    ///
    /// Unrecognized keys are ignored. An unparsable boolean behaves as
    /// false; `responseAs` accepts a comma-separated list.
    pub fn from_options(options: &IndexMap<String, String>) -> Self {
        let mut config = Self::default();
        if let Some(name) = options.get(PROJECT_NAME) {
            config.project_name = name.clone();
        }
        if let Some(value) = options.get(UNWRAP_REQUIRED) {
            config.unwrap_required = parse_lenient_bool(value);
        }
        if let Some(value) = options.get(RESPONSE_AS) {
            config.response_as = value
                .split(',')
                .map(str::trim)
                .filter(|wrapper| !wrapper.is_empty())
                .map(str::to_string)
                .collect();
        }
        config
    }

    /// Supporting files the renderer is instructed to additionally produce.
    pub fn supporting_files(&self) -> Vec<SupportingFile> {
        vec![
            SupportingFile::new(
                "CoreDataBuilders.mustache",
                &self.source_folder,
                "CoreDataBuilders.swift",
            ),
            SupportingFile::new(
                "CoreDataCommonalities.mustache",
                &self.source_folder,
                "CoreDataCommonalities.swift",
            ),
            SupportingFile::new(
                "xcdatamodel.mustache",
                &self.source_folder,
                "CoreData.xcdatamodeld/CoreData.xcdatamodel/contents",
            ),
            SupportingFile::new("CDStack.mustache", &self.source_folder, "CDStack.swift"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(entries: &[(&str, &str)]) -> IndexMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.project_name, "SwaggerClient");
        assert!(!config.unwrap_required);
        assert!(config.response_as.is_empty());
    }

    #[test]
    fn test_project_name_override() {
        let config = GeneratorConfig::from_options(&options(&[(PROJECT_NAME, "PetStore")]));
        assert_eq!(config.project_name, "PetStore");
    }

    #[test]
    fn test_unwrap_required_lenient_parse() {
        let config = GeneratorConfig::from_options(&options(&[(UNWRAP_REQUIRED, "true")]));
        assert!(config.unwrap_required);

        let config = GeneratorConfig::from_options(&options(&[(UNWRAP_REQUIRED, "TRUE")]));
        assert!(config.unwrap_required);

        // Anything unparsable behaves as false rather than failing.
        let config = GeneratorConfig::from_options(&options(&[(UNWRAP_REQUIRED, "yes")]));
        assert!(!config.unwrap_required);
    }

    #[test]
    fn test_response_as_list() {
        let config =
            GeneratorConfig::from_options(&options(&[(RESPONSE_AS, "PromiseKit, RxSwift")]));
        assert_eq!(config.response_as, vec!["PromiseKit", "RxSwift"]);
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let config = GeneratorConfig::from_options(&options(&[("somethingElse", "1")]));
        assert_eq!(config.project_name, "SwaggerClient");
    }

    #[test]
    fn test_supporting_files() {
        let files = GeneratorConfig::default().supporting_files();
        assert_eq!(files.len(), 4);
        assert!(
            files
                .iter()
                .all(|file| file.folder == "CoreDataBase")
        );
        assert!(
            files
                .iter()
                .any(|file| file.destination == "CDStack.swift")
        );
    }
}
