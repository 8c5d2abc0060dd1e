use std::{fs, path::PathBuf};

use cdgen_codegen::{GenerationContext, GeneratorConfig, Pipeline};
use cdgen_spec::{SpecDocument, validate};
use clap::Args;
use eyre::{Context, Result};
use indexmap::IndexMap;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the parsed specification document (JSON)
    #[arg(short, long, default_value = "spec.json")]
    pub spec: PathBuf,

    /// Output directory for descriptor files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Generator option as key=value (repeatable). Recognized keys:
    /// projectName, unwrapRequired, responseAs
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    /// Preview descriptors without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let document = SpecDocument::open(&self.spec).unwrap_or_exit();
        validate::check_path_parameters(&document).unwrap_or_exit();

        let config = GeneratorConfig::from_options(&parse_options(&self.options));
        let ctx = Pipeline::new().run(document, config)?;

        for diagnostic in &ctx.diagnostics {
            eprintln!("{}", diagnostic);
        }

        let models = serde_json::to_string_pretty(&ctx.models)?;
        let operations = serde_json::to_string_pretty(&ctx.operations)?;

        if self.dry_run {
            println!("── models.json ──");
            println!("{}", models);
            println!("── operations.json ──");
            println!("{}", operations);
        } else {
            fs::create_dir_all(&self.output).wrap_err("Failed to create output directory")?;
            fs::write(self.output.join("models.json"), models)
                .wrap_err("Failed to write models.json")?;
            fs::write(self.output.join("operations.json"), operations)
                .wrap_err("Failed to write operations.json")?;
        }

        self.print_summary(&ctx);
        Ok(())
    }

    fn print_summary(&self, ctx: &GenerationContext) {
        println!("{}", ctx.config.project_name);
        println!();

        println!("Models ({}):", ctx.models.len());
        for model in &ctx.models {
            println!("  {}", model.class_name);
        }
        println!();

        println!("Operations ({}):", ctx.operations.len());
        for operation in &ctx.operations {
            println!("  {} {}", operation.http_method, operation.path);
        }
        println!();

        println!("Supporting files for the renderer:");
        for file in ctx.config.supporting_files() {
            println!(
                "  {}/{} (from {})",
                file.folder, file.destination, file.template
            );
        }
    }
}

/// Split repeated `key=value` options; the last occurrence of a key wins. A
/// bare key maps to an empty value.
fn parse_options(raw: &[String]) -> IndexMap<String, String> {
    let mut options = IndexMap::new();
    for entry in raw {
        match entry.split_once('=') {
            Some((key, value)) => options.insert(key.trim().to_string(), value.to_string()),
            None => options.insert(entry.trim().to_string(), String::new()),
        };
    }
    options
}
