use std::path::PathBuf;

use cdgen_codegen::{GeneratorConfig, Pipeline};
use cdgen_spec::{SpecDocument, validate};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the parsed specification document (JSON)
    #[arg(short, long, default_value = "spec.json")]
    pub spec: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let document = SpecDocument::open(&self.spec).unwrap_or_exit();
        validate::check_path_parameters(&document).unwrap_or_exit();

        let ctx = Pipeline::new().run(document, GeneratorConfig::default())?;

        if ctx.diagnostics.is_empty() {
            println!(
                "OK: {} model(s), {} operation(s)",
                ctx.models.len(),
                ctx.operations.len()
            );
        } else {
            for diagnostic in &ctx.diagnostics {
                println!("{}", diagnostic);
            }
            println!();
            println!(
                "{} warning(s), {} model(s), {} operation(s)",
                ctx.warning_count(),
                ctx.models.len(),
                ctx.operations.len()
            );
        }

        Ok(())
    }
}
