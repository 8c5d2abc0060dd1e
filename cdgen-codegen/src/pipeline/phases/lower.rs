//! Lower phase - transforms the specification into descriptors.
//!
//! This is the single batch pass: every definition becomes a model
//! descriptor and every path/method pair becomes an operation descriptor,
//! both in declaration order.

use cdgen_ir::{ModelDescriptor, OperationDescriptor};
use cdgen_spec::SpecDocument;
use eyre::Result;

use crate::{
    config::GeneratorConfig,
    model::from_model,
    operation::from_operation,
    pipeline::{GenerationContext, Phase},
};

/// Phase that transforms the specification into the descriptor tree.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Transform the specification into descriptors"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let (models, operations) = lower_document(&ctx.spec, &ctx.config);
        ctx.models = models;
        ctx.operations = operations;
        Ok(())
    }
}

/// Lower a whole document into model and operation descriptors.
fn lower_document(
    spec: &SpecDocument,
    config: &GeneratorConfig,
) -> (Vec<ModelDescriptor>, Vec<OperationDescriptor>) {
    let mut models: Vec<ModelDescriptor> = spec
        .definitions
        .iter()
        .map(|(name, schema)| from_model(name, schema, config))
        .collect();

    // Positional flag: every model but the last sees a follower.
    let count = models.len();
    for (index, model) in models.iter_mut().enumerate() {
        model.has_more_models = index + 1 < count;
    }

    let operations = spec
        .paths
        .iter()
        .flat_map(|(path, item)| {
            item.iter()
                .map(|(method, operation)| from_operation(path, method, operation, config))
        })
        .collect();

    (models, operations)
}
