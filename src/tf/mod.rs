//! Terraform side of the pipeline: file generation and subprocess phases

mod emit;
mod runner;

pub use emit::{emit_imports, write_import_block, write_provider_block, ProviderBlock};
pub use runner::{CommandRunner, PlanOutcome, ProcessRunner, TerraformCli};
