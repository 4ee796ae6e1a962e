use std::path::Path;

use anyhow::Result;
use folio::IndexPolicy;

use crate::cli::BuildCommand;
use crate::context;
use crate::output::{self, BuildSummary, OutputFormat};

/// Execute a build command.
pub fn run(cmd: BuildCommand, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let policy = IndexPolicy::from(cmd.sources.variant);
    let config = context::resolve_config(config_path, cmd.overlay())?;

    let index = context::build_report(policy, config.clone())?;
    let summary = BuildSummary::new(policy, &index, config.output_file.as_deref());
    output::print_build_summary(&summary, format);

    Ok(())
}
