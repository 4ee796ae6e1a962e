use std::path::Path;

use anyhow::Result;
use folio::{IndexPolicy, Order};

use crate::cli::ListCommand;
use crate::context;
use crate::output::{self, OutputFormat};

/// Execute a list command.
pub fn run(cmd: ListCommand, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let policy = IndexPolicy::from(cmd.sources.variant);
    let config = context::resolve_config(config_path, cmd.sources.overlay())?;

    let index = context::build_index(policy, config)?;
    output::print_words(&index, Order::from(cmd.order), format);

    Ok(())
}
