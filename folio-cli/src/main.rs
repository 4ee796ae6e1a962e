mod cli;
mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::{build, list, repl};

fn main() -> Result<()> {
    let cli = Cli::parse();
    context::init_logging(cli.verbose);
    let format = cli.format;
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Build(cmd) => build::run(cmd, config_path, format),
        Command::List(cmd) => list::run(cmd, config_path, format),
        Command::Repl => repl::run(config_path, format),
    }
}
