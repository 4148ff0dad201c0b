mod annotate_cmd;
mod cli;
mod config;
mod convert;
mod describe_cmd;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Annotate(args) => annotate_cmd::run(args),
        Command::Describe(args) => describe_cmd::run(args),
        Command::Indices => describe_cmd::list_indices(),
    }
}
