mod cli;
mod config;
mod info_cmd;
mod logging;
mod resize_cmd;

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
        Command::Resize(args) => resize_cmd::run(args),
        Command::Info(args) => info_cmd::run(args),
    }
}
