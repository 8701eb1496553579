use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tools for date-aligned daily series.
#[derive(Parser)]
#[command(name = "dayvec", version, about = "Date-aligned daily series tools")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Re-align a series to a new date window and print it.
    Resize(ResizeArgs),
    /// Print the date range and length of a series.
    Info(InfoArgs),
}

/// Arguments for the `resize` subcommand.
#[derive(clap::Args)]
pub struct ResizeArgs {
    /// Path to the series TOML file.
    #[arg(short, long, default_value = "series.toml")]
    pub config: PathBuf,

    /// New first day (YYYY-MM-DD); overrides `[resize].first_day`.
    #[arg(long)]
    pub first_day: Option<String>,

    /// New last day (YYYY-MM-DD); overrides `[resize].last_day`.
    #[arg(long)]
    pub last_day: Option<String>,
}

/// Arguments for the `info` subcommand.
#[derive(clap::Args)]
pub struct InfoArgs {
    /// Path to the series TOML file.
    #[arg(short, long, default_value = "series.toml")]
    pub config: PathBuf,
}
