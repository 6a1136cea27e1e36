use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lunar birthday converter.
#[derive(Parser)]
#[command(
    name = "lunar-birthday",
    version,
    about = "Find the Gregorian dates of a Chinese lunar birthday"
)]
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
    /// Serve the conversion API over HTTP.
    Serve(ServeArgs),
    /// Convert one birth date and print the response JSON.
    Convert(ConvertArgs),
}

/// Arguments for the `serve` subcommand.
#[derive(clap::Args)]
pub struct ServeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the listening port from config.
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Birth date, YYYY-MM-DD.
    pub birth_date: String,

    /// Number of lunar years to project.
    #[arg(short, long)]
    pub years: Option<i64>,

    /// First lunar year to project (defaults to the birth year).
    #[arg(short, long)]
    pub start_year: Option<i32>,

    /// Always use the ordinary month, even in years repeating a leap month of birth.
    #[arg(long)]
    pub no_leap: bool,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
