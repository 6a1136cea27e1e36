mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use lunar_birthday::Date;
use lunar_birthday::api::{self, ConvertRequest};
use lunar_birthday::config::AppConfig;
use lunar_birthday::http_server::HttpServer;
use tracing::info;

use crate::cli::{Cli, Command, ConvertArgs, ServeArgs};

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
        Command::Serve(args) => serve(args),
        Command::Convert(args) => convert(args),
    }
}

fn serve(args: ServeArgs) -> Result<()> {
    let mut config = AppConfig::load(args.config.as_deref())?;
    config.server.override_port(args.port);
    info!(config = ?config, "starting server");

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(HttpServer::with_config(config).start())
}

fn convert(args: ConvertArgs) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref())?;
    let request = ConvertRequest {
        birth_date: Some(args.birth_date),
        years_count: args.years,
        include_leap: Some(!args.no_leap),
        start_year: args.start_year,
    }
    .validate(&config.projection)?;

    let response = api::convert(&request, Date::today())?;
    let json = serde_json::to_string_pretty(&response).context("failed to serialize response")?;
    println!("{json}");
    Ok(())
}
