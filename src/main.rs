mod cli;
mod logging;
mod render;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use insurance_age::clock::{self, Clock};
use insurance_age::config::{self, Config, OutputFormat};
use insurance_age::compute_insurance_age;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path, true)?,
        None => Config::load(Path::new(config::DEFAULT_CONFIG_PATH), false)?,
    };

    let tz = match &cli.tz {
        Some(name) => config::parse_timezone(name)?,
        None => config.timezone,
    };

    let source = clock::reference_clock(cli.reference, tz);
    let reference = source.today();
    if cli.reference.is_none() {
        tracing::info!(today = %reference, timezone = %tz, "reference date defaulted to today");
    }

    // A rejected date pair returns before anything is printed.
    let report = compute_insurance_age(cli.birth, reference)?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.format
    };

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{json}");
        }
        OutputFormat::Text => print!("{}", render::render_text(&report)),
    }

    Ok(())
}
