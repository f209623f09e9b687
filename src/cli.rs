use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// Taiwan insurance-age calculator (half-year rounding).
#[derive(Parser, Debug)]
#[command(
    name = "insurance-age",
    version,
    about = "Insurance age with half-year rounding, and the next date it increments"
)]
pub struct Cli {
    /// Birth date (YYYY-MM-DD).
    #[arg(short, long)]
    pub birth: NaiveDate,

    /// Policy-effective / reference date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub reference: Option<NaiveDate>,

    /// IANA timezone used to resolve today, e.g. Asia/Taipei.
    #[arg(long)]
    pub tz: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
