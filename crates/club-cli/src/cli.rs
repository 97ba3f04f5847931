use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `clubstats` binary.
#[derive(Debug, Parser)]
#[command(
    name = "clubstats",
    version,
    about = "Export a GeoGuessr club roster with per-member stats to CSV"
)]
pub struct Cli {
    /// Session cookie value (defaults to NCFA_TOKEN / config)
    #[arg(long)]
    pub token: Option<String>,

    /// Club to export (skips the profile lookup)
    #[arg(long)]
    pub club_id: Option<String>,

    /// CSV output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pause between members, in milliseconds
    #[arg(long)]
    pub throttle_ms: Option<u64>,

    /// Override the API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Quiet mode (suppress progress lines)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}
