//! scriptfx - filter preset catalog inspection CLI
//!
//! Lists the preset catalog, prints per-variant defaults and scripts,
//! scans film stock directories, and validates stored preset records.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "scriptfx")]
#[command(author, version, about = "Inspect the scriptfx filter preset catalog")]
#[command(long_about = "
Inspection tooling for the scriptfx filter preset catalog.

Examples:
  scriptfx list                       # All presets in selector order
  scriptfx list --json                # Same, machine readable
  scriptfx show sepia                 # Defaults and script of one preset
  scriptfx show 12                    # Look up by persisted tag
  scriptfx films                      # Built-in film emulation stocks
  scriptfx stocks --dir ~/luts        # Scan a custom stock directory
  scriptfx check preset.bin           # Decode a stored preset record
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every preset in selector order
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show one preset's defaults and script
    Show(ShowArgs),

    /// List the built-in film emulation stocks
    Films(FilmsArgs),

    /// Scan a directory for custom film stocks
    Stocks(StocksArgs),

    /// Decode a stored preset record and print its normalized command
    Check(CheckArgs),
}

#[derive(Args)]
struct ListArgs {
    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ShowArgs {
    /// Preset label (e.g. "sepia") or persisted tag number
    filter: String,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct FilmsArgs {
    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct StocksArgs {
    /// Directory to scan (defaults to the user configuration directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CheckArgs {
    /// Path of a stored preset record
    record: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List(args) => commands::list::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Films(args) => commands::films::run(args),
        Commands::Stocks(args) => commands::stocks::run(args, cli.verbose),
        Commands::Check(args) => commands::check::run(args, cli.verbose),
    }
}
