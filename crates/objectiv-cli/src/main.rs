//! objectiv-validate - validate tracker events against the Objectiv taxonomy.

use clap::{Parser, Subcommand};
use objectiv_schema::TrackerPlatform;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod output;

use commands::{rules, validate};

#[derive(Parser)]
#[command(name = "objectiv-validate")]
#[command(about = "Objectiv taxonomy validation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate events (JSON array, JSON lines, or concatenated JSON)
    Validate {
        /// Events file (or stdin if not provided)
        events: Option<String>,
        /// Rule set JSON file (default: open taxonomy preset)
        #[arg(long)]
        rules: Option<String>,
        /// Platform used for the preset and for filtering rules
        #[arg(long)]
        platform: Option<TrackerPlatform>,
        /// Prefix for diagnostic headers
        #[arg(long)]
        log_prefix: Option<String>,
        /// Output diagnostics as JSON lines
        #[arg(long)]
        json: bool,
        /// Exit with error code if any event has diagnostics or fails to parse
        #[arg(long)]
        strict: bool,
        /// Stop after reading N events (default: unlimited)
        #[arg(long)]
        max_events: Option<usize>,
        /// Disable coloured diagnostics
        #[arg(long)]
        no_color: bool,
        /// Emit diagnostics as structured `tracing` warnings instead of console groups
        #[arg(long)]
        log_diagnostics: bool,
    },
    /// Show the effective rule set
    Rules {
        /// Rule set JSON file (default: open taxonomy preset)
        #[arg(long)]
        rules: Option<String>,
        /// Platform used for the preset and for filtering rules
        #[arg(long)]
        platform: Option<TrackerPlatform>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate {
            events,
            rules,
            platform,
            log_prefix,
            json,
            strict,
            max_events,
            no_color,
            log_diagnostics,
        } => validate::run(validate::Options {
            events,
            rules,
            platform,
            log_prefix,
            json,
            strict,
            max_events,
            color: !no_color,
            log_diagnostics,
        }),
        Commands::Rules {
            rules,
            platform,
            json,
        } => rules::run(rules, platform, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
