//! Sieve CLI binary.
//!
//! Screens a batch of equities on fundamentals and ranks them.

mod cmd;
mod export;
mod logging;
mod presenter;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::{path::PathBuf, process};

#[derive(Parser)]
#[command(name = "sieve")]
#[command(about = "Sector-relative fundamental stock screener", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch fundamentals and rank a batch of symbols
    Screen {
        /// Ticker symbols to screen
        symbols: Vec<String>,

        /// Screen the current S&P 500 constituents
        #[arg(long)]
        sp500: bool,

        /// Only screen the first N symbols of the universe
        #[arg(long)]
        sample: Option<usize>,

        /// Maximum number of concurrent fetches
        #[arg(short, long, env = "SIEVE_BATCH_SIZE", default_value = "8")]
        batch_size: usize,

        /// Number of top-ranked rows to chart
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Only list entities classified as great
        #[arg(long)]
        great_only: bool,

        /// Write the ranked table to a CSV file
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Per-request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
    },

    /// List the screening rules
    Rules,
}

/// How the screen command prints its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Tables and charts for a terminal
    Text,
    /// The full report as JSON
    Json,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    logging::init_logging();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Screen {
            symbols,
            sp500,
            sample,
            batch_size,
            top,
            great_only,
            export,
            format,
            timeout,
        } => {
            let options = cmd::screen::ScreenOptions {
                symbols,
                sp500,
                sample,
                batch_size,
                top,
                great_only,
                export,
                format,
                timeout,
            };
            cmd::screen::run_screen(options).await?;
        }
        Commands::Rules => {
            cmd::rules::list_rules();
        }
    }

    Ok(())
}
