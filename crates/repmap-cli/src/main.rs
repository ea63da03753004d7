mod coverage;
mod inspect;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "repmap-cli")]
#[command(about = "Inspect representative payloads and region coverage")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize a payload file and print the report
    Normalize {
        /// JSON array of raw representative records
        payload: PathBuf,
        /// Print only the summary, not the normalized JSON
        #[arg(long)]
        summary_only: bool,
    },
    /// Search representatives by name, contact, region, activity or city
    Search {
        query: String,
        /// Payload file; the sample data set is used when omitted
        #[arg(long, env = "REPMAP_PAYLOAD_PATH")]
        payload: Option<PathBuf>,
    },
    /// Print the contact panel for a region or district code
    Region {
        /// Region code (e.g. RU-MOW) or district abbreviation (e.g. ЦФО)
        code: String,
        /// Payload file; the sample data set is used when omitted
        #[arg(long, env = "REPMAP_PAYLOAD_PATH")]
        payload: Option<PathBuf>,
    },
    /// Join a boundary file against the registry and report coverage
    Coverage {
        /// Local path or http(s) URL of the boundary file
        boundaries: String,
        /// Payload file; the sample data set is used when omitted
        #[arg(long, env = "REPMAP_PAYLOAD_PATH")]
        payload: Option<PathBuf>,
        /// Timeout for fetching a remote boundary file
        #[arg(long, default_value_t = repmap_core::config::DEFAULT_BOUNDARY_TIMEOUT_SECS)]
        timeout_secs: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Normalize {
            payload,
            summary_only,
        } => inspect::run_normalize(&payload, summary_only)?,
        Commands::Search { query, payload } => inspect::run_search(&query, payload.as_deref())?,
        Commands::Region { code, payload } => inspect::run_region(&code, payload.as_deref())?,
        Commands::Coverage {
            boundaries,
            payload,
            timeout_secs,
        } => coverage::run_coverage(&boundaries, payload.as_deref(), timeout_secs).await?,
    }

    Ok(())
}
