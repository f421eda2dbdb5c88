use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aanbod_core::AppConfig;
use aanbod_scraper::{Retailer, SnapshotClient};

#[derive(Debug, Parser)]
#[command(name = "aanbod")]
#[command(about = "Dutch grocery promotional-offer catalog extractor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract the offer catalog for one retailer.
    Scrape {
        /// Retailer to scrape: ah, dirk or jumbo.
        #[arg(long)]
        retailer: String,

        /// Read the page snapshot from a local HTML file instead of fetching
        /// the retailer's offers URL. Required for AH and Jumbo, whose offer
        /// grids only render client-side.
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Write the JSON catalog to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = aanbod_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scrape {
            retailer,
            snapshot,
            out,
        } => scrape(&config, &retailer, snapshot, out).await,
    }
}

async fn scrape(
    config: &AppConfig,
    retailer: &str,
    snapshot: Option<PathBuf>,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let retailer: Retailer = retailer.parse()?;

    let html = match snapshot {
        Some(path) => {
            tracing::info!(retailer = %retailer, path = %path.display(), "reading snapshot file");
            tokio::fs::read_to_string(&path).await?
        }
        None => {
            let client = SnapshotClient::new(
                config.request_timeout_secs,
                &config.user_agent,
                config.max_retries,
                config.retry_backoff_base_secs,
            )?;
            client.fetch_page(retailer.offers_url()).await?
        }
    };

    // The capture instant doubles as the reference for year resolution; the
    // pipeline itself never reads the clock.
    let catalog =
        aanbod_scraper::extract_catalog(retailer, &html, Utc::now(), config.dirk_window_days)?;

    let offer_count: usize = catalog.iter().map(|c| c.offers.len()).sum();
    tracing::info!(
        retailer = %retailer,
        categories = catalog.len(),
        offers = offer_count,
        "extraction finished"
    );

    let json = serde_json::to_string_pretty(&catalog)?;
    match out {
        Some(path) => tokio::fs::write(&path, json).await?,
        None => println!("{json}"),
    }

    Ok(())
}
