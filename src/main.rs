//! flyer-scraper - Retail flyer listings from prospektmaschine.de as JSON

use anyhow::Result;
use clap::Parser;
use flyer_scraper::commands::ScrapeCommand;
use flyer_scraper::config::Config;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "flyer-scraper",
    version,
    about = "Scrape retail flyers from prospektmaschine.de into JSON",
    long_about = "Fetches the hypermarket flyer listing, extracts title, shop, thumbnail and validity dates, and writes them to a JSON file."
)]
struct Cli {
    /// Listing page URL
    #[arg(long, env = "FLYERS_URL")]
    url: Option<String>,

    /// Output JSON file
    #[arg(short, long, env = "FLYERS_OUTPUT")]
    output: Option<PathBuf>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, env = "FLYERS_PROXY")]
    proxy: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(url) = cli.url {
        config.source_url = url;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    let summary = ScrapeCommand::new(config).execute().await?;
    println!("Saved {} flyers to {}", summary.flyers, summary.output.display());

    Ok(())
}
