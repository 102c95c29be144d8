//! Scrape command: fetch the listing, extract flyers, persist the batch.

use crate::config::Config;
use crate::error::ScrapeError;
use crate::prospekt::{FlyerSource, Parser, ProspektClient};
use crate::sink::{FlyerSink, JsonFileSink};
use std::path::PathBuf;
use tracing::{info, warn};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeSummary {
    /// Number of flyers written
    pub flyers: usize,
    /// File the batch was written to
    pub output: PathBuf,
}

/// Executes a single scrape of the configured listing page.
pub struct ScrapeCommand {
    config: Config,
}

impl ScrapeCommand {
    /// Creates a new scrape command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the scrape against the live site and writes the configured output file.
    pub async fn execute(&self) -> Result<ScrapeSummary, ScrapeError> {
        let client = ProspektClient::new(&self.config)?;
        let sink = JsonFileSink::new(&self.config.output);

        self.execute_with(&client, &sink).await
    }

    /// Runs the scrape with a provided source and sink (for testing).
    ///
    /// A fetch failure ends the run before anything is written.
    pub async fn execute_with(
        &self,
        source: &impl FlyerSource,
        sink: &impl FlyerSink,
    ) -> Result<ScrapeSummary, ScrapeError> {
        let parser = Parser::with_shop_pattern(&self.config.shop_pattern)?;

        info!("Fetching flyer listing: {}", self.config.source_url);
        let html = source
            .fetch(&self.config.source_url)
            .await
            .inspect_err(|e| warn!("Failed to fetch listing page: {}", e))?;

        let records = parser.parse_listing(&html);
        info!("Extracted {} flyers", records.len());

        sink.persist(&records)?;
        info!("Saved {} flyers to {}", records.len(), self.config.output.display());

        Ok(ScrapeSummary { flyers: records.len(), output: self.config.output.clone() })
    }
}
