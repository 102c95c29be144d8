//! Error types for fetching and persisting flyer listings.
//!
//! Per-field and per-block problems never show up here: they resolve to the
//! `"N/A"` sentinel or a skipped block. Only failures that end a run do.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to retrieve the listing page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] wreq::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}

/// Terminal failure of a scrape run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to fetch listing page: {0}")]
    Fetch(#[from] FetchError),

    #[error("invalid shop name pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to serialize flyers: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
