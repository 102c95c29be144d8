//! flyer-scraper - Retail flyer listings from prospektmaschine.de as JSON
//!
//! Fetches one listing page, extracts title, shop, thumbnail and validity
//! dates for every flyer tile, and writes the batch to a JSON file.

pub mod commands;
pub mod config;
pub mod error;
pub mod markup;
pub mod prospekt;
pub mod sink;

pub use config::Config;
pub use error::{FetchError, ScrapeError};
pub use prospekt::models::{FlyerRecord, NOT_AVAILABLE};
