//! prospektmaschine.de modules for HTTP client, extraction, and data models.

pub mod client;
pub mod dates;
pub mod extract;
pub mod models;
pub mod parser;
pub mod selectors;

pub use client::{FlyerSource, ProspektClient};
pub use extract::FieldExtractor;
pub use models::{FlyerRecord, NOT_AVAILABLE};
pub use parser::Parser;
