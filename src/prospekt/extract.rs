//! Per-block field extraction.
//!
//! Every field is looked up independently and falls back to `"N/A"` on its
//! own, so a broken shop link or an odd date never costs the other fields.

use crate::markup::Node;
use crate::prospekt::dates;
use crate::prospekt::models::{FlyerRecord, NOT_AVAILABLE};
use crate::prospekt::selectors;
use chrono::NaiveDateTime;
use regex::Regex;
use tracing::trace;

/// Default phrase pattern for the shop link title, e.g. "Prospekte des Geschäftes Kaufland".
pub const DEFAULT_SHOP_PATTERN: &str = r"(?:Geschäftes|business) (\w+)";

/// Pulls flyer fields out of a single listing block.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    shop_pattern: Regex,
}

impl FieldExtractor {
    /// Creates an extractor with a custom shop phrase pattern.
    ///
    /// The pattern's first capture group is taken as the shop name.
    pub fn new(shop_pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self { shop_pattern: Regex::new(shop_pattern)? })
    }

    /// Extracts a record from `block`.
    ///
    /// Returns `None` when the block has no description container; such
    /// blocks are layout filler rather than flyers.
    pub fn extract(&self, block: Node<'_>, parsed_at: NaiveDateTime) -> Option<FlyerRecord> {
        let description = block.select_first(&selectors::DESCRIPTION)?;

        let title = description
            .select_first(&selectors::TITLE)
            .map(|e| e.text().trim().to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let shop_name = description
            .select_first(&selectors::SHOP_LINK)
            .and_then(|e| e.attr(selectors::SHOP_TITLE_ATTR))
            .map(|title| self.shop_name_from_title(title))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        // Thumbnail sits outside the description container.
        let thumbnail_url = thumbnail(block);

        let (valid_from, valid_to) = validity(description);

        trace!("Extracted flyer: {} ({})", title, shop_name);

        Some(FlyerRecord { title, thumbnail_url, shop_name, valid_from, valid_to, parsed_at })
    }

    /// Captures the shop token from a link title like "Visit the business Aldi".
    pub fn shop_name_from_title(&self, title: &str) -> String {
        self.shop_pattern
            .captures(title)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self { shop_pattern: Regex::new(DEFAULT_SHOP_PATTERN).unwrap() }
    }
}

/// Image source of the block, preferring `src` over the lazy-load `data-src`.
fn thumbnail(block: Node<'_>) -> String {
    let Some(img) = block.select_first(&selectors::THUMBNAIL) else {
        return NOT_AVAILABLE.to_string();
    };

    [selectors::THUMBNAIL_SRC_ATTR, selectors::THUMBNAIL_LAZY_SRC_ATTR]
        .into_iter()
        .filter_map(|name| img.attr(name))
        .find(|src| !src.is_empty() && *src != NOT_AVAILABLE)
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Validity range from the first small-print element only.
fn validity(description: Node<'_>) -> (String, String) {
    match description.select_first(&selectors::VALIDITY) {
        Some(small) => dates::validity_range(small.text().trim()),
        None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
    }
}
