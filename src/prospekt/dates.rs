//! Validity date parsing for `DD.MM.YYYY` strings.

use crate::prospekt::models::NOT_AVAILABLE;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2}\.\d{2}\.\d{4})\s*-\s*(\d{2}\.\d{2}\.\d{4})").unwrap());

static SINGLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{2}\.\d{2}\.\d{4}").unwrap());

/// Converts `DD.MM.YYYY` to `YYYY-MM-DD`, or `"N/A"` if the text is not a valid date.
pub fn normalize(text: &str) -> String {
    match NaiveDate::parse_from_str(text.trim(), "%d.%m.%Y") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(e) => {
            debug!("Invalid date '{}': {}", text, e);
            NOT_AVAILABLE.to_string()
        }
    }
}

/// Extracts `(valid_from, valid_to)` from free text such as "01.02.2024 - 15.02.2024".
///
/// A range is preferred over a single date. A lone date fills both ends.
pub fn validity_range(text: &str) -> (String, String) {
    if let Some(caps) = RANGE.captures(text) {
        return (normalize(&caps[1]), normalize(&caps[2]));
    }

    if let Some(m) = SINGLE.find(text) {
        let date = normalize(m.as_str());
        return (date.clone(), date);
    }

    (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string())
}
