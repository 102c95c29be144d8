//! Data model for extracted flyers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Placeholder written for any field that could not be determined.
///
/// This is part of the output format, so it is stored as a literal value
/// rather than as a missing field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Layout of the `parsed_time` field in the output file.
pub const PARSED_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single promotional flyer from the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlyerRecord {
    /// Flyer headline
    pub title: String,
    /// Thumbnail image reference, absolute or relative
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
    /// Shop identifier taken from the shop link
    pub shop_name: String,
    /// First day of validity (`YYYY-MM-DD`)
    pub valid_from: String,
    /// Last day of validity (`YYYY-MM-DD`)
    pub valid_to: String,
    /// Local wall-clock time of extraction
    #[serde(rename = "parsed_time", with = "parsed_time")]
    pub parsed_at: NaiveDateTime,
}

impl FlyerRecord {
    /// Returns true if both validity dates were recovered.
    pub fn has_validity(&self) -> bool {
        self.valid_from != NOT_AVAILABLE && self.valid_to != NOT_AVAILABLE
    }
}

/// Serde adapter for `YYYY-MM-DD HH:MM:SS` timestamps.
mod parsed_time {
    use super::PARSED_TIME_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(PARSED_TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, PARSED_TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
