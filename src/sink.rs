//! Persistence of assembled flyer batches.

use crate::error::ScrapeError;
use crate::prospekt::FlyerRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Destination for a complete batch of flyers.
pub trait FlyerSink {
    /// Writes all `records` as a single batch, or nothing at all.
    fn persist(&self, records: &[FlyerRecord]) -> Result<(), ScrapeError>;
}

/// Writes flyers as a pretty-printed JSON array.
///
/// Non-ASCII text (shop names, umlauts in titles) is written as-is. The file
/// is replaced atomically, so readers never see a half-written batch.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    /// Creates a sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes `records` with a four-space indent.
    pub fn render(records: &[FlyerRecord]) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        records.serialize(&mut serializer)?;
        Ok(buf)
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl FlyerSink for JsonFileSink {
    fn persist(&self, records: &[FlyerRecord]) -> Result<(), ScrapeError> {
        let bytes = Self::render(records)?;
        let staging = self.staging_path();

        debug!("Writing {} bytes to {}", bytes.len(), staging.display());
        fs::write(&staging, &bytes)
            .map_err(|source| ScrapeError::Persist { path: staging.clone(), source })?;

        if let Err(source) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(ScrapeError::Persist { path: self.path.clone(), source });
        }

        Ok(())
    }
}
