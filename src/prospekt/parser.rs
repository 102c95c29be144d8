//! Assembles flyer records from a listing page.

use crate::markup::Page;
use crate::prospekt::extract::FieldExtractor;
use crate::prospekt::models::FlyerRecord;
use crate::prospekt::selectors;
use chrono::{Local, NaiveDateTime};
use tracing::debug;

/// Parser for prospektmaschine.de listing pages.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    extractor: FieldExtractor,
}

impl Parser {
    /// Creates a parser around the given field extractor.
    pub fn new(extractor: FieldExtractor) -> Self {
        Self { extractor }
    }

    /// Creates a parser whose shop names are captured with `pattern`.
    pub fn with_shop_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::new(FieldExtractor::new(pattern)?))
    }

    /// Parses raw listing HTML into flyer records.
    pub fn parse_listing(&self, html: &str) -> Vec<FlyerRecord> {
        let page = Page::parse(html);
        self.assemble(&page)
    }

    /// Builds one record per flyer block, stamped with the current local time.
    pub fn assemble(&self, page: &Page) -> Vec<FlyerRecord> {
        self.assemble_at(page, Local::now().naive_local())
    }

    /// Builds one record per flyer block, stamped with `parsed_at`.
    ///
    /// Blocks without a description container are skipped. Output follows
    /// document order.
    pub fn assemble_at(&self, page: &Page, parsed_at: NaiveDateTime) -> Vec<FlyerRecord> {
        let mut records = Vec::new();
        let mut skipped = 0;

        for (index, block) in page.select_all(&selectors::ITEM).enumerate() {
            match self.extractor.extract(block, parsed_at) {
                Some(record) => records.push(record),
                None => {
                    debug!("Grid item {} has no description container, skipping", index);
                    skipped += 1;
                }
            }
        }

        debug!("Assembled {} flyers ({} blocks skipped)", records.len(), skipped);

        records
    }
}
