// src/domain/session.rs
use crate::domain::listing::ListingRecord;

/// Listings collected during one comparison session, plus any one-shot
/// messages waiting to be shown on the next page render.
///
/// Nothing here outlives the process.
#[derive(Debug, Default)]
pub struct ListingSession {
    records: Vec<ListingRecord>,
    flashes: Vec<String>,
}

impl ListingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ListingRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ListingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every collected listing. Pending flashes are kept.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn flash(&mut self, message: impl Into<String>) {
        self.flashes.push(message.into());
    }

    pub fn take_flashes(&mut self) -> Vec<String> {
        std::mem::take(&mut self.flashes)
    }
}
