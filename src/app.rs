// app.rs
use crate::domain::{ListingRecord, ListingSession};
use crate::errors::ServerError;
use crate::scraper::{ListingExtractor, ListingSource, ScraperError};
use std::sync::{Mutex, MutexGuard};
use url::Url;

/// Everything a request handler needs: the page source, the extractor and
/// the one comparison session this server keeps.
pub struct App {
    source: Box<dyn ListingSource>,
    extractor: ListingExtractor,
    session: Mutex<ListingSession>,
    allowed_host: String,
}

impl App {
    pub fn new(
        source: Box<dyn ListingSource>,
        allowed_host: impl Into<String>,
    ) -> Result<Self, ScraperError> {
        Ok(Self {
            source,
            extractor: ListingExtractor::new()?,
            session: Mutex::new(ListingSession::new()),
            allowed_host: allowed_host.into(),
        })
    }

    pub fn session(&self) -> Result<MutexGuard<'_, ListingSession>, ServerError> {
        self.session.lock().map_err(|_| ServerError::InternalError)
    }

    /// Accepts only absolute http(s) URLs on the configured marketplace.
    pub fn validate_listing_url(&self, raw: &str) -> Option<Url> {
        let url = Url::parse(raw.trim()).ok()?;
        let host_ok = url
            .host_str()
            .is_some_and(|host| host.contains(self.allowed_host.as_str()));

        (matches!(url.scheme(), "http" | "https") && host_ok).then_some(url)
    }

    /// Fetches and extracts one listing. Doesn't touch the session.
    pub fn scrape(&self, url: &Url) -> Result<ListingRecord, ScraperError> {
        let html = self.source.fetch(url.as_str())?;
        Ok(self.extractor.extract_html(&html))
    }
}
