// fetcher.rs
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:90.0) Gecko/20100101 Firefox/90.0";

/// Anything that can turn a listing URL into page HTML.
pub trait ListingSource: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, ScraperError>;
}

pub struct ListingFetcher {
    client: Client,
}

impl ListingFetcher {
    /// `timeout: None` lets a stalled connection block the caller indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl ListingSource for ListingFetcher {
    /// One GET, no retries. Non-2xx responses are errors.
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let start = std::time::Instant::now();

        let resp = self.client.get(url).send()?;
        let status = resp.status();

        if !status.is_success() {
            tracing::warn!(%url, %status, "listing fetch rejected");
            return Err(ScraperError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = resp.text()?;
        tracing::info!(%url, bytes = text.len(), elapsed = ?start.elapsed(), "fetched listing");

        Ok(text)
    }
}
