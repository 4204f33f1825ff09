mod extractor;
mod fetcher;
mod models;
mod scraper_error;

pub use extractor::ListingExtractor;
pub use fetcher::{ListingFetcher, ListingSource};
pub use scraper_error::ScraperError;
