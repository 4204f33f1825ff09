use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Selector error: {0}")]
    Selector(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl From<reqwest::Error> for ScraperError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ScraperError::HttpStatus {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => ScraperError::Network(err.to_string()),
        }
    }
}
