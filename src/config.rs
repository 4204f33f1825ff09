use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub max_workers: usize,
    /// Listing URLs must have a host containing this.
    pub allowed_host: String,
    /// Unset means requests may block indefinitely.
    pub fetch_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            allowed_host: "bizbuysell.com".to_string(),
            fetch_timeout: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();
        let defaults = Self::default();

        Ok(Self {
            addr: match env::var("BIZ_COMPARE_ADDR") {
                Ok(v) => v
                    .parse()
                    .context("BIZ_COMPARE_ADDR must be a socket address like 127.0.0.1:3000")?,
                Err(_) => defaults.addr,
            },
            max_workers: match env::var("BIZ_COMPARE_MAX_WORKERS") {
                Ok(v) => v
                    .parse()
                    .context("BIZ_COMPARE_MAX_WORKERS must be a positive number")?,
                Err(_) => defaults.max_workers,
            },
            allowed_host: env::var("BIZ_COMPARE_ALLOWED_HOST").unwrap_or(defaults.allowed_host),
            fetch_timeout: match env::var("BIZ_COMPARE_FETCH_TIMEOUT_SECS") {
                Ok(v) => Some(Duration::from_secs(
                    v.parse()
                        .context("BIZ_COMPARE_FETCH_TIMEOUT_SECS must be a number of seconds")?,
                )),
                Err(_) => defaults.fetch_timeout,
            },
        })
    }
}
