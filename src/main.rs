use crate::app::App;
use crate::config::Config;
use crate::router::handle;
use crate::scraper::{ListingExtractor, ListingFetcher};
use anyhow::{Context, Result};
use astra::Server;

mod app;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod scraper;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,biz_compare=debug".into()),
        )
        .with_target(true)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.as_slice() {
        [cmd, path] if cmd == "parse" => parse_file(path),
        [] => serve(),
        _ => {
            eprintln!("usage: biz_compare [parse <listing.html>]");
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}

/// Extracts one listing from a saved page and prints it as JSON.
fn parse_file(path: &str) -> Result<()> {
    let html = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let extractor = ListingExtractor::new()?;
    let record = extractor.extract_html(&html);

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn serve() -> Result<()> {
    let config = Config::from_env()?;
    tracing::debug!(?config, "loaded config");

    let fetcher = ListingFetcher::new(config.fetch_timeout)?;
    let app = App::new(Box::new(fetcher), config.allowed_host.as_str())?;

    tracing::info!("Starting server at http://{}", config.addr);

    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    server
        .serve(move |req, _info| match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(error = %err, "request failed");
                templates::html_error_response(err)
            }
        })
        .context("server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
