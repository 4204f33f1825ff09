use crate::app::App;
use crate::scraper::{ListingSource, ScraperError};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

pub const SAMPLE_LISTING: &str = include_str!("fixtures/sample_listing.html");

pub const LISTING_URL: &str =
    "https://www.bizbuysell.com/business-opportunity/profitable-coffee-roaster/123456/";

/// Serves canned HTML instead of hitting the network. `None` simulates an
/// upstream failure.
pub struct StubSource {
    html: Option<String>,
}

impl ListingSource for StubSource {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        match &self.html {
            Some(html) => Ok(html.clone()),
            None => Err(ScraperError::HttpStatus {
                status: 503,
                url: url.to_string(),
            }),
        }
    }
}

pub fn test_app(html: Option<&str>) -> App {
    let source = StubSource {
        html: html.map(str::to_string),
    };
    App::new(Box::new(source), "bizbuysell.com").expect("app should build")
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(path: &str, form: &[(&str, &str)]) -> Request {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(form)
        .finish();

    http::Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn body_bytes(resp: &mut Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn body_string(resp: &mut Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
