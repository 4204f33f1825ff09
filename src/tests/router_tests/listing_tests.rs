// src/tests/router_tests/listing_tests.rs

use crate::router::handle;
use crate::tests::utils::{
    body_string, get, location, post_form, test_app, LISTING_URL, SAMPLE_LISTING,
};

#[test]
fn posting_listing_url_adds_record_and_redirects() {
    let app = test_app(Some(SAMPLE_LISTING));

    let resp = handle(post_form("/", &[("url", LISTING_URL)]), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/");

    {
        let session = app.session().unwrap();
        assert_eq!(session.len(), 1);
        assert_eq!(
            session.records()[0].broker.as_deref(),
            Some("Jane Doe, Acme Brokers")
        );
    }

    let mut page = handle(get("/"), &app).unwrap();
    let body = body_string(&mut page);
    assert!(body.contains("Profitable Coffee Roaster"));
    assert!(body.contains("Listings (1)"));
}

#[test]
fn foreign_or_blank_url_is_rejected() {
    let app = test_app(Some(SAMPLE_LISTING));

    for url in ["https://www.example.com/listing/1", "", "not a url", "ftp://bizbuysell.com/x"] {
        let resp = handle(post_form("/", &[("url", url)]), &app).unwrap();
        assert_eq!(resp.status(), 302);
    }

    let mut session = app.session().unwrap();
    assert!(session.is_empty());
    let flashes = session.take_flashes();
    assert_eq!(flashes.len(), 4);
    assert!(flashes
        .iter()
        .all(|f| f == "Please enter a valid BizBuySell listing URL."));
}

#[test]
fn scrape_failure_flashes_error() {
    let app = test_app(None);

    let resp = handle(post_form("/", &[("url", LISTING_URL)]), &app).unwrap();
    assert_eq!(resp.status(), 302);

    let mut session = app.session().unwrap();
    assert!(session.is_empty());
    let flashes = session.take_flashes();
    assert_eq!(flashes.len(), 1);
    assert!(flashes[0].starts_with("Error scraping listing: HTTP 503"));
}

#[test]
fn reset_clears_listings() {
    let app = test_app(Some(SAMPLE_LISTING));
    handle(post_form("/", &[("url", LISTING_URL)]), &app).unwrap();
    handle(post_form("/", &[("url", LISTING_URL)]), &app).unwrap();
    assert_eq!(app.session().unwrap().len(), 2);

    let resp = handle(get("/reset"), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/");

    let mut session = app.session().unwrap();
    assert!(session.is_empty());
    assert_eq!(
        session.take_flashes(),
        vec!["Session reset. All listings cleared.".to_string()]
    );
}
