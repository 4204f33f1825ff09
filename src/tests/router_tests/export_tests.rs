// src/tests/router_tests/export_tests.rs

use crate::domain::ListingRecord;
use crate::router::handle;
use crate::tests::utils::{
    body_bytes, body_string, get, location, post_form, test_app, LISTING_URL, SAMPLE_LISTING,
};

#[test]
fn export_with_no_listings_redirects_with_flash() {
    let app = test_app(None);

    for path in ["/export/csv", "/export/xlsx"] {
        let resp = handle(get(path), &app).unwrap();
        assert_eq!(resp.status(), 302);
        assert_eq!(location(&resp), "/");
    }

    assert_eq!(
        app.session().unwrap().take_flashes(),
        vec!["No data to export.".to_string(); 2]
    );
}

#[test]
fn csv_export_downloads_all_listings() {
    let app = test_app(Some(SAMPLE_LISTING));
    handle(post_form("/", &[("url", LISTING_URL)]), &app).unwrap();

    let mut resp = handle(get("/export/csv"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"biz_comparison.csv\""
    );

    let body = body_string(&mut resp);
    let header = body.lines().next().unwrap();
    assert_eq!(header, ListingRecord::FIELD_NAMES.join(","));
    assert!(body.contains("Profitable Coffee Roaster,\"Portland, OR\",1250000,2500000,500000,,2009,Yes,"));
    assert!(body.contains(",\"Jane Doe, Acme Brokers\",0.5,2.5,,20.0,"));
}

#[test]
fn xlsx_export_is_a_workbook() {
    let app = test_app(Some(SAMPLE_LISTING));
    handle(post_form("/", &[("url", LISTING_URL)]), &app).unwrap();

    let mut resp = handle(get("/export/xlsx"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"biz_comparison.xlsx\""
    );

    let bytes = body_bytes(&mut resp);
    assert!(bytes.starts_with(b"PK"));
}
