// src/tests/router_tests/index_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app};

#[test]
fn index_renders_empty_state() {
    let app = test_app(None);

    let mut resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Compare Business Listings"));
    assert!(body.contains("No listings yet"));
    assert!(body.contains(r#"name="url""#));
}

#[test]
fn flashes_show_once() {
    let app = test_app(None);
    app.session().unwrap().flash("Hello from the session");

    let mut first = handle(get("/"), &app).unwrap();
    assert!(body_string(&mut first).contains("Hello from the session"));

    let mut second = handle(get("/"), &app).unwrap();
    assert!(!body_string(&mut second).contains("Hello from the session"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app(None);

    assert!(matches!(
        handle(get("/admin"), &app),
        Err(ServerError::NotFound)
    ));
}
