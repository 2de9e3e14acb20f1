//! Tests for request routing through the assembled router.
//!
//! This module verifies that paths and methods reach the right handlers, that malformed
//! query strings are rejected with the validation envelope and that unknown routes get
//! the not found envelope.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use country_cache::server::router;
use serde_json::json;
use tower::ServiceExt;

use super::*;

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Tests refreshing and reading back through the router.
///
/// Expected: 200 OK for refresh, list and read by name
#[tokio::test]
async fn routes_refresh_and_reads() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cache_tables()
        .with_countries_endpoint(
            vec![factory::mock_country_descriptor("Testland", Some(1_000), &["ABC"])],
            1,
        )
        .with_exchange_rates_endpoint(factory::mock_exchange_rates(&[("ABC", 2.0)]), 1)
        .build()
        .await?;
    let app = router::routes().with_state(test.to_app_state());

    let resp = app
        .clone()
        .oneshot(request(Method::POST, "/countries/refresh"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(request(Method::GET, "/countries?currency=abc&sort=gdp_desc"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await.as_array().unwrap().len(), 1);

    let resp = app
        .clone()
        .oneshot(request(Method::GET, "/countries/image"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(request(Method::GET, "/status"))
        .await
        .unwrap();
    assert_eq!(json_body(resp).await["total_countries"], 1);

    let resp = app
        .oneshot(request(Method::GET, "/countries/TESTLAND"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["name"], "Testland");

    test.assert_mocks();

    Ok(())
}

/// Tests deleting an unknown country through the router.
///
/// Expected: 404 with only the error message
#[tokio::test]
async fn delete_atlantis_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_cache_tables().build().await?;
    let app = router::routes().with_state(test.to_app_state());

    let resp = app
        .oneshot(request(Method::DELETE, "/countries/Atlantis"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await, json!({ "error": "Country not found" }));

    Ok(())
}

/// Tests a query string that cannot be deserialized.
///
/// Expected: 400 with the validation envelope
#[tokio::test]
async fn malformed_query_is_validation_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_cache_tables().build().await?;
    let app = router::routes().with_state(test.to_app_state());

    let resp = app
        .oneshot(request(Method::GET, "/countries?region=Africa&region=Europe"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Validation failed");
    assert!(body["details"].is_string());

    Ok(())
}

/// Tests a path that matches no route.
///
/// Expected: 404 with the not found envelope naming the path
#[tokio::test]
async fn unknown_route_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_cache_tables().build().await?;
    let app = router::routes().with_state(test.to_app_state());

    let resp = app
        .oneshot(request(Method::GET, "/planets"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(resp).await,
        json!({ "error": "Not found", "details": "No route for /planets" })
    );

    Ok(())
}

/// Tests methods a known path doesn't accept.
///
/// The fixed `/countries/refresh` and `/countries/image` routes take precedence over
/// `/countries/{name}`, so other methods on them are rejected rather than treated as
/// country names.
///
/// Expected: 405 with the error envelope naming the method and path
#[tokio::test]
async fn wrong_method_is_method_not_allowed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_cache_tables().build().await?;
    let app = router::routes().with_state(test.to_app_state());

    for (method, path) in [
        (Method::GET, "/countries/refresh"),
        (Method::DELETE, "/countries/image"),
        (Method::PUT, "/countries"),
        (Method::POST, "/status"),
    ] {
        let resp = app
            .clone()
            .oneshot(request(method.clone(), path))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, path);
        assert_eq!(
            json_body(resp).await,
            json!({
                "error": "Method not allowed",
                "details": format!("{} is not supported for {}", method, path),
            })
        );
    }

    Ok(())
}
