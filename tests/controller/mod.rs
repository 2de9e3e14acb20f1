//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying request handling, response formatting and the error envelope for all API
//! endpoints, plus routing through the assembled router.

mod router;

use axum::response::Response;
use country_cache_test_utils::prelude::*;
use serde_json::Value;

use crate::util::TestContextExt;

/// Reads a response body as JSON.
async fn json_body(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
