//! HTTP controller endpoints for the country cache API.
//!
//! This module contains Axum handlers for refreshing the cache, querying and deleting
//! countries, reading the refresh status and serving the summary image. Controllers parse
//! request input, call into services and convert results into HTTP responses. They use
//! utoipa for OpenAPI documentation.

pub mod country;
pub mod status;

use axum::{
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};

use crate::model::api::ErrorDto;

/// Fallback for requests which match no route
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!("No route for {}", uri.path());

    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto::with_details(
            "Not found",
            format!("No route for {}", uri.path()),
        )),
    )
}

/// Fallback for requests to a known path with a method that path doesn't accept
///
/// `/countries/image` and `/countries/refresh` are fixed routes, so they never fall through
/// to the `/countries/{name}` handlers for other methods.
pub async fn method_not_allowed(method: Method, uri: Uri) -> impl IntoResponse {
    tracing::debug!("Method {} not allowed for {}", method, uri.path());

    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorDto::with_details(
            "Method not allowed",
            format!("{} is not supported for {}", method, uri.path()),
        )),
    )
}
