//! Errors for country lookups.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Lookups against the cache which found nothing, reported as 404
#[derive(Error, Debug)]
pub enum CountryError {
    /// No cached country has the requested name
    #[error("Country not found: {0:?}")]
    NotFound(String),
    /// Nothing has been rendered yet, a refresh has to complete first.
    #[error("Summary image has not been generated")]
    SummaryImageNotFound,
}

impl IntoResponse for CountryError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let body = match self {
            Self::NotFound(_) => ErrorDto::new("Country not found"),
            Self::SummaryImageNotFound => ErrorDto::new("Summary image not found"),
        };

        (StatusCode::NOT_FOUND, Json(body)).into_response()
    }
}
