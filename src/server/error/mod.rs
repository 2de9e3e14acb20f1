//! Error types for the country cache server.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (configuration, country lookups, external data sources). All errors implement
//! `IntoResponse` for Axum HTTP responses, rendering the uniform `{error, details?}` envelope,
//! and use `thiserror` for ergonomic error definitions.

pub mod config;
pub mod country;
pub mod external;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, country::CountryError, external::ExternalError},
};

/// Main error type for the country cache server.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to the HTTP status codes of the error taxonomy.
///
/// # Error Categories
/// - Validation errors (malformed request input)
/// - Country errors (name lookup miss, summary image missing)
/// - External data source errors (upstream unreachable or structurally invalid)
/// - Internal errors (configuration, database, filesystem, image encoding)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Country lookup error (record or summary image not found).
    #[error(transparent)]
    CountryError(#[from] CountryError),
    /// External data source error (country directory or exchange rate table unavailable).
    #[error(transparent)]
    ExternalError(#[from] ExternalError),
    /// Malformed request input.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Filesystem error (summary image directory creation or write).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Summary image encoding error.
    #[error(transparent)]
    ImageError(#[from] image::ImageError),
    /// HTTP client construction error.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation failures
/// - 404 Not Found - For missing countries or summary image
/// - 503 Service Unavailable - For unavailable external data sources
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CountryError(err) => err.into_response(),
            Self::ExternalError(err) => err.into_response(),
            Self::Validation(reason) => {
                tracing::debug!("Rejected request: {}", reason);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::with_details("Validation failed", reason)),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
