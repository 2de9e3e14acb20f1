//! Errors loading configuration from the environment.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Configuration which couldn't be read from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is unset
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but can't be parsed
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable
        var: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
