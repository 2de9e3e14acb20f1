//! Errors for upstream dataset requests.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// The upstream dataset a request was made to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Country metadata with currencies
    Countries,
    /// USD exchange rates keyed by currency code
    ExchangeRates,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Countries => write!(f, "Countries API"),
            Self::ExchangeRates => write!(f, "Exchange Rates API"),
        }
    }
}

/// Failures talking to an upstream dataset, reported as 503
#[derive(Error, Debug)]
pub enum ExternalError {
    /// Network error, non-success status or a body without the expected shape.
    #[error("Could not fetch data from {dataset}: {reason}")]
    Unavailable {
        /// Dataset the request was made to
        dataset: DataSource,
        /// Underlying cause, logged but not returned to clients
        reason: String,
    },
}

impl ExternalError {
    /// Creates an [`ExternalError::Unavailable`] for `dataset`
    pub fn unavailable(dataset: DataSource, reason: impl ToString) -> Self {
        Self::Unavailable {
            dataset,
            reason: reason.to_string(),
        }
    }

    /// The dataset which failed.
    pub fn dataset(&self) -> DataSource {
        match self {
            Self::Unavailable { dataset, .. } => *dataset,
        }
    }
}

impl IntoResponse for ExternalError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        let details = format!("Could not fetch data from {}", self.dataset());

        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorDto::with_details(
                "External data source unavailable",
                details,
            )),
        )
            .into_response()
    }
}
