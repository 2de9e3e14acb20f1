//! Refresh status endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, country::StatusDto},
    server::{
        error::Error, model::app::AppState, service::status::StatusService,
        util::time::to_iso8601,
    },
};

/// OpenAPI tag for the status endpoint
pub static STATUS_TAG: &str = "status";

/// Get the number of cached countries and the time of the last successful refresh
#[utoipa::path(
    get,
    path = "/status",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Current cache status", body = StatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let status_service = StatusService::new(&state.db);

    let status = status_service.get_status().await?;

    let status_dto = StatusDto {
        total_countries: status.total_countries,
        last_refreshed_at: status.last_refreshed_at.map(to_iso8601),
    };

    Ok((StatusCode::OK, Json(status_dto)))
}
