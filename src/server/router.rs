//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /countries/refresh` - Refresh the cache from the upstream datasets
/// - `GET /countries` - List countries, filtered by `region`/`currency`, sorted by `sort`
/// - `GET /countries/image` - Summary image of the last refresh
/// - `GET /countries/{name}` - Get a country by name
/// - `DELETE /countries/{name}` - Delete a country by name
/// - `GET /status` - Country count and last refresh time
///
/// Requests matching no route receive a 404 with the standard error body, requests using a
/// method the path doesn't accept receive a 405 with the same body.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to have state attached.
///
/// # Example
/// ```ignore
/// let app_state = AppState::new(db, gateway, summary_image_path);
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Country Cache", description = "Country Cache API"), tags(
        (name = controller::country::COUNTRY_TAG, description = "Country cache routes"),
        (name = controller::status::STATUS_TAG, description = "Cache status routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::country::refresh_countries))
        .routes(routes!(controller::country::get_countries))
        .routes(routes!(controller::country::get_summary_image))
        .routes(routes!(
            controller::country::get_country,
            controller::country::delete_country
        ))
        .routes(routes!(controller::status::get_status))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(controller::not_found)
        .method_not_allowed_fallback(controller::method_not_allowed)
}
