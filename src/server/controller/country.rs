//! Country cache endpoints.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        country::{CountryDto, CountryListQuery, RefreshDto},
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            country::{CountryFilter, CountrySort},
            db::CountryModel,
        },
        service::{
            country::{read_summary_image, CountryService},
            refresh::RefreshService,
        },
        util::time::to_iso8601,
    },
};

/// OpenAPI tag for the country endpoints
pub static COUNTRY_TAG: &str = "countries";

impl From<CountryModel> for CountryDto {
    fn from(country: CountryModel) -> Self {
        Self {
            id: country.id,
            name: country.name,
            capital: country.capital,
            region: country.region,
            population: country.population,
            currency_code: country.currency_code,
            exchange_rate: country.exchange_rate,
            estimated_gdp: country.estimated_gdp,
            flag_url: country.flag_url,
            last_refreshed_at: to_iso8601(country.last_refreshed_at),
        }
    }
}

/// Fetch countries and exchange rates, recompute estimated GDP and regenerate the summary image
///
/// Refreshes run one at a time; a request arriving during a refresh waits for it to finish.
#[utoipa::path(
    post,
    path = "/countries/refresh",
    tag = COUNTRY_TAG,
    responses(
        (status = 200, description = "Cache refreshed", body = RefreshDto),
        (status = 503, description = "External data source unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_countries(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let _guard = state.refresh_lock.lock().await;

    let refresh_service =
        RefreshService::new(&state.db, &state.gateway, &state.summary_image_path);

    let mut rng = StdRng::from_os_rng();
    let outcome = refresh_service.refresh(&mut rng).await?;

    Ok((
        StatusCode::OK,
        Json(RefreshDto {
            message: "Countries refreshed successfully".to_string(),
            total_countries: outcome.total_countries,
            last_refreshed_at: to_iso8601(outcome.refreshed_at.naive_utc()),
        }),
    ))
}

/// List cached countries, optionally filtered by region or currency and sorted by GDP
#[utoipa::path(
    get,
    path = "/countries",
    tag = COUNTRY_TAG,
    params(CountryListQuery),
    responses(
        (status = 200, description = "Matching countries", body = Vec<CountryDto>),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_countries(
    State(state): State<AppState>,
    query: Result<Query<CountryListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query.map_err(|rejection| Error::Validation(rejection.body_text()))?;

    let filter = CountryFilter {
        region: query.region.filter(|region| !region.trim().is_empty()),
        currency: query.currency.filter(|currency| !currency.trim().is_empty()),
        sort: CountrySort::from_param(query.sort.as_deref()),
    };

    let country_service = CountryService::new(&state.db);
    let countries: Vec<CountryDto> = country_service
        .list(&filter)
        .await?
        .into_iter()
        .map(CountryDto::from)
        .collect();

    Ok((StatusCode::OK, Json(countries)))
}

/// Get a single country by name, ignoring case
#[utoipa::path(
    get,
    path = "/countries/{name}",
    tag = COUNTRY_TAG,
    params(("name" = String, Path, description = "Country name, case-insensitive")),
    responses(
        (status = 200, description = "The country", body = CountryDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_country(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let country_service = CountryService::new(&state.db);

    let country = country_service.get_by_name(&name).await?;

    Ok((StatusCode::OK, Json(CountryDto::from(country))))
}

/// Delete a single country by name, ignoring case
#[utoipa::path(
    delete,
    path = "/countries/{name}",
    tag = COUNTRY_TAG,
    params(("name" = String, Path, description = "Country name, case-insensitive")),
    responses(
        (status = 200, description = "Country deleted", body = MessageDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_country(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let country_service = CountryService::new(&state.db);

    country_service.delete_by_name(&name).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Country deleted successfully".to_string(),
        }),
    ))
}

/// Get the summary image generated by the last successful refresh
#[utoipa::path(
    get,
    path = "/countries/image",
    tag = COUNTRY_TAG,
    responses(
        (status = 200, description = "Summary image", content_type = "image/png"),
        (status = 404, description = "No summary image has been generated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary_image(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let png = read_summary_image(&state.summary_image_path).await?;

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "image/png")], png))
}
