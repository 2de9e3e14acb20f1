use serde::{Deserialize, Serialize};

/// A cached country record
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CountryDto {
    pub id: i32,
    pub name: String,
    pub capital: Option<String>,
    pub region: Option<String>,
    pub population: i64,
    pub currency_code: Option<String>,
    pub exchange_rate: Option<f64>,
    pub estimated_gdp: Option<f64>,
    pub flag_url: Option<String>,
    /// ISO 8601 timestamp of the refresh which last wrote this record
    pub last_refreshed_at: String,
}

/// Aggregate state of the country cache
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusDto {
    pub total_countries: i64,
    /// ISO 8601 timestamp of the last successful refresh, `null` if never refreshed
    pub last_refreshed_at: Option<String>,
}

/// The response after a successful refresh
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RefreshDto {
    pub message: String,
    pub total_countries: i64,
    pub last_refreshed_at: String,
}

/// Query parameters accepted by the country list endpoint
#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CountryListQuery {
    /// Only include countries in this region (case-insensitive)
    pub region: Option<String>,
    /// Only include countries using this currency code (case-insensitive)
    pub currency: Option<String>,
    /// `gdp_desc` or `gdp_asc`, any other value sorts by name
    pub sort: Option<String>,
}
