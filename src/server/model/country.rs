//! Domain types for the refresh pipeline and the country query API.

use std::fmt;

use chrono::{DateTime, Utc};

/// A country joined with its exchange rate and GDP estimate, ready to be persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct CountryRecord {
    /// Display name as returned by the country directory
    pub name: String,
    /// Capital city
    pub capital: Option<String>,
    /// Region, e.g. `Africa`
    pub region: Option<String>,
    /// Population, 0 when the directory omits it
    pub population: i64,
    /// First declared currency, uppercased
    pub currency_code: Option<String>,
    /// Units of `currency_code` per USD
    pub exchange_rate: Option<f64>,
    /// Derived GDP estimate in USD
    pub estimated_gdp: Option<f64>,
    /// URL of the flag image
    pub flag_url: Option<String>,
}

/// Ordering applied to the country list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountrySort {
    /// Estimated GDP, largest first, unknown GDP last.
    GdpDesc,
    /// Estimated GDP, smallest first, unknown GDP last.
    GdpAsc,
    /// Name ascending.
    #[default]
    Name,
}

impl CountrySort {
    /// Parses the `sort` query parameter; unrecognised values fall back to [`CountrySort::Name`].
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("gdp_desc") => Self::GdpDesc,
            Some("gdp_asc") => Self::GdpAsc,
            _ => Self::Name,
        }
    }
}

/// Filters applied to the country list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CountryFilter {
    /// Case-insensitive region equality.
    pub region: Option<String>,
    /// Case-insensitive currency code equality.
    pub currency: Option<String>,
    /// Ordering of the result
    pub sort: CountrySort,
}

/// Stages of a refresh cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshStage {
    /// Requesting both upstream datasets
    Fetching,
    /// Matching countries to exchange rates and estimating GDP
    Joining,
    /// Writing countries and the status row inside a transaction
    Persisting,
    /// Rendering and publishing the summary image
    Reporting,
    /// Committed and published
    Done,
    /// Aborted, nothing was committed
    Failed,
}

impl fmt::Display for RefreshStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Self::Fetching => "fetching",
            Self::Joining => "joining",
            Self::Persisting => "persisting",
            Self::Reporting => "reporting",
            Self::Done => "done",
            Self::Failed => "failed",
        };

        f.write_str(stage)
    }
}

/// Result of a successful refresh cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct RefreshOutcome {
    /// Number of countries cached after the refresh
    pub total_countries: i64,
    /// Timestamp stamped on every row written by the refresh
    pub refreshed_at: DateTime<Utc>,
}

/// A leader line on the summary image.
#[derive(Clone, Debug, PartialEq)]
pub struct GdpLeader {
    /// Country name
    pub name: String,
    /// Estimated GDP, `None` renders as `N/A`
    pub estimated_gdp: Option<f64>,
}
