//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so repositories and services don't import from the
//! generated `entity` crate directly.

/// Type alias for the cached country database model.
///
/// # Fields (from `entity::country::Model`)
/// - `id` - Primary key
/// - `name` - Display name as last returned by the country directory
/// - `name_key` - Lowercase name, unique, used for case-insensitive lookups
/// - `capital`, `region`, `flag_url` - Optional descriptive fields
/// - `population` - Population, 0 when the directory omits it
/// - `currency_code` - First declared currency, uppercased
/// - `exchange_rate` - Rate of `currency_code` relative to the base currency
/// - `estimated_gdp` - Derived GDP estimate
/// - `last_refreshed_at` - Timestamp of the refresh which last wrote the row
pub type CountryModel = entity::country::Model;

/// Type alias for the refresh status singleton database model.
///
/// # Fields (from `entity::refresh_status::Model`)
/// - `id` - Always [`STATUS_ROW_ID`](crate::server::data::status::STATUS_ROW_ID)
/// - `total_countries` - Country count after the last successful refresh
/// - `last_refreshed_at` - Timestamp of that refresh, `None` if never refreshed
pub type RefreshStatusModel = entity::refresh_status::Model;
