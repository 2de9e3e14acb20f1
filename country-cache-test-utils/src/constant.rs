//! Test configuration constants for the mock upstream datasets.
//!
//! The mock server hosts both datasets; these are the paths each one is served from.

/// Path of the mock country directory endpoint.
pub static TEST_COUNTRIES_PATH: &str = "/v2/all";

/// Path of the mock exchange rate table endpoint.
pub static TEST_EXCHANGE_RATES_PATH: &str = "/v6/latest/USD";

/// Base currency of the mock exchange rate table.
pub static TEST_BASE_CURRENCY: &str = "USD";
