//! Shapes of the upstream datasets.

use std::collections::HashMap;

use serde::Deserialize;

/// One entry of the country directory.
///
/// Every field is optional upstream; entries without a name are skipped when joining.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CountryDescriptor {
    /// Common name
    pub name: Option<String>,
    /// Capital city
    pub capital: Option<String>,
    /// Region
    pub region: Option<String>,
    /// Population
    pub population: Option<i64>,
    /// Flag image URL
    pub flag: Option<String>,
    /// Declared currencies, only the first is used
    pub currencies: Option<Vec<CurrencyDescriptor>>,
}

/// A currency declared by a country.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CurrencyDescriptor {
    /// ISO 4217 code
    pub code: Option<String>,
    /// Currency name
    pub name: Option<String>,
    /// Currency symbol
    pub symbol: Option<String>,
}

/// The exchange rate table body. Only the `rates` mapping is used.
#[derive(Clone, Debug, Deserialize)]
pub struct ExchangeRateTable {
    /// Units of each currency per USD, keyed by currency code
    pub rates: HashMap<String, f64>,
}
