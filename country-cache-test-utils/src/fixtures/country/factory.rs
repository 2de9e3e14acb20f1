//! Factories for upstream dataset bodies.

use serde_json::{json, Map, Value};

use crate::constant::TEST_BASE_CURRENCY;

/// Country directory entry with the given currencies, in declaration order.
///
/// `population` of `None` omits the field entirely.
pub fn mock_country_descriptor(
    name: &str,
    population: Option<i64>,
    currency_codes: &[&str],
) -> Value {
    let currencies: Vec<Value> = currency_codes
        .iter()
        .map(|code| json!({ "code": code, "name": format!("{} currency", code), "symbol": "¤" }))
        .collect();

    let mut entry = json!({
        "name": name,
        "capital": format!("{} City", name),
        "region": "Testregion",
        "flag": format!("https://flags.example.com/{}.svg", name.to_lowercase()),
        "currencies": currencies,
    });

    if let Some(population) = population {
        entry["population"] = json!(population);
    }

    entry
}

/// Exchange rate table body relative to the test base currency.
pub fn mock_exchange_rates(rates: &[(&str, f64)]) -> Value {
    let mut table = Map::new();
    table.insert(TEST_BASE_CURRENCY.to_string(), json!(1.0));
    for (code, rate) in rates {
        table.insert(code.to_string(), json!(rate));
    }

    json!({
        "result": "success",
        "base_code": TEST_BASE_CURRENCY,
        "rates": table,
    })
}
