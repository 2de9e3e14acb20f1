use chrono::{NaiveDate, NaiveDateTime};

use crate::server::{
    data::country::CountryRepository,
    model::country::{CountryFilter, CountryRecord, CountrySort},
};

use super::*;

mod delete_by_name;
mod find_by_name;
mod list;
mod top_by_gdp;
mod upsert_many;

fn record(name: &str, currency_code: Option<&str>, estimated_gdp: Option<f64>) -> CountryRecord {
    CountryRecord {
        name: name.to_string(),
        capital: Some(format!("{} City", name)),
        region: Some("Testregion".to_string()),
        population: 1_000,
        currency_code: currency_code.map(str::to_string),
        exchange_rate: currency_code.map(|_| 2.0),
        estimated_gdp,
        flag_url: None,
    }
}

fn timestamp(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 22)
        .and_then(|date| date.and_hms_milli_opt(hour, 0, 0, 0))
        .unwrap()
}
