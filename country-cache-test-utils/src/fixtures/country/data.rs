//! Database fixtures for cached countries and the status row.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, fixtures::country::CountryFixtures};

/// Id of the status singleton row.
pub const STATUS_ROW_ID: i32 = 1;

impl<'a> CountryFixtures<'a> {
    /// Insert a cached country row.
    ///
    /// Descriptive fields are derived from the name, population is fixed at one million.
    pub async fn insert_mock_country(
        &self,
        name: &str,
        region: Option<&str>,
        currency_code: Option<&str>,
        estimated_gdp: Option<f64>,
    ) -> Result<entity::country::Model, TestError> {
        let exchange_rate = currency_code.map(|_| 1.5);

        let country = entity::country::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            name_key: ActiveValue::Set(name.to_lowercase()),
            capital: ActiveValue::Set(Some(format!("{} City", name))),
            region: ActiveValue::Set(region.map(str::to_string)),
            population: ActiveValue::Set(1_000_000),
            currency_code: ActiveValue::Set(currency_code.map(str::to_string)),
            exchange_rate: ActiveValue::Set(exchange_rate),
            estimated_gdp: ActiveValue::Set(estimated_gdp),
            flag_url: ActiveValue::Set(None),
            last_refreshed_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(country.insert(&self.setup.db).await?)
    }

    /// Insert the status singleton row.
    pub async fn insert_status(
        &self,
        total_countries: i64,
        last_refreshed_at: Option<NaiveDateTime>,
    ) -> Result<entity::refresh_status::Model, TestError> {
        let status = entity::refresh_status::ActiveModel {
            id: ActiveValue::Set(STATUS_ROW_ID),
            total_countries: ActiveValue::Set(total_countries),
            last_refreshed_at: ActiveValue::Set(last_refreshed_at),
        };

        Ok(status.insert(&self.setup.db).await?)
    }
}
