//! Client for the two upstream datasets.
//!
//! The country directory returns an ordered array of country descriptors and the exchange
//! rate table returns a mapping from currency code to a rate relative to a fixed base
//! currency. Both are plain idempotent GETs. Every failure, whether a network error, a
//! non-success status or a body without the expected shape, is reported as
//! [`ExternalError::Unavailable`] naming the dataset which failed.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::server::{
    error::external::{DataSource, ExternalError},
    model::external::{CountryDescriptor, ExchangeRateTable},
};

/// HTTP client for the country directory and exchange rate table.
#[derive(Clone, Debug)]
pub struct DataGateway {
    client: reqwest::Client,
    countries_url: String,
    exchange_rates_url: String,
}

impl DataGateway {
    /// Creates a new gateway using the provided HTTP client and dataset URLs.
    pub fn new(
        client: reqwest::Client,
        countries_url: impl Into<String>,
        exchange_rates_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            countries_url: countries_url.into(),
            exchange_rates_url: exchange_rates_url.into(),
        }
    }

    /// Fetches the country directory in the order the upstream returns it.
    pub async fn fetch_countries(&self) -> Result<Vec<CountryDescriptor>, ExternalError> {
        self.get_json(DataSource::Countries, &self.countries_url)
            .await
    }

    /// Fetches the exchange rate table keyed by currency code.
    pub async fn fetch_exchange_rates(&self) -> Result<HashMap<String, f64>, ExternalError> {
        let table: ExchangeRateTable = self
            .get_json(DataSource::ExchangeRates, &self.exchange_rates_url)
            .await?;

        Ok(table.rates)
    }

    /// Fetches both datasets concurrently.
    ///
    /// Completes once both requests have finished, or as soon as either one fails.
    pub async fn fetch_all(
        &self,
    ) -> Result<(Vec<CountryDescriptor>, HashMap<String, f64>), ExternalError> {
        futures::try_join!(self.fetch_countries(), self.fetch_exchange_rates())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        dataset: DataSource,
        url: &str,
    ) -> Result<T, ExternalError> {
        tracing::debug!("Fetching {} from {}", dataset, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ExternalError::unavailable(dataset, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExternalError::unavailable(
                dataset,
                format!("unexpected status {}", status),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ExternalError::unavailable(dataset, e))
    }
}
