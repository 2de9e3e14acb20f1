//! Refresh-and-publish pipeline.
//!
//! A refresh moves through `Fetching -> Joining -> Persisting -> Reporting -> Done`:
//!
//! 1. Both upstream datasets are fetched concurrently. Failure ends the cycle before
//!    anything is written.
//! 2. Each country is joined with the exchange rate of its first declared currency and a
//!    GDP estimate is derived.
//! 3. Every joined country is upserted by name and the status row is overwritten, all in
//!    one transaction.
//! 4. The top five countries by GDP are read back inside the transaction and the summary
//!    image is rendered beside the served one. Only then is the transaction committed, so
//!    a rendering failure rolls the whole cycle back. The new image replaces the served
//!    one once the commit succeeds.

use std::{collections::HashMap, path::Path};

use chrono::{DateTime, Utc};
use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        country::{name_key, CountryRepository},
        status::RefreshStatusRepository,
    },
    error::Error,
    gateway::DataGateway,
    model::{
        country::{CountryRecord, GdpLeader, RefreshOutcome, RefreshStage},
        external::CountryDescriptor,
    },
    service::{
        gdp::estimate_gdp,
        summary::{SummaryImageGenerator, SUMMARY_LEADER_COUNT},
    },
    util::time::refresh_timestamp,
};

/// Runs a refresh cycle against the upstream datasets and the cache
pub struct RefreshService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a DataGateway,
    summary_image_path: &'a Path,
}

impl<'a> RefreshService<'a> {
    /// Creates a new instance of [`RefreshService`]
    pub fn new(
        db: &'a DatabaseConnection,
        gateway: &'a DataGateway,
        summary_image_path: &'a Path,
    ) -> Self {
        Self {
            db,
            gateway,
            summary_image_path,
        }
    }

    /// Runs one refresh cycle
    ///
    /// # Arguments
    /// - `rng`: Source of the GDP multipliers
    ///
    /// # Returns
    /// - `Ok(RefreshOutcome)`: Country count and timestamp of the committed cycle
    /// - `Err(Error::ExternalError)`: Either dataset was unavailable, nothing was written
    /// - `Err(_)`: Persisting or reporting failed, the transaction was rolled back
    pub async fn refresh<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RefreshOutcome, Error> {
        let refreshed_at = refresh_timestamp();

        let result = self.run(refreshed_at, rng).await;

        if let Err(err) = &result {
            tracing::warn!(stage = %RefreshStage::Failed, "Country refresh failed: {}", err);
        }

        result
    }

    async fn run<R: Rng + ?Sized>(
        &self,
        refreshed_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<RefreshOutcome, Error> {
        tracing::debug!(stage = %RefreshStage::Fetching, "Fetching countries and exchange rates");
        let (descriptors, rates) = self.gateway.fetch_all().await?;

        tracing::debug!(
            stage = %RefreshStage::Joining,
            "Joining {} countries with {} exchange rates",
            descriptors.len(),
            rates.len()
        );
        let countries = join_countries(descriptors, &rates, rng);

        tracing::debug!(stage = %RefreshStage::Persisting, "Persisting {} countries", countries.len());
        // Dropping the transaction without committing rolls it back
        let txn = self.db.begin().await?;
        let country_repo = CountryRepository::new(&txn);
        let status_repo = RefreshStatusRepository::new(&txn);

        country_repo
            .upsert_many(countries, refreshed_at.naive_utc())
            .await?;

        let total_countries = i64::try_from(country_repo.count().await?).map_err(|_| {
            Error::InternalError("Country count does not fit in a signed 64-bit integer".to_string())
        })?;
        status_repo
            .update(total_countries, refreshed_at.naive_utc())
            .await?;

        tracing::debug!(stage = %RefreshStage::Reporting, "Generating summary image");
        let leaders: Vec<GdpLeader> = country_repo
            .top_by_gdp(SUMMARY_LEADER_COUNT as u64)
            .await?
            .into_iter()
            .map(|country| GdpLeader {
                name: country.name,
                estimated_gdp: country.estimated_gdp,
            })
            .collect();

        let summary = SummaryImageGenerator::new(self.summary_image_path)
            .generate(total_countries, &leaders, refreshed_at)
            .await?;

        if let Err(err) = txn.commit().await {
            summary.discard().await;
            return Err(err.into());
        }

        summary.publish().await?;

        tracing::info!(
            stage = %RefreshStage::Done,
            "Refreshed {} countries at {}",
            total_countries,
            refreshed_at
        );

        Ok(RefreshOutcome {
            total_countries,
            refreshed_at,
        })
    }
}

/// Joins country descriptors with exchange rates and derives GDP estimates
///
/// - The currency is the first declared currency's code, uppercased
/// - The exchange rate is an exact match of that code in `rates`; non-positive rates are ignored
/// - A missing population is treated as 0
/// - Countries without a currency always have an estimated GDP of 0
///
/// Countries keep the order the directory returned them in. Entries without a name are
/// skipped and when several entries share a name, ignoring case, the last one wins at the
/// position of the first.
pub fn join_countries<R: Rng + ?Sized>(
    descriptors: Vec<CountryDescriptor>,
    rates: &HashMap<String, f64>,
    rng: &mut R,
) -> Vec<CountryRecord> {
    let mut countries: Vec<CountryRecord> = Vec::with_capacity(descriptors.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for descriptor in descriptors {
        let Some(name) = descriptor
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
        else {
            tracing::debug!("Skipping country without a name");
            continue;
        };

        let currency_code = descriptor
            .currencies
            .as_ref()
            .and_then(|currencies| currencies.first())
            .and_then(|currency| currency.code.as_deref())
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_uppercase);

        let exchange_rate = currency_code
            .as_ref()
            .and_then(|code| rates.get(code))
            .copied()
            .filter(|rate| rate.is_finite() && *rate > 0.0);

        let population = descriptor.population.unwrap_or(0).max(0);

        let estimated_gdp = match currency_code {
            Some(_) => estimate_gdp(population, exchange_rate, rng),
            None => Some(0.0),
        };

        let country = CountryRecord {
            name,
            capital: descriptor.capital,
            region: descriptor.region,
            population,
            currency_code,
            exchange_rate,
            estimated_gdp,
            flag_url: descriptor.flag,
        };

        let key = name_key(&country.name);
        match positions.get(&key) {
            Some(&position) => countries[position] = country,
            None => {
                positions.insert(key, countries.len());
                countries.push(country);
            }
        }
    }

    countries
}
