//! Cached country repository.

use chrono::NaiveDateTime;
use migration::OnConflict;
use sea_orm::{
    sea_query::{self, Expr, Func, NullOrdering},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    country::{CountryFilter, CountryRecord, CountrySort},
    db::CountryModel,
};

/// Key used for case-insensitive uniqueness and lookups of country names.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Repository for cached country rows
pub struct CountryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CountryRepository<'a, C> {
    /// Creates a new instance of [`CountryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or overwrites countries by case-insensitive name
    ///
    /// Every field of an existing row, including the display name, is replaced by the
    /// incoming record and stamped with `refreshed_at`.
    ///
    /// # Notes
    /// - Records sharing a name key must be deduplicated by the caller
    /// - If you need transactional behavior, pass a transaction as the connection
    pub async fn upsert_many(
        &self,
        countries: Vec<CountryRecord>,
        refreshed_at: NaiveDateTime,
    ) -> Result<(), DbErr> {
        const BATCH_SIZE: usize = 100;

        for batch in countries.chunks(BATCH_SIZE) {
            let models = batch.iter().cloned().map(|country| entity::country::ActiveModel {
                name_key: ActiveValue::Set(name_key(&country.name)),
                name: ActiveValue::Set(country.name),
                capital: ActiveValue::Set(country.capital),
                region: ActiveValue::Set(country.region),
                population: ActiveValue::Set(country.population),
                currency_code: ActiveValue::Set(country.currency_code),
                exchange_rate: ActiveValue::Set(country.exchange_rate),
                estimated_gdp: ActiveValue::Set(country.estimated_gdp),
                flag_url: ActiveValue::Set(country.flag_url),
                last_refreshed_at: ActiveValue::Set(refreshed_at),
                ..Default::default()
            });

            entity::prelude::Country::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::country::Column::NameKey)
                        .update_columns([
                            entity::country::Column::Name,
                            entity::country::Column::Capital,
                            entity::country::Column::Region,
                            entity::country::Column::Population,
                            entity::country::Column::CurrencyCode,
                            entity::country::Column::ExchangeRate,
                            entity::country::Column::EstimatedGdp,
                            entity::country::Column::FlagUrl,
                            entity::country::Column::LastRefreshedAt,
                        ])
                        .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }

    /// Get a country by name, ignoring case
    pub async fn find_by_name(&self, name: &str) -> Result<Option<CountryModel>, DbErr> {
        entity::prelude::Country::find()
            .filter(entity::country::Column::NameKey.eq(name_key(name)))
            .one(self.db)
            .await
    }

    /// Delete a country by name, ignoring case
    ///
    /// # Returns
    /// - `Ok(true)` - The country existed and was deleted
    /// - `Ok(false)` - No country with that name exists
    pub async fn delete_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Country::delete_many()
            .filter(entity::country::Column::NameKey.eq(name_key(name)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// List countries matching the filter in the requested order
    pub async fn list(&self, filter: &CountryFilter) -> Result<Vec<CountryModel>, DbErr> {
        let mut query = entity::prelude::Country::find();

        if let Some(region) = &filter.region {
            query = query.filter(
                sea_query::ExprTrait::eq(
                    Expr::expr(Func::lower(Expr::col(entity::country::Column::Region))),
                    region.trim().to_lowercase(),
                ),
            );
        }

        if let Some(currency) = &filter.currency {
            // Currency codes are stored uppercased
            query = query.filter(
                entity::country::Column::CurrencyCode.eq(currency.trim().to_uppercase()),
            );
        }

        query = match filter.sort {
            CountrySort::GdpDesc => query
                .order_by_with_nulls(
                    entity::country::Column::EstimatedGdp,
                    Order::Desc,
                    NullOrdering::Last,
                )
                .order_by_asc(entity::country::Column::Name),
            CountrySort::GdpAsc => query
                .order_by_with_nulls(
                    entity::country::Column::EstimatedGdp,
                    Order::Asc,
                    NullOrdering::Last,
                )
                .order_by_asc(entity::country::Column::Name),
            CountrySort::Name => query.order_by_asc(entity::country::Column::Name),
        };

        query.all(self.db).await
    }

    /// Get the countries with the largest estimated GDP, unknown GDP last
    pub async fn top_by_gdp(&self, limit: u64) -> Result<Vec<CountryModel>, DbErr> {
        entity::prelude::Country::find()
            .order_by_with_nulls(
                entity::country::Column::EstimatedGdp,
                Order::Desc,
                NullOrdering::Last,
            )
            .order_by_asc(entity::country::Column::Name)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Count all cached countries
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Country::find().count(self.db).await
    }
}
