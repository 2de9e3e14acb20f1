//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use chrono::NaiveDateTime;
use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// A cached country row queued for insertion.
struct MockCountry {
    name: String,
    region: Option<String>,
    currency_code: Option<String>,
    estimated_gdp: Option<f64>,
}

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// fixture rows, and mock upstream endpoints. Methods can be chained together and
/// finalized with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_cache_tables: bool,

    // Database fixtures to insert
    status: Option<(i64, Option<NaiveDateTime>)>,
    countries: Vec<MockCountry>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    countries_endpoints: Vec<(Vec<Value>, usize)>, // (countries, expected_requests)
    exchange_rates_endpoints: Vec<(Value, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_cache_tables: false,
            status: None,
            countries: Vec::new(),
            mock_builders: Vec::new(),
            countries_endpoints: Vec::new(),
            exchange_rates_endpoints: Vec::new(),
        }
    }

    /// Add the country and status tables to the test database.
    ///
    /// The status row is inserted with a zero count unless `with_status` provides other values,
    /// matching what the server does on startup.
    pub fn with_cache_tables(mut self) -> Self {
        self.include_cache_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use country_cache_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), country_cache_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Country)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert the status row with the given values.
    ///
    /// Requires the status table, either through `with_cache_tables` or `with_table`.
    pub fn with_status(
        mut self,
        total_countries: i64,
        last_refreshed_at: Option<NaiveDateTime>,
    ) -> Self {
        self.status = Some((total_countries, last_refreshed_at));
        self
    }

    /// Insert a cached country row.
    ///
    /// # Arguments
    /// - `name` - Country name, its lowercase form becomes the unique name key
    /// - `region` - Optional region
    /// - `currency_code` - Optional currency code, stored as given
    /// - `estimated_gdp` - Optional GDP estimate
    pub fn with_mock_country(
        mut self,
        name: &str,
        region: Option<&str>,
        currency_code: Option<&str>,
        estimated_gdp: Option<f64>,
    ) -> Self {
        self.countries.push(MockCountry {
            name: name.to_string(),
            region: region.map(str::to_string),
            currency_code: currency_code.map(str::to_string),
            estimated_gdp,
        });
        self
    }

    /// Add a mock country directory endpoint returning `countries`.
    ///
    /// The mock will verify it was called exactly `expected_requests` times.
    pub fn with_countries_endpoint(mut self, countries: Vec<Value>, expected_requests: usize) -> Self {
        self.countries_endpoints.push((countries, expected_requests));
        self
    }

    /// Add a mock exchange rate table endpoint returning `body`.
    ///
    /// The mock will verify it was called exactly `expected_requests` times.
    pub fn with_exchange_rates_endpoint(mut self, body: Value, expected_requests: usize) -> Self {
        self.exchange_rates_endpoints.push((body, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Use this for failure responses or bodies the helper methods don't cover.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (cache tables if specified, then custom tables)
    /// 2. Inserts database fixtures (status row, countries)
    /// 3. Creates mock HTTP endpoints (custom endpoints, then dataset endpoints)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    /// - `Err(TestError::IoError)` - Scratch directory could not be created
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_cache_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Country),
                schema.create_table_from_entity(entity::prelude::RefreshStatus),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        let status = match (self.status, self.include_cache_tables) {
            (Some(status), _) => Some(status),
            (None, true) => Some((0, None)),
            (None, false) => None,
        };

        if let Some((total_countries, last_refreshed_at)) = status {
            setup
                .country()
                .insert_status(total_countries, last_refreshed_at)
                .await?;
        }

        for country in self.countries {
            setup
                .country()
                .insert_mock_country(
                    &country.name,
                    country.region.as_deref(),
                    country.currency_code.as_deref(),
                    country.estimated_gdp,
                )
                .await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so tests can shadow a dataset path with a failure
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (countries, expected) in self.countries_endpoints {
            mocks.push(setup.country().create_countries_endpoint(countries, expected));
        }

        for (body, expected) in self.exchange_rates_endpoints {
            mocks.push(
                setup
                    .country()
                    .create_exchange_rates_endpoint(body, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
