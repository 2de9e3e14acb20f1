//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes an
//! in-memory SQLite database, a mock server hosting both upstream datasets and a temporary
//! directory the summary image can be written to.

use std::path::PathBuf;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;

use crate::{
    constant::{TEST_COUNTRIES_PATH, TEST_EXCHANGE_RATES_PATH},
    error::TestError,
};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new().with_cache_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Point a gateway at the mock datasets
/// let gateway = DataGateway::new(reqwest::Client::new(), test.countries_url(), test.exchange_rates_url());
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Scratch directory removed when the context is dropped
    pub dir: TempDir,

    /// Mock HTTP server for the upstream datasets
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    /// - `Err(TestError::IoError)` - Temporary directory could not be created
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;
        let dir = tempfile::tempdir()?;

        Ok(TestContext {
            db,
            dir,
            server,
            mocks: Vec::new(),
        })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// URL of the mock country directory.
    pub fn countries_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_COUNTRIES_PATH)
    }

    /// URL of the mock exchange rate table.
    pub fn exchange_rates_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_EXCHANGE_RATES_PATH)
    }

    /// Summary image location inside the scratch directory.
    ///
    /// The parent directory does not exist until something creates it.
    pub fn summary_image_path(&self) -> PathBuf {
        self.dir.path().join("cache").join("summary.png")
    }

    /// Direct access to the mock server for endpoints added after `build()`.
    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
