//! Country lookup and deletion.

use std::path::Path;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::country::CountryRepository,
    error::{country::CountryError, Error},
    model::{country::CountryFilter, db::CountryModel},
};

/// Reads and deletes cached countries
pub struct CountryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CountryService<'a> {
    /// Creates a new instance of [`CountryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists cached countries matching `filter`
    pub async fn list(&self, filter: &CountryFilter) -> Result<Vec<CountryModel>, Error> {
        let country_repo = CountryRepository::new(self.db);

        Ok(country_repo.list(filter).await?)
    }

    /// Gets a country by name, ignoring case
    ///
    /// # Returns
    /// - `Ok(CountryModel)`: The matching country
    /// - `Err(Error::CountryError(CountryError::NotFound))`: No country has that name
    pub async fn get_by_name(&self, name: &str) -> Result<CountryModel, Error> {
        let country_repo = CountryRepository::new(self.db);

        country_repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| CountryError::NotFound(name.to_string()).into())
    }

    /// Deletes a country by name, ignoring case
    ///
    /// # Returns
    /// - `Ok(())`: Exactly one country was deleted
    /// - `Err(Error::CountryError(CountryError::NotFound))`: No country has that name
    pub async fn delete_by_name(&self, name: &str) -> Result<(), Error> {
        let country_repo = CountryRepository::new(self.db);

        if !country_repo.delete_by_name(name).await? {
            return Err(CountryError::NotFound(name.to_string()).into());
        }

        tracing::info!("Deleted country {:?}", name);

        Ok(())
    }
}

/// Reads the most recently generated summary image
///
/// # Returns
/// - `Ok(Vec<u8>)`: PNG bytes
/// - `Err(Error::CountryError(CountryError::SummaryImageNotFound))`: No refresh has produced an image yet
pub async fn read_summary_image(path: &Path) -> Result<Vec<u8>, Error> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(CountryError::SummaryImageNotFound.into())
        }
        Err(err) => Err(err.into()),
    }
}
