//! Refresh status reporting.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::status::RefreshStatusRepository, error::Error, model::db::RefreshStatusModel,
};

/// Reports the outcome of the last refresh
pub struct StatusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusService<'a> {
    /// Creates a new instance of [`StatusService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the refresh status row
    ///
    /// The row is created on startup, so its absence is reported as an internal error.
    pub async fn get_status(&self) -> Result<RefreshStatusModel, Error> {
        let status_repo = RefreshStatusRepository::new(self.db);

        status_repo
            .get()
            .await?
            .ok_or_else(|| Error::InternalError("Refresh status row is missing".to_string()))
    }
}
