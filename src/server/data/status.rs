//! Refresh status repository.

use chrono::NaiveDateTime;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::db::RefreshStatusModel;

/// Primary key of the single refresh status row.
pub const STATUS_ROW_ID: i32 = 1;

/// Repository for the single refresh status row
pub struct RefreshStatusRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RefreshStatusRepository<'a, C> {
    /// Creates a new instance of [`RefreshStatusRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the status row with a zero count if it doesn't exist yet
    ///
    /// Safe to call on every startup, an existing row is left untouched.
    pub async fn ensure_exists(&self) -> Result<(), DbErr> {
        let status = entity::refresh_status::ActiveModel {
            id: ActiveValue::Set(STATUS_ROW_ID),
            total_countries: ActiveValue::Set(0),
            last_refreshed_at: ActiveValue::Set(None),
        };

        entity::prelude::RefreshStatus::insert(status)
            .on_conflict(
                OnConflict::column(entity::refresh_status::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Get the status row
    pub async fn get(&self) -> Result<Option<RefreshStatusModel>, DbErr> {
        entity::prelude::RefreshStatus::find_by_id(STATUS_ROW_ID)
            .one(self.db)
            .await
    }

    /// Overwrites the status row with the result of a refresh
    pub async fn update(
        &self,
        total_countries: i64,
        refreshed_at: NaiveDateTime,
    ) -> Result<(), DbErr> {
        let status = entity::refresh_status::ActiveModel {
            id: ActiveValue::Set(STATUS_ROW_ID),
            total_countries: ActiveValue::Set(total_countries),
            last_refreshed_at: ActiveValue::Set(Some(refreshed_at)),
        };

        entity::prelude::RefreshStatus::insert(status)
            .on_conflict(
                OnConflict::column(entity::refresh_status::Column::Id)
                    .update_columns([
                        entity::refresh_status::Column::TotalCountries,
                        entity::refresh_status::Column::LastRefreshedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}
