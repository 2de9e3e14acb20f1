use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RefreshStatus::Table)
                    .if_not_exists()
                    .col(integer(RefreshStatus::Id).primary_key())
                    .col(big_integer(RefreshStatus::TotalCountries).default(0))
                    .col(timestamp_null(RefreshStatus::LastRefreshedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RefreshStatus::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RefreshStatus {
    Table,
    Id,
    TotalCountries,
    LastRefreshedAt,
}
