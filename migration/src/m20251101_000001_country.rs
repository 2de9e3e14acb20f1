use sea_orm_migration::{prelude::*, schema::*};

static IDX_COUNTRY_REGION: &str = "idx-country-region";
static IDX_COUNTRY_CURRENCY_CODE: &str = "idx-country-currency_code";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Country::Table)
                    .if_not_exists()
                    .col(pk_auto(Country::Id))
                    .col(string(Country::Name))
                    .col(string_uniq(Country::NameKey))
                    .col(string_null(Country::Capital))
                    .col(string_null(Country::Region))
                    .col(big_integer(Country::Population))
                    .col(string_null(Country::CurrencyCode))
                    .col(double_null(Country::ExchangeRate))
                    .col(double_null(Country::EstimatedGdp))
                    .col(text_null(Country::FlagUrl))
                    .col(timestamp(Country::LastRefreshedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COUNTRY_REGION)
                    .table(Country::Table)
                    .col(Country::Region)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COUNTRY_CURRENCY_CODE)
                    .table(Country::Table)
                    .col(Country::CurrencyCode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COUNTRY_CURRENCY_CODE)
                    .table(Country::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COUNTRY_REGION)
                    .table(Country::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Country::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Country {
    Table,
    Id,
    Name,
    NameKey,
    Capital,
    Region,
    Population,
    CurrencyCode,
    ExchangeRate,
    EstimatedGdp,
    FlagUrl,
    LastRefreshedAt,
}
