//! Startup helpers for the upstream gateway and the database.

use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, data::status::RefreshStatusRepository, error::Error, gateway::DataGateway,
};

/// Timeout for establishing upstream connections.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the upstream dataset gateway
pub fn build_gateway(config: &Config) -> Result<DataGateway, Error> {
    let client = reqwest::Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .timeout(config.http_timeout)
        .connect_timeout(CONNECT_TIMEOUT)
        .build()?;

    Ok(DataGateway::new(
        client,
        &config.countries_api_url,
        &config.exchange_rates_api_url,
    ))
}

/// Connect to the database, run migrations and make sure the status row exists
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    RefreshStatusRepository::new(&db).ensure_exists().await?;

    Ok(db)
}
