pub use sea_orm_migration::prelude::*;

mod m20251101_000001_country;
mod m20251101_000002_refresh_status;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_country::Migration),
            Box::new(m20251101_000002_refresh_status::Migration),
        ]
    }
}
