pub use sea_orm_migration::prelude::*;

mod m20251101_000001_disposable_whazzup;
mod m20251101_000002_disposable_sceneries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_disposable_whazzup::Migration),
            Box::new(m20251101_000002_disposable_sceneries::Migration),
        ]
    }
}
