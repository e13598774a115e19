pub use sea_orm_migration::prelude::*;

mod m20250110_000001_create_profiles_table;
mod m20250110_000002_create_cv_tables;
mod m20250110_000003_create_portfolio_tables;
mod m20250110_000004_create_analytics_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250110_000001_create_profiles_table::Migration),
            Box::new(m20250110_000002_create_cv_tables::Migration),
            Box::new(m20250110_000003_create_portfolio_tables::Migration),
            Box::new(m20250110_000004_create_analytics_tables::Migration),
        ]
    }
}
