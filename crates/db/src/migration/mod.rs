//! Database migrations.
//!
//! Migrations are managed using sea-orm-migration. They use the portable
//! schema builder rather than raw SQL so the same migration runs on both
//! SQLite and Postgres.

pub use sea_orm_migration::prelude::*;

mod m20260115_000001_initial;

/// Migrator for running database migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260115_000001_initial::Migration)]
    }
}
