//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate is the ledger store: it owns the schema, the transactional
//! write paths for money movement, and the party-scoped read paths. The
//! business rules themselves live in `gigpay-core`; repositories read row
//! snapshots, ask core for a verdict, and apply the result inside one
//! database transaction.

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    ContractRepository, DepositReceipt, JobRepository, LedgerError, LedgerRepository,
    PaymentReceipt, ProfileRepository, ReportRepository,
};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a connection pool to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.max_connections(max_connections);
    Database::connect(options).await
}
