//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations, hiding
//! the `SeaORM` implementation details from the rest of the application.
//! `LedgerRepository` owns the two balance-mutating operations; the rest
//! are read-only.

pub mod contract;
pub mod job;
pub mod ledger;
pub mod profile;
pub mod report;

pub use contract::{ContractRepository, party_condition};
pub use job::JobRepository;
pub use ledger::{DepositReceipt, LedgerError, LedgerRepository, PaymentReceipt};
pub use profile::ProfileRepository;
pub use report::ReportRepository;
