//! Balance-affecting operation rules.
//!
//! Pure validation for the two operations that move money: paying a job and
//! depositing into a client account. The database layer reads consistent
//! row snapshots, asks this module for a verdict, and applies the resulting
//! plan inside the same transaction.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::TransferError;
pub use service::TransferService;
pub use types::{
    ContractSnapshot, ContractState, JobSnapshot, ProfileKind, ProfileSnapshot, TransferPlan,
};
