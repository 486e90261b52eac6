//! Snapshot and plan types for transfer validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a profile. The two roles are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    /// Commissions work and pays for it.
    Client,
    /// Performs work and gets paid.
    Contractor,
}

/// Lifecycle state of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractState {
    /// Created, work not started.
    New,
    /// Active; jobs under it may be paid.
    InProgress,
    /// Finished or cancelled.
    Terminated,
}

/// Point-in-time view of a profile, read inside the paying transaction.
#[derive(Debug, Clone)]
pub struct ProfileSnapshot {
    /// Profile ID.
    pub id: Uuid,
    /// Role of the profile.
    pub kind: ProfileKind,
    /// Current balance. Non-negative by invariant.
    pub balance: Decimal,
}

/// Point-in-time view of a contract.
#[derive(Debug, Clone)]
pub struct ContractSnapshot {
    /// Contract ID.
    pub id: Uuid,
    /// Current status.
    pub status: ContractState,
    /// The client party.
    pub client_id: Uuid,
    /// The contractor party.
    pub contractor_id: Uuid,
}

/// Point-in-time view of a job.
#[derive(Debug, Clone)]
pub struct JobSnapshot {
    /// Job ID.
    pub id: Uuid,
    /// Owning contract.
    pub contract_id: Uuid,
    /// Price to pay. Positive by invariant.
    pub price: Decimal,
    /// Whether the job has already been paid. Monotonic false -> true.
    pub paid: bool,
}

/// A validated transfer: debit one profile, credit another, same amount.
///
/// Applying a plan leaves the sum of all balances unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    /// Profile whose balance decreases.
    pub debit_profile_id: Uuid,
    /// Profile whose balance increases.
    pub credit_profile_id: Uuid,
    /// Amount moved. Always the stored job price.
    pub amount: Decimal,
}
