//! Transfer validation service.
//!
//! Pure rule checks over row snapshots. The database layer is responsible
//! for reading the snapshots and applying the returned plan inside one
//! transaction; nothing here touches storage.

use rust_decimal::Decimal;
use uuid::Uuid;

use super::error::TransferError;
use super::types::{
    ContractSnapshot, ContractState, JobSnapshot, ProfileKind, ProfileSnapshot, TransferPlan,
};

/// Transfer validation service.
pub struct TransferService;

impl TransferService {
    /// Validates a job payment and resolves it into a transfer plan.
    ///
    /// Checks, in order: the snapshot rows belong together, the caller is
    /// the contract's client, the contract is in progress, the job is
    /// unpaid, the price is positive, and the client balance covers the
    /// price. The returned plan debits the client and credits the
    /// contractor by exactly `job.price`.
    ///
    /// # Errors
    ///
    /// Returns `TransferError` naming the first violated rule.
    pub fn authorize_payment(
        caller_id: Uuid,
        job: &JobSnapshot,
        contract: &ContractSnapshot,
        client: &ProfileSnapshot,
    ) -> Result<TransferPlan, TransferError> {
        if job.contract_id != contract.id {
            return Err(TransferError::InconsistentSnapshot(format!(
                "job {} does not belong to contract {}",
                job.id, contract.id
            )));
        }
        if client.id != contract.client_id {
            return Err(TransferError::InconsistentSnapshot(format!(
                "profile {} is not the client of contract {}",
                client.id, contract.id
            )));
        }

        if contract.client_id != caller_id {
            return Err(TransferError::NotContractClient {
                contract_id: contract.id,
                caller_id,
            });
        }
        if contract.status != ContractState::InProgress {
            return Err(TransferError::ContractNotActive(contract.id));
        }
        if job.paid {
            return Err(TransferError::JobAlreadyPaid(job.id));
        }
        if job.price <= Decimal::ZERO {
            return Err(TransferError::NonPositiveAmount(job.price));
        }
        if client.balance < job.price {
            return Err(TransferError::InsufficientFunds {
                balance: client.balance,
                price: job.price,
            });
        }

        Ok(TransferPlan {
            debit_profile_id: contract.client_id,
            credit_profile_id: contract.contractor_id,
            amount: job.price,
        })
    }

    /// Maximum deposit allowed against an outstanding unpaid-job total.
    #[must_use]
    pub fn deposit_cap(total_owed: Decimal) -> Decimal {
        total_owed * cap_ratio()
    }

    /// Validates a deposit into a client account.
    ///
    /// `total_owed` is the sum of prices of the target's unpaid jobs,
    /// computed inside the same transaction as the balance write so the cap
    /// cannot be checked against a stale total.
    ///
    /// # Errors
    ///
    /// Returns `TransferError` naming the first violated rule.
    pub fn authorize_deposit(
        caller: &ProfileSnapshot,
        target: &ProfileSnapshot,
        amount: Decimal,
        total_owed: Decimal,
    ) -> Result<(), TransferError> {
        if amount <= Decimal::ZERO {
            return Err(TransferError::NonPositiveAmount(amount));
        }
        if caller.id != target.id {
            return Err(TransferError::DepositNotSelf);
        }
        if target.kind != ProfileKind::Client {
            return Err(TransferError::DepositTargetNotClient(target.id));
        }

        let cap = Self::deposit_cap(total_owed);
        if amount > cap {
            return Err(TransferError::DepositCapExceeded { amount, cap });
        }

        Ok(())
    }
}

// A client may deposit at most 25% of what they still owe across unpaid jobs.
fn cap_ratio() -> Decimal {
    Decimal::new(25, 2)
}
