//! Transfer rule violations.

use gigpay_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Errors produced by transfer validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// Caller is not the client on the job's contract.
    #[error("Caller {caller_id} is not the client of contract {contract_id}")]
    NotContractClient {
        /// The contract being paid against.
        contract_id: Uuid,
        /// The caller that was rejected.
        caller_id: Uuid,
    },

    /// The contract is not in progress.
    #[error("Contract {0} is not in progress")]
    ContractNotActive(Uuid),

    /// The job has already been paid.
    #[error("Job {0} is already paid")]
    JobAlreadyPaid(Uuid),

    /// Client balance does not cover the job price.
    #[error("Balance {balance} does not cover price {price}")]
    InsufficientFunds {
        /// Client balance at validation time.
        balance: Decimal,
        /// Job price.
        price: Decimal,
    },

    /// Amount must be strictly positive.
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Deposit exceeds 25% of the target's outstanding unpaid job total.
    #[error("Deposit {amount} exceeds cap {cap}")]
    DepositCapExceeded {
        /// Requested deposit amount.
        amount: Decimal,
        /// Maximum allowed at this instant.
        cap: Decimal,
    },

    /// Deposits may only fund the caller's own account.
    #[error("Deposits may only target the caller's own account")]
    DepositNotSelf,

    /// Only client accounts can receive deposits.
    #[error("Profile {0} is not a client account")]
    DepositTargetNotClient(Uuid),

    /// The rows handed to validation do not belong together.
    #[error("Inconsistent snapshot: {0}")]
    InconsistentSnapshot(String),
}

impl From<TransferError> for AppError {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::NotContractClient { .. }
            | TransferError::DepositNotSelf
            | TransferError::DepositTargetNotClient(_) => Self::Forbidden(err.to_string()),
            TransferError::ContractNotActive(_) | TransferError::JobAlreadyPaid(_) => {
                Self::InvalidState(err.to_string())
            }
            TransferError::InsufficientFunds { .. } => Self::InsufficientFunds(err.to_string()),
            TransferError::NonPositiveAmount(_) | TransferError::DepositCapExceeded { .. } => {
                Self::Validation(err.to_string())
            }
            TransferError::InconsistentSnapshot(_) => Self::Internal(err.to_string()),
        }
    }
}
