//! Ledger repository.
//!
//! Owns the two balance-mutating operations, job payment and client
//! deposit. Each runs inside a single transaction: read the rows, let the
//! pure transfer service validate a snapshot of them, then apply the
//! writes as guarded updates whose `WHERE` clauses re-assert the rules.
//! A guard that matches zero rows means another writer got there first,
//! and the transaction rolls back with nothing applied.

use chrono::Utc;
use gigpay_core::transfer::{TransferError, TransferService};
use gigpay_shared::AppError;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, JoinType,
    QueryFilter, QuerySelect, RelationTrait, TransactionTrait,
};
use serde::Serialize;
use uuid::Uuid;

use crate::entities::{contracts, jobs, profiles};

/// Errors from ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Job does not exist.
    #[error("Job not found: {0}")]
    JobNotFound(Uuid),

    /// Profile does not exist.
    #[error("Profile not found: {0}")]
    ProfileNotFound(Uuid),

    /// A transfer rule rejected the operation.
    #[error(transparent)]
    Rule(#[from] TransferError),

    /// Lost a race against a concurrent writer. Safe to retry.
    #[error("Concurrent update conflict, retry the operation")]
    Contention,

    /// Database error.
    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::JobNotFound(id) => Self::NotFound(format!("job {id}")),
            LedgerError::ProfileNotFound(id) => Self::NotFound(format!("profile {id}")),
            LedgerError::Rule(rule) => rule.into(),
            LedgerError::Contention => {
                Self::Contention("concurrent update conflict, retry the operation".to_string())
            }
            LedgerError::Database(db) => Self::Database(db.to_string()),
        }
    }
}

/// Outcome of a successful job payment.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentReceipt {
    /// Paid job.
    pub job_id: Uuid,
    /// Contract the job belongs to.
    pub contract_id: Uuid,
    /// Amount moved from client to contractor.
    pub amount: Decimal,
    /// Instant recorded as `paid_on`.
    pub paid_on: chrono::DateTime<Utc>,
    /// Client balance after the debit.
    pub client_balance: Decimal,
}

/// Outcome of a successful deposit.
#[derive(Debug, Clone, Serialize)]
pub struct DepositReceipt {
    /// Funded profile.
    pub profile_id: Uuid,
    /// Amount credited.
    pub amount: Decimal,
    /// Balance after the credit.
    pub balance: Decimal,
}

/// Write access to balances and job payment state.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Pays a job on behalf of `caller`.
    ///
    /// Reads the job, its contract, and the client profile inside one
    /// transaction, asks the transfer service for a plan, then applies
    /// three guarded updates: flip the job to paid, debit the client,
    /// credit the contractor. Any guard matching zero rows aborts the
    /// whole transaction.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if the job or a profile is missing, a
    /// transfer rule rejects the payment, a concurrent writer wins the
    /// race, or the database fails.
    pub async fn pay_job(
        &self,
        caller_id: Uuid,
        job_id: Uuid,
    ) -> Result<PaymentReceipt, LedgerError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let Some((job, Some(contract))) = jobs::Entity::find_by_id(job_id)
            .find_also_related(contracts::Entity)
            .one(&txn)
            .await
            .map_err(map_db_err)?
        else {
            return Err(LedgerError::JobNotFound(job_id));
        };

        let client = profiles::Entity::find_by_id(contract.client_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(LedgerError::ProfileNotFound(contract.client_id))?;

        let plan = TransferService::authorize_payment(
            caller_id,
            &job.snapshot(),
            &contract.snapshot(),
            &client.snapshot(),
        )?;

        let now = Utc::now();
        let now_tz: sea_orm::prelude::DateTimeWithTimeZone = now.into();

        // Only an unpaid job row may flip; a concurrent payment that
        // committed after our read leaves zero rows here.
        let flipped = jobs::Entity::update_many()
            .col_expr(jobs::Column::Paid, Expr::value(true))
            .col_expr(jobs::Column::PaidOn, Expr::value(Some(now_tz)))
            .col_expr(jobs::Column::UpdatedAt, Expr::value(now_tz))
            .filter(jobs::Column::Id.eq(job_id))
            .filter(jobs::Column::Paid.eq(false))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        if flipped.rows_affected == 0 {
            return Err(TransferError::JobAlreadyPaid(job_id).into());
        }

        // The balance guard re-asserts sufficiency at write time in case
        // the snapshot went stale under read committed.
        let debited = profiles::Entity::update_many()
            .col_expr(
                profiles::Column::Balance,
                Expr::col(profiles::Column::Balance).sub(plan.amount),
            )
            .col_expr(profiles::Column::UpdatedAt, Expr::value(now_tz))
            .filter(profiles::Column::Id.eq(plan.debit_profile_id))
            .filter(profiles::Column::Balance.gte(plan.amount))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        if debited.rows_affected == 0 {
            return Err(TransferError::InsufficientFunds {
                balance: client.balance,
                price: plan.amount,
            }
            .into());
        }

        let credited = profiles::Entity::update_many()
            .col_expr(
                profiles::Column::Balance,
                Expr::col(profiles::Column::Balance).add(plan.amount),
            )
            .col_expr(profiles::Column::UpdatedAt, Expr::value(now_tz))
            .filter(profiles::Column::Id.eq(plan.credit_profile_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        if credited.rows_affected == 0 {
            return Err(LedgerError::ProfileNotFound(plan.credit_profile_id));
        }

        // The receipt carries the written row, not snapshot arithmetic;
        // under read committed the snapshot may be behind the guard.
        let client_after = profiles::Entity::find_by_id(plan.debit_profile_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(LedgerError::ProfileNotFound(plan.debit_profile_id))?;

        txn.commit().await.map_err(map_db_err)?;

        tracing::info!(
            job_id = %job_id,
            contract_id = %contract.id,
            amount = %plan.amount,
            "job paid"
        );

        Ok(PaymentReceipt {
            job_id,
            contract_id: contract.id,
            amount: plan.amount,
            paid_on: now,
            client_balance: client_after.balance,
        })
    }

    /// Deposits `amount` into `target_id`'s balance on behalf of `caller`.
    ///
    /// The outstanding unpaid total is recomputed inside the same
    /// transaction as the credit so the 25% cap is never checked against
    /// a stale figure.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if either profile is missing, a transfer
    /// rule rejects the deposit, or the database fails.
    pub async fn deposit(
        &self,
        caller_id: Uuid,
        target_id: Uuid,
        amount: Decimal,
    ) -> Result<DepositReceipt, LedgerError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let caller = profiles::Entity::find_by_id(caller_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(LedgerError::ProfileNotFound(caller_id))?;
        let target = profiles::Entity::find_by_id(target_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(LedgerError::ProfileNotFound(target_id))?;

        let total_owed = Self::total_owed(&txn, target_id).await?;

        TransferService::authorize_deposit(
            &caller.snapshot(),
            &target.snapshot(),
            amount,
            total_owed,
        )?;

        let now_tz: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();
        let credited = profiles::Entity::update_many()
            .col_expr(
                profiles::Column::Balance,
                Expr::col(profiles::Column::Balance).add(amount),
            )
            .col_expr(profiles::Column::UpdatedAt, Expr::value(now_tz))
            .filter(profiles::Column::Id.eq(target_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        if credited.rows_affected == 0 {
            return Err(LedgerError::ProfileNotFound(target_id));
        }

        let target_after = profiles::Entity::find_by_id(target_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(LedgerError::ProfileNotFound(target_id))?;

        txn.commit().await.map_err(map_db_err)?;

        tracing::info!(profile_id = %target_id, amount = %amount, "deposit applied");

        Ok(DepositReceipt {
            profile_id: target_id,
            amount,
            balance: target_after.balance,
        })
    }

    /// Sum of unpaid job prices across contracts where the profile is the
    /// client. Summed in Rust to keep decimal arithmetic exact on every
    /// backend.
    async fn total_owed(txn: &DatabaseTransaction, client_id: Uuid) -> Result<Decimal, LedgerError> {
        let unpaid = jobs::Entity::find()
            .join(JoinType::InnerJoin, jobs::Relation::Contract.def())
            .filter(contracts::Column::ClientId.eq(client_id))
            .filter(jobs::Column::Paid.eq(false))
            .all(txn)
            .await
            .map_err(map_db_err)?;
        Ok(unpaid.iter().map(|job| job.price).sum())
    }
}

// SQLite reports lock conflicts and Postgres serialization failures as
// opaque strings; both mean the caller may retry.
fn map_db_err(err: DbErr) -> LedgerError {
    let msg = err.to_string();
    if msg.contains("database is locked")
        || msg.contains("could not serialize")
        || msg.contains("deadlock")
    {
        LedgerError::Contention
    } else {
        LedgerError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_conflicts_classify_as_contention() {
        let messages = [
            "error returned from database: (code: 5) database is locked",
            "could not serialize access due to concurrent update",
            "deadlock detected",
        ];
        for msg in messages {
            let err = map_db_err(DbErr::Custom(msg.to_string()));
            assert!(matches!(err, LedgerError::Contention), "{msg}");
        }
    }

    #[test]
    fn test_other_database_errors_stay_database_errors() {
        let err = map_db_err(DbErr::Custom("connection refused".to_string()));
        assert!(matches!(err, LedgerError::Database(_)));

        let err = map_db_err(DbErr::RecordNotUpdated);
        assert!(matches!(err, LedgerError::Database(_)));
    }

    #[test]
    fn test_only_contention_is_retryable_through_app_error() {
        assert!(AppError::from(LedgerError::Contention).is_retryable());
        assert!(!AppError::from(LedgerError::JobNotFound(Uuid::nil())).is_retryable());
        assert!(
            !AppError::from(LedgerError::Database(DbErr::Custom("down".to_string())))
                .is_retryable()
        );
    }
}
