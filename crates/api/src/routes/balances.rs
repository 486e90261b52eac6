//! Balance routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::post,
};
use gigpay_db::{DepositReceipt, LedgerRepository};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::{ApiError, AppState, middleware::AuthProfile};

/// Creates the balance routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/balances/deposit/{profile_id}", post(deposit))
}

/// Request body for a deposit.
#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    /// Amount to credit.
    pub amount: Decimal,
}

/// POST `/balances/deposit/{profile_id}` - Fund a client account.
///
/// Clients may only fund their own account, and never by more than 25%
/// of what they currently owe across unpaid jobs.
async fn deposit(
    State(state): State<AppState>,
    caller: AuthProfile,
    Path(profile_id): Path<Uuid>,
    Json(body): Json<DepositRequest>,
) -> Result<Json<DepositReceipt>, ApiError> {
    let ledger = LedgerRepository::new(state.conn());
    let receipt = ledger.deposit(caller.id(), profile_id, body.amount).await?;
    Ok(Json(receipt))
}
