//! Job routes: the unpaid listing and the payment operation.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use gigpay_db::entities::jobs;
use gigpay_db::{JobRepository, LedgerRepository, PaymentReceipt};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::{ApiError, AppState, middleware::AuthProfile};

/// Creates the job routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/jobs/unpaid", get(list_unpaid_jobs))
        .route("/jobs/{job_id}/pay", post(pay_job))
}

/// Response for a job.
#[derive(Debug, Serialize)]
pub struct JobResponse {
    /// Job ID.
    pub id: Uuid,
    /// Owning contract.
    pub contract_id: Uuid,
    /// What the job is.
    pub description: String,
    /// Price to pay.
    pub price: Decimal,
    /// Whether the job has been paid.
    pub paid: bool,
    /// Payment instant, when paid.
    pub paid_on: Option<String>,
}

impl From<jobs::Model> for JobResponse {
    fn from(model: jobs::Model) -> Self {
        Self {
            id: model.id,
            contract_id: model.contract_id,
            description: model.description,
            price: model.price,
            paid: model.paid,
            paid_on: model.paid_on.map(|at| at.to_rfc3339()),
        }
    }
}

/// GET `/jobs/unpaid` - Unpaid jobs on the caller's in-progress contracts.
async fn list_unpaid_jobs(
    State(state): State<AppState>,
    caller: AuthProfile,
) -> Result<Json<Vec<JobResponse>>, ApiError> {
    let repo = JobRepository::new(state.conn());
    let unpaid = repo.list_unpaid_for_party(caller.id()).await.map_err(|e| {
        error!(error = %e, "Failed to list unpaid jobs");
        ApiError::from(e)
    })?;

    Ok(Json(unpaid.into_iter().map(Into::into).collect()))
}

/// POST `/jobs/{job_id}/pay` - Pay for a job as the contract's client.
///
/// The amount is always the stored job price; the request carries no body.
async fn pay_job(
    State(state): State<AppState>,
    caller: AuthProfile,
    Path(job_id): Path<Uuid>,
) -> Result<Json<PaymentReceipt>, ApiError> {
    let ledger = LedgerRepository::new(state.conn());
    let receipt = ledger.pay_job(caller.id(), job_id).await?;
    Ok(Json(receipt))
}
