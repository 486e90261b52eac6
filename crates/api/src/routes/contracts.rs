//! Contract routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use gigpay_core::transfer::ContractState;
use gigpay_db::ContractRepository;
use gigpay_db::entities::contracts;
use gigpay_shared::AppError;
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::{ApiError, AppState, middleware::AuthProfile};

/// Creates the contract routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contracts", get(list_contracts))
        .route("/contracts/{contract_id}", get(get_contract))
}

/// Response for a contract.
#[derive(Debug, Serialize)]
pub struct ContractResponse {
    /// Contract ID.
    pub id: Uuid,
    /// Contract terms.
    pub terms: String,
    /// Lifecycle status.
    pub status: ContractState,
    /// Client party.
    pub client_id: Uuid,
    /// Contractor party.
    pub contractor_id: Uuid,
    /// Created at timestamp.
    pub created_at: String,
}

impl From<contracts::Model> for ContractResponse {
    fn from(model: contracts::Model) -> Self {
        Self {
            id: model.id,
            terms: model.terms,
            status: model.status.into(),
            client_id: model.client_id,
            contractor_id: model.contractor_id,
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

/// GET `/contracts/{contract_id}` - Fetch one of the caller's contracts.
///
/// A contract the caller is not a party to is reported as not found, so
/// callers cannot probe for other people's contract IDs.
async fn get_contract(
    State(state): State<AppState>,
    caller: AuthProfile,
    Path(contract_id): Path<Uuid>,
) -> Result<Json<ContractResponse>, ApiError> {
    let repo = ContractRepository::new(state.conn());
    let contract = repo
        .find_for_party(caller.id(), contract_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch contract");
            ApiError::from(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("contract {contract_id}")))?;

    Ok(Json(contract.into()))
}

/// GET `/contracts` - List the caller's non-terminated contracts.
async fn list_contracts(
    State(state): State<AppState>,
    caller: AuthProfile,
) -> Result<Json<Vec<ContractResponse>>, ApiError> {
    let repo = ContractRepository::new(state.conn());
    let contracts = repo.list_for_party(caller.id()).await.map_err(|e| {
        error!(error = %e, "Failed to list contracts");
        ApiError::from(e)
    })?;

    Ok(Json(contracts.into_iter().map(Into::into).collect()))
}
