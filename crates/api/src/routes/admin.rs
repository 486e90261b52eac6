//! Admin reporting routes.
//!
//! Rankings over paid jobs in an inclusive calendar-date window. These
//! sit behind the same profile authentication as the rest of the API;
//! any resolved profile may read them.

use axum::{Json, Router, extract::State, routing::get};
use chrono::NaiveDate;
use gigpay_core::reports::{
    ClientTotal, DEFAULT_CLIENT_LIMIT, ProfessionTotal, ReportService, ReportWindow,
};
use gigpay_db::ReportRepository;
use serde::Deserialize;
use tracing::error;

use crate::extractors::ValidatedQuery;
use crate::{ApiError, AppState, middleware::AuthProfile};

/// Creates the admin routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/best-profession", get(best_profession))
        .route("/admin/best-clients", get(best_clients))
}

/// Query parameters for the profession report.
#[derive(Debug, Deserialize)]
pub struct ProfessionQuery {
    /// First date in scope.
    pub start: NaiveDate,
    /// Last date in scope.
    pub end: NaiveDate,
}

/// Query parameters for the client report.
#[derive(Debug, Deserialize)]
pub struct ClientsQuery {
    /// First date in scope.
    pub start: NaiveDate,
    /// Last date in scope.
    pub end: NaiveDate,
    /// Maximum number of clients to return.
    pub limit: Option<i64>,
}

/// GET `/admin/best-profession` - Profession that earned the most in the window.
///
/// Returns `null` when no job was paid inside the window.
async fn best_profession(
    State(state): State<AppState>,
    _caller: AuthProfile,
    ValidatedQuery(query): ValidatedQuery<ProfessionQuery>,
) -> Result<Json<Option<ProfessionTotal>>, ApiError> {
    let window = ReportWindow::from_dates(query.start, query.end)?;
    let repo = ReportRepository::new(state.conn());
    let best = repo.best_profession(window).await.map_err(|e| {
        error!(error = %e, "Failed to run profession report");
        ApiError::from(e)
    })?;
    Ok(Json(best))
}

/// GET `/admin/best-clients` - Clients who paid the most in the window.
async fn best_clients(
    State(state): State<AppState>,
    _caller: AuthProfile,
    ValidatedQuery(query): ValidatedQuery<ClientsQuery>,
) -> Result<Json<Vec<ClientTotal>>, ApiError> {
    let window = ReportWindow::from_dates(query.start, query.end)?;
    let limit = match query.limit {
        Some(raw) => ReportService::validate_limit(raw)?,
        None => DEFAULT_CLIENT_LIMIT,
    };

    let repo = ReportRepository::new(state.conn());
    let ranked = repo.best_clients(window, limit).await.map_err(|e| {
        error!(error = %e, "Failed to run client report");
        ApiError::from(e)
    })?;
    Ok(Json(ranked))
}
