//! API error responses.
//!
//! Every engine failure funnels into `AppError`, and `ApiError` turns it
//! into a JSON body with the matching HTTP status.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gigpay_core::reports::ReportError;
use gigpay_core::transfer::TransferError;
use gigpay_db::LedgerError;
use gigpay_shared::AppError;
use sea_orm::DbErr;
use serde_json::json;

/// Wrapper that renders an `AppError` as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(json!({
            "error": self.0.error_code(),
            "message": self.0.to_string(),
            "retryable": self.0.is_retryable(),
        }));
        (status, body).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self(err.into())
    }
}

impl From<TransferError> for ApiError {
    fn from(err: TransferError) -> Self {
        Self(err.into())
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        Self(err.into())
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self(AppError::Database(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(AppError::Unauthenticated("no header".into()), StatusCode::UNAUTHORIZED)]
    #[case(AppError::Forbidden("not yours".into()), StatusCode::FORBIDDEN)]
    #[case(AppError::NotFound("job".into()), StatusCode::NOT_FOUND)]
    #[case(AppError::Validation("bad limit".into()), StatusCode::BAD_REQUEST)]
    #[case(AppError::InsufficientFunds("short".into()), StatusCode::PAYMENT_REQUIRED)]
    #[case(AppError::InvalidState("paid".into()), StatusCode::CONFLICT)]
    #[case(AppError::Contention("retry".into()), StatusCode::CONFLICT)]
    #[case(AppError::Database("down".into()), StatusCode::INTERNAL_SERVER_ERROR)]
    fn maps_errors_to_statuses(#[case] err: AppError, #[case] expected: StatusCode) {
        let response = ApiError(err).into_response();
        assert_eq!(response.status(), expected);
    }

    #[test]
    fn rule_errors_pass_through_the_transfer_mapping() {
        let err = TransferError::JobAlreadyPaid(uuid::Uuid::nil());
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
