//! Request extractors.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use gigpay_shared::AppError;
use serde::de::DeserializeOwned;

use crate::ApiError;

/// Query extractor whose rejection is the standard JSON error body.
///
/// Axum's `Query` rejects malformed parameters with a plain-text 400;
/// wrapping it keeps bad report parameters in the same `{error, message}`
/// shape as every other validation failure.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError(AppError::Validation(rejection.body_text()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Request, StatusCode, header};
    use axum::response::IntoResponse;
    use chrono::NaiveDate;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Window {
        start: NaiveDate,
        end: NaiveDate,
    }

    async fn extract(uri: &str) -> Result<ValidatedQuery<Window>, ApiError> {
        let request = Request::builder().uri(uri).body(()).unwrap();
        let (mut parts, ()) = request.into_parts();
        ValidatedQuery::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn parses_well_formed_parameters() {
        let ValidatedQuery(window) = extract("/reports?start=2026-01-01&end=2026-01-31")
            .await
            .unwrap();
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
    }

    #[tokio::test]
    async fn malformed_parameters_surface_as_json_validation_errors() {
        let err = extract("/reports?start=nope&end=2026-01-31")
            .await
            .unwrap_err();
        assert!(matches!(err.0, AppError::Validation(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }

    #[tokio::test]
    async fn missing_parameters_are_validation_errors_too() {
        let err = extract("/reports?start=2026-01-01").await.unwrap_err();
        assert!(matches!(err.0, AppError::Validation(_)));
    }
}
