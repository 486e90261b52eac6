//! Profile authentication middleware for protected routes.
//!
//! The caller identifies itself with an `X-Profile-Id` header carrying a
//! profile UUID. The middleware resolves it against the profiles table
//! and stores the row in request extensions for handlers to read.

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use gigpay_db::ProfileRepository;
use gigpay_db::entities::profiles;
use gigpay_db::entities::sea_orm_active_enums::ProfileType;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::AppState;

/// Header naming the calling profile.
pub const PROFILE_ID_HEADER: &str = "x-profile-id";

/// Parses the header value into a profile ID.
fn parse_profile_id(header: &str) -> Option<Uuid> {
    header.trim().parse().ok()
}

fn unauthorized(error: &str, message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": error, "message": message })),
    )
        .into_response()
}

/// Authentication middleware resolving `X-Profile-Id` to a profile row.
///
/// Requests without the header, with a malformed ID, or naming a profile
/// that does not exist are rejected with 401 before any handler runs.
pub async fn profile_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(PROFILE_ID_HEADER)
        .and_then(|h| h.to_str().ok());

    let Some(raw) = header else {
        return unauthorized("missing_profile_id", "X-Profile-Id header is required");
    };
    let Some(profile_id) = parse_profile_id(raw) else {
        return unauthorized("invalid_profile_id", "X-Profile-Id must be a UUID");
    };

    let profiles = ProfileRepository::new(state.conn());
    match profiles.find_by_id(profile_id).await {
        Ok(Some(profile)) => {
            request.extensions_mut().insert(profile);
            next.run(request).await
        }
        Ok(None) => unauthorized("unknown_profile", "No profile matches X-Profile-Id"),
        Err(e) => {
            error!(error = %e, "Failed to resolve profile identity");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred"
                })),
            )
                .into_response()
        }
    }
}

/// Extractor for the authenticated profile.
///
/// Use this in handlers to get the resolved caller:
///
/// ```ignore
/// async fn handler(caller: AuthProfile) -> impl IntoResponse {
///     let caller_id = caller.id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthProfile(pub profiles::Model);

impl AuthProfile {
    /// Returns the caller's profile ID.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.0.id
    }

    /// Whether the caller is a client profile.
    #[must_use]
    pub fn is_client(&self) -> bool {
        self.0.profile_type == ProfileType::Client
    }

    /// Returns the inner profile row.
    #[must_use]
    pub fn profile(&self) -> &profiles::Model {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthProfile
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<profiles::Model>()
            .cloned()
            .map(AuthProfile)
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "error": "unauthorized",
                        "message": "Authentication required"
                    })),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_valid_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_profile_id(&id.to_string()), Some(id));
        assert_eq!(parse_profile_id(&format!("  {id} ")), Some(id));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!(parse_profile_id(""), None);
        assert_eq!(parse_profile_id("42"), None);
        assert_eq!(parse_profile_id("not-a-uuid"), None);
    }
}
