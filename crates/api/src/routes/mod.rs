//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth::profile_auth_middleware};

pub mod admin;
pub mod balances;
pub mod contracts;
pub mod health;
pub mod jobs;

/// Creates the API router with protected routes that need state for middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Everything except the health probe requires a resolved profile.
    let protected_routes = Router::new()
        .merge(contracts::routes())
        .merge(jobs::routes())
        .merge(balances::routes())
        .merge(admin::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            profile_auth_middleware,
        ));

    Router::new().merge(health::routes()).merge(protected_routes)
}
