//! Request middleware.

pub mod auth;

pub use auth::{AuthProfile, profile_auth_middleware};
