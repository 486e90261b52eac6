//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Every engine failure surfaces as one of these before it reaches the
/// request surface, which maps it to a JSON response.
#[derive(Debug, Error)]
pub enum AppError {
    /// No resolvable caller identity.
    #[error("Authentication failed: {0}")]
    Unauthenticated(String),

    /// Identity resolved but lacks rights over the target resource.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Resource absent, or deliberately hidden from an unauthorized caller.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed input (bad amount, bad limit, bad date range).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation not legal for the current entity state.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Caller balance does not cover the job price.
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    /// Transient transaction conflict; the caller may retry.
    #[error("Transaction conflict: {0}")]
    Contention(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthenticated(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::InsufficientFunds(_) => 402,
            Self::InvalidState(_) | Self::Contention(_) => 409,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthenticated(_) => "UNAUTHENTICATED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidState(_) => "INVALID_STATE",
            Self::InsufficientFunds(_) => "INSUFFICIENT_FUNDS",
            Self::Contention(_) => "CONTENTION",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the caller may safely retry the operation.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Contention(_))
    }
}
