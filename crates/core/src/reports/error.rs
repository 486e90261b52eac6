//! Report error types.

use chrono::{DateTime, NaiveDate, Utc};
use gigpay_shared::AppError;
use thiserror::Error;

/// Errors produced by report parameter validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Window instants out of order.
    #[error("Invalid window: start {start} is not before end {end}")]
    InvalidWindow {
        /// Requested start instant.
        start: DateTime<Utc>,
        /// Requested end instant.
        end: DateTime<Utc>,
    },

    /// Date range out of order or unrepresentable.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// Limit must be a positive integer.
    #[error("Limit must be a positive integer, got {0}")]
    InvalidLimit(i64),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::Validation(err.to_string())
    }
}
