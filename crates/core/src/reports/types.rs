//! Report data types.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ReportError;

/// Default number of clients returned by the best-clients report.
pub const DEFAULT_CLIENT_LIMIT: usize = 2;

/// A validated half-open payment-time window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl ReportWindow {
    /// Creates a window from explicit instants. `start` must precede `end`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidWindow` when `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ReportError> {
        if start >= end {
            return Err(ReportError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a window from inclusive calendar dates: payments on either
    /// boundary date are in scope.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` when `start > end`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        let day_after_end = end
            .checked_add_days(Days::new(1))
            .ok_or(ReportError::InvalidDateRange { start, end })?;
        if start > end {
            return Err(ReportError::InvalidDateRange { start, end });
        }
        Ok(Self {
            start: start.and_time(NaiveTime::MIN).and_utc(),
            end: day_after_end.and_time(NaiveTime::MIN).and_utc(),
        })
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive upper bound.
    #[must_use]
    pub const fn end_exclusive(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether an instant falls inside the window.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

/// One paid job attributed to its contractor's profession.
#[derive(Debug, Clone)]
pub struct ProfessionEarning {
    /// Profession label of the contractor who performed the job.
    pub profession: String,
    /// Job price.
    pub price: Decimal,
}

/// One paid job attributed to the paying client.
#[derive(Debug, Clone)]
pub struct ClientPayment {
    /// The paying client.
    pub client_id: Uuid,
    /// Client display name.
    pub full_name: String,
    /// Job price.
    pub price: Decimal,
}

/// Profession ranking entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionTotal {
    /// Profession label.
    pub profession: String,
    /// Sum of paid job prices in the window.
    pub total: Decimal,
}

/// Client ranking entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientTotal {
    /// Client profile ID.
    pub id: Uuid,
    /// Client display name.
    pub full_name: String,
    /// Sum of paid job prices in the window.
    pub paid: Decimal,
}
