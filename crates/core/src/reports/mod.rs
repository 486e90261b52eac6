//! Ranking reports over paid jobs.
//!
//! Pure aggregation: the database layer fetches paid-job rows for a time
//! window and this module turns them into profession and client rankings.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use service::ReportService;
pub use types::{
    ClientPayment, ClientTotal, DEFAULT_CLIENT_LIMIT, ProfessionEarning, ProfessionTotal,
    ReportWindow,
};
