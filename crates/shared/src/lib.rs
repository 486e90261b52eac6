//! Shared types, errors, and configuration for Gigpay.
//!
//! This crate provides the pieces every other crate needs:
//! - Application-wide error taxonomy with HTTP mappings
//! - Configuration management

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
