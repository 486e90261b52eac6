//! Core business logic for Gigpay.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All validation rules and calculations live here; the
//! database layer feeds in row snapshots and applies the results.
//!
//! # Modules
//!
//! - `transfer` - Payment and deposit authorization rules
//! - `reports` - Profession and client ranking over paid jobs

pub mod reports;
pub mod transfer;
