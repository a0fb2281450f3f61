//! Payroll Calculation Engine
//!
//! This crate derives per-employee pay breakdowns for a pay period from raw
//! time-clock records, configurable pay-policy settings, and the employee
//! loan ledger. It applies break-time, overtime, lateness, and loan rules
//! in a fixed order and returns one result row per employee with at least
//! one time record in the period.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod policy;
pub mod store;
