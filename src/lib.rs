//! Salary engine for a car-detailing shop.
//!
//! Employees on shift split each work-day's job revenue evenly and are paid
//! from their share according to the shop's compensation policy. This crate
//! computes the daily share, aggregates it into per-employee salaries over a
//! reporting period, and serves both over an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
