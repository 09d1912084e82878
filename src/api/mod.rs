//! HTTP API module for the salary engine.
//!
//! Exposes the configured policy, single-day share calculation and
//! period salary reports over JSON.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DailyShareRequest, MAX_CREW_SIZE, PeriodRequest, SalaryReportRequest};
pub use response::{ApiError, DailyShareResponse};
pub use state::AppState;
