//! Calculation logic for the salary engine.
//!
//! This module contains the daily salary share under each compensation
//! policy, the per-period aggregation across employees on shift, the
//! organization revenue report, report totals, and salary report assembly.

mod daily_share;
mod organization_revenue;
mod period_salary;
mod report_totals;
mod salary_report;

pub use daily_share::compute_daily_share;
pub use organization_revenue::{UNKNOWN_ORGANIZATION_NAME, compute_organization_revenue};
pub use period_salary::{PeriodBreakdown, compute_period_breakdown, compute_period_salaries};
pub use report_totals::compute_report_totals;
pub use salary_report::build_salary_report;
