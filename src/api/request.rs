//! Request types for the salary engine API.
//!
//! This module defines the JSON request structures for the `/reports/salary`
//! and `/salary/daily-share` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationPolicy, Employee, Job, MAX_AMOUNT, ReportPeriod, ShiftRoster};

/// Largest crew accepted by `/salary/daily-share`.
pub const MAX_CREW_SIZE: usize = 10_000;

/// The reporting period, by preset or explicit range.
///
/// ```json
/// {"kind": "week", "date": "2025-03-05"}
/// {"kind": "custom", "start_date": "2025-03-01", "end_date": "2025-03-15"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PeriodRequest {
    /// A single day.
    Day {
        /// The day.
        date: NaiveDate,
    },
    /// The Monday-to-Sunday week containing `date`.
    Week {
        /// Any day within the week.
        date: NaiveDate,
    },
    /// The calendar month containing `date`.
    Month {
        /// Any day within the month.
        date: NaiveDate,
    },
    /// An explicit inclusive range.
    Custom {
        /// The first day of the period.
        start_date: NaiveDate,
        /// The last day of the period.
        end_date: NaiveDate,
    },
}

impl PeriodRequest {
    /// Resolves the request into a concrete period.
    pub fn resolve(&self) -> EngineResult<ReportPeriod> {
        match *self {
            PeriodRequest::Day { date } => Ok(ReportPeriod::day(date)),
            PeriodRequest::Week { date } => Ok(ReportPeriod::week(date)),
            PeriodRequest::Month { date } => Ok(ReportPeriod::month(date)),
            PeriodRequest::Custom {
                start_date,
                end_date,
            } => ReportPeriod::custom(start_date, end_date),
        }
    }
}

/// Request body for the `/reports/salary` endpoint.
///
/// `policy` and `employees` fall back to the shop configuration when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryReportRequest {
    /// The period to report on.
    pub period: PeriodRequest,
    /// Jobs recorded in the period.
    #[serde(default)]
    pub jobs: Vec<Job>,
    /// Who was on shift each day.
    #[serde(default)]
    pub shift_roster: ShiftRoster,
    /// Policy to use instead of the configured one.
    #[serde(default)]
    pub policy: Option<CompensationPolicy>,
    /// Employee directory to use instead of the configured one.
    #[serde(default)]
    pub employees: Option<Vec<Employee>>,
}

impl SalaryReportRequest {
    /// Checks every job's revenue against [`MAX_AMOUNT`].
    pub fn validate(&self) -> EngineResult<()> {
        self.jobs.iter().try_for_each(Job::validate)
    }
}

/// Request body for the `/salary/daily-share` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyShareRequest {
    /// Total revenue of the day.
    pub daily_revenue: Decimal,
    /// Number of employees on shift.
    pub employees_on_shift: usize,
    /// Policy to use instead of the configured one.
    #[serde(default)]
    pub policy: Option<CompensationPolicy>,
}

impl DailyShareRequest {
    /// Checks the revenue against [`MAX_AMOUNT`] and the crew against
    /// [`MAX_CREW_SIZE`].
    pub fn validate(&self) -> EngineResult<()> {
        if self.daily_revenue.abs() > MAX_AMOUNT {
            return Err(EngineError::InvalidInput {
                field: "daily_revenue".to_string(),
                message: format!(
                    "must not exceed {} in magnitude, got {}",
                    MAX_AMOUNT, self.daily_revenue
                ),
            });
        }
        if self.employees_on_shift > MAX_CREW_SIZE {
            return Err(EngineError::InvalidInput {
                field: "employees_on_shift".to_string(),
                message: format!(
                    "must not exceed {}, got {}",
                    MAX_CREW_SIZE, self.employees_on_shift
                ),
            });
        }
        Ok(())
    }
}
