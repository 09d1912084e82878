//! Report period model.
//!
//! This module contains the [`ReportPeriod`] type that bounds a salary report,
//! with constructors for the day, week and month presets of the reports screen.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive range of work-days covered by a report.
///
/// # Example
///
/// ```
/// use detailing_payroll::models::ReportPeriod;
/// use chrono::NaiveDate;
///
/// // Wednesday
/// let period = ReportPeriod::week(NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
///
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
/// assert_eq!(period.day_count(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl ReportPeriod {
    /// A period covering a single day.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start_date: date,
            end_date: date,
        }
    }

    /// The Monday-to-Sunday week containing `date`.
    pub fn week(date: NaiveDate) -> Self {
        let start_date = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
        Self {
            start_date,
            end_date: start_date + Duration::days(6),
        }
    }

    /// The calendar month containing `date`.
    pub fn month(date: NaiveDate) -> Self {
        let start_date = date - Duration::days(i64::from(date.day0()));
        let end_date = start_date
            .checked_add_months(Months::new(1))
            .and_then(|next_month| next_month.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        Self {
            start_date,
            end_date,
        }
    }

    /// A custom period. Fails if `start_date` is after `end_date`.
    ///
    /// # Example
    ///
    /// ```
    /// use detailing_payroll::models::ReportPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    /// assert!(ReportPeriod::custom(start, end).is_err());
    /// assert!(ReportPeriod::custom(end, start).is_ok());
    /// ```
    pub fn custom(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if start_date > end_date {
            return Err(EngineError::InvalidPeriod {
                start_date,
                end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Checks if a given date falls within this period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Iterates over every date in the period, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end_date = self.end_date;
        self.start_date
            .iter_days()
            .take_while(move |date| *date <= end_date)
    }

    /// The number of days in the period.
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
