//! Shift roster model.
//!
//! The roster records which employees were on shift on each work-day.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mapping from work-day to the set of employee ids on shift that day.
///
/// A work-day missing from the roster has no employees on shift. Serializes
/// as a JSON object keyed by `YYYY-MM-DD`, with an array of ids per day.
///
/// # Examples
///
/// ```
/// use detailing_payroll::models::ShiftRoster;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// let roster: ShiftRoster = [(monday, vec!["emp_001", "emp_002"])].into_iter().collect();
///
/// assert_eq!(roster.crew_size(monday), 2);
/// assert!(roster.is_on_shift(monday, "emp_001"));
/// assert_eq!(roster.crew_size(monday.succ_opt().unwrap()), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftRoster(BTreeMap<NaiveDate, BTreeSet<String>>);

impl ShiftRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts an employee on shift for a work-day.
    ///
    /// Returns false if the employee was already rostered that day.
    pub fn assign(&mut self, work_day: NaiveDate, employee_id: impl Into<String>) -> bool {
        self.0.entry(work_day).or_default().insert(employee_id.into())
    }

    /// Returns the crew rostered on a work-day, if the day has an entry.
    pub fn crew(&self, work_day: NaiveDate) -> Option<&BTreeSet<String>> {
        self.0.get(&work_day)
    }

    /// Returns the number of employees rostered on a work-day.
    pub fn crew_size(&self, work_day: NaiveDate) -> usize {
        self.crew(work_day).map_or(0, BTreeSet::len)
    }

    /// Returns true if the employee is rostered on the work-day.
    pub fn is_on_shift(&self, work_day: NaiveDate, employee_id: &str) -> bool {
        self.crew(work_day)
            .is_some_and(|crew| crew.contains(employee_id))
    }

    /// Iterates over rostered work-days in ascending order.
    pub fn work_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.keys().copied()
    }

    /// Returns the number of work-days with a roster entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no work-day has a roster entry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<I, S> FromIterator<(NaiveDate, I)> for ShiftRoster
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (NaiveDate, I)>>(iter: T) -> Self {
        let mut roster = ShiftRoster::new();
        for (work_day, ids) in iter {
            let crew = roster.0.entry(work_day).or_default();
            crew.extend(ids.into_iter().map(Into::into));
        }
        roster
    }
}
