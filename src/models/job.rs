//! Job records.
//!
//! A job is one revenue-generating service performed on a car. Jobs are
//! grouped by their work-day for salary aggregation.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest magnitude accepted for a single revenue or rate amount.
///
/// Keeps every sum and product the engine forms over a request well inside
/// `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// How the customer paid for a job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Paid in cash at the counter.
    #[default]
    Cash,
    /// Paid by card at the counter.
    Card,
    /// Invoiced to a corporate client.
    Organization,
}

/// A completed job on the daily worksheet.
///
/// Only `work_day` and `revenue` take part in salary calculation; the other
/// fields are carried for reporting.
///
/// # Examples
///
/// ```
/// use detailing_payroll::models::{Job, PaymentType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let job = Job::new(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), Decimal::new(1500, 0));
/// assert_eq!(job.payment_type, PaymentType::Cash);
/// assert!(!job.is_invoiced());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Identifier of the job record.
    #[serde(default)]
    pub id: String,
    /// The work-day the job belongs to.
    pub work_day: NaiveDate,
    /// Time of day the car was taken in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Make and model of the car.
    #[serde(default)]
    pub car_name: String,
    /// The service performed.
    #[serde(default)]
    pub service: String,
    /// Revenue charged for the job.
    pub revenue: Decimal,
    /// How the job was paid for.
    #[serde(default)]
    pub payment_type: PaymentType,
    /// The invoiced organization, for organization payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

impl Job {
    /// Creates a cash job with only the fields that affect salary.
    pub fn new(work_day: NaiveDate, revenue: Decimal) -> Self {
        Self {
            id: String::new(),
            work_day,
            time: None,
            car_name: String::new(),
            service: String::new(),
            revenue,
            payment_type: PaymentType::Cash,
            organization_id: None,
        }
    }

    /// Checks that the revenue magnitude does not exceed [`MAX_AMOUNT`].
    ///
    /// Negative revenue is allowed; refunds are recorded that way.
    pub fn validate(&self) -> EngineResult<()> {
        if exceeds_max_amount(self.revenue) {
            return Err(EngineError::InvalidInput {
                field: "revenue".to_string(),
                message: format!(
                    "job '{}' on {} must not exceed {} in magnitude, got {}",
                    self.id, self.work_day, MAX_AMOUNT, self.revenue
                ),
            });
        }
        Ok(())
    }

    /// Returns true if the job is billed to a known organization id.
    pub fn is_invoiced(&self) -> bool {
        self.payment_type == PaymentType::Organization && self.organization_id.is_some()
    }
}

pub(crate) fn exceeds_max_amount(value: Decimal) -> bool {
    value.abs() > MAX_AMOUNT
}
