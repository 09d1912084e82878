//! Salary report models.
//!
//! This module contains the [`EmployeeSummary`] produced by the salary engine
//! and the [`SalaryReport`] that wraps it with daily breakdowns, organization
//! revenue, totals and an audit trace.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CompensationPolicy, ReportPeriod};

/// Salary summary for one employee over a report period.
///
/// # Example
///
/// ```
/// use detailing_payroll::models::EmployeeSummary;
/// use rust_decimal::Decimal;
///
/// let summary = EmployeeSummary::new("emp_001", "Anna");
/// assert_eq!(summary.shifts_worked, 0);
/// assert_eq!(summary.total_salary, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee's directory id.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// Work-days with at least one job on which the employee was on shift.
    pub shifts_worked: u32,
    /// Sum of the employee's per-capita share of daily revenue.
    pub total_revenue_attributed: Decimal,
    /// Sum of the employee's daily salary.
    pub total_salary: Decimal,
}

impl EmployeeSummary {
    /// Creates an empty accumulator for an employee.
    pub fn new(employee_id: impl Into<String>, employee_name: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            shifts_worked: 0,
            total_revenue_attributed: Decimal::ZERO,
            total_salary: Decimal::ZERO,
        }
    }
}

/// How one work-day's revenue was split across its crew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// The work-day.
    pub work_day: NaiveDate,
    /// Sum of job revenue on the day.
    pub revenue: Decimal,
    /// Number of job records on the day.
    pub job_count: u32,
    /// Roster ids on shift, sorted by id, including ids missing from the directory.
    pub crew: Vec<String>,
    /// Revenue attributed to each crew member (revenue / crew size).
    pub per_capita_revenue: Decimal,
    /// Salary earned by each crew member.
    pub per_employee_salary: Decimal,
    /// True if nobody was on shift, leaving the revenue unattributed.
    pub orphaned: bool,
}

/// Revenue invoiced to one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRevenue {
    /// The organization's id as recorded on the jobs.
    pub organization_id: String,
    /// The organization's name, or a placeholder if it is not in the directory.
    pub name: String,
    /// Sum of invoiced job revenue.
    pub revenue: Decimal,
    /// Number of invoiced jobs.
    pub job_count: u32,
}

/// Revenue split by payment type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTypeTotals {
    /// Revenue paid in cash.
    pub cash: Decimal,
    /// Revenue paid by card.
    pub card: Decimal,
    /// Revenue invoiced to organizations.
    pub organization: Decimal,
}

/// Aggregated totals for a salary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Revenue of every job in the report.
    pub total_revenue: Decimal,
    /// Revenue attributed to employees in the directory.
    pub attributed_revenue: Decimal,
    /// Revenue on days nobody was on shift.
    pub orphaned_revenue: Decimal,
    /// Salary owed to all employees.
    pub total_salaries: Decimal,
    /// Revenue by payment type.
    pub revenue_by_payment_type: PaymentTypeTotals,
    /// Number of employees with at least one shift.
    pub employees_paid: u32,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Warning code for revenue recorded on a day nobody was on shift.
pub const WARNING_ORPHANED_REVENUE: &str = "ORPHANED_REVENUE";
/// Warning code for a rostered id that is not in the employee directory.
pub const WARNING_UNKNOWN_EMPLOYEE: &str = "UNKNOWN_EMPLOYEE";
/// Warning code for a job dated outside the report period.
pub const WARNING_JOB_OUTSIDE_PERIOD: &str = "JOB_OUTSIDE_PERIOD";

/// A warning generated during calculation.
///
/// Warnings flag input the engine handled without failing but that a
/// manager probably wants to look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Revenue on `work_day` could not be attributed to anyone.
    pub fn orphaned_revenue(work_day: NaiveDate, revenue: Decimal) -> Self {
        Self {
            code: WARNING_ORPHANED_REVENUE.to_string(),
            message: format!(
                "Revenue {} on {} has no employees on shift and was not attributed",
                revenue, work_day
            ),
            severity: "medium".to_string(),
        }
    }

    /// `employee_id` was rostered on `work_day` but is not in the directory.
    pub fn unknown_employee(work_day: NaiveDate, employee_id: &str) -> Self {
        Self {
            code: WARNING_UNKNOWN_EMPLOYEE.to_string(),
            message: format!(
                "Employee '{}' rostered on {} is not in the employee directory; their share is not paid out",
                employee_id, work_day
            ),
            severity: "low".to_string(),
        }
    }

    /// A job was dropped because it is dated outside the report period.
    pub fn job_outside_period(job_id: &str, work_day: NaiveDate, period: &ReportPeriod) -> Self {
        Self {
            code: WARNING_JOB_OUTSIDE_PERIOD.to_string(),
            message: format!(
                "Job '{}' on {} is outside the report period {} to {}",
                job_id, work_day, period.start_date, period.end_date
            ),
            severity: "low".to_string(),
        }
    }
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete salary report for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that generated the report.
    pub engine_version: String,
    /// The period the report covers.
    pub period: ReportPeriod,
    /// The policy salaries were computed under.
    pub policy: CompensationPolicy,
    /// One summary per employee who worked, sorted by name.
    pub summaries: Vec<EmployeeSummary>,
    /// One entry per work-day with jobs, in date order.
    pub days: Vec<DailySummary>,
    /// Revenue invoiced to organizations.
    pub organizations: Vec<OrganizationRevenue>,
    /// Report-wide totals.
    pub totals: ReportTotals,
    /// Audit trace of every daily split.
    pub audit_trace: AuditTrace,
}
