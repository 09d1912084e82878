//! Period salary aggregation.
//!
//! This module groups a period's jobs by work-day, splits each day's revenue
//! across the employees on shift, and accumulates a salary summary per
//! employee.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CompensationPolicy, DailySummary, Employee,
    EmployeeSummary, Job, ShiftRoster,
};

use super::daily_share::{compute_daily_share, per_capita};

/// The full result of aggregating a period: summaries plus the per-day
/// splits and audit trace that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBreakdown {
    /// One summary per employee with at least one shift, in directory order.
    pub summaries: Vec<EmployeeSummary>,
    /// One entry per work-day with at least one job, in date order.
    pub days: Vec<DailySummary>,
    /// One audit step per work-day, plus warnings about unusual input.
    pub audit_trace: AuditTrace,
}

/// Computes the salary summary of every employee who worked in the period.
///
/// Jobs are grouped by work-day. For each work-day with at least one job:
///
/// 1. the day's revenue is the sum of its jobs' revenue;
/// 2. the crew is the roster entry for that day (an absent entry is an empty
///    crew), and the revenue is split across every id in it;
/// 3. every crew member found in `employees` gets one shift, `revenue / crew`
///    of attributed revenue, and the salary from [`compute_daily_share`].
///
/// Roster ids missing from `employees` still count towards the crew size but
/// get no summary, so their share is paid to nobody. A day with no crew
/// contributes to nobody. Rostered days without any job
/// are never visited and do not count as shifts. Employees without a single
/// shift are left out of the result; the rest keep the order of `employees`.
///
/// # Examples
///
/// ```
/// use detailing_payroll::calculation::compute_period_salaries;
/// use detailing_payroll::models::{CompensationPolicy, Employee, Job, ShiftRoster};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// let jobs = vec![
///     Job::new(monday, Decimal::new(600, 0)),
///     Job::new(monday, Decimal::new(400, 0)),
/// ];
/// let roster: ShiftRoster = [(monday, vec!["e1", "e2"])].into_iter().collect();
/// let employees = vec![
///     Employee::new("e1", "Anna"),
///     Employee::new("e2", "Boris"),
///     Employee::new("e3", "Vera"),
/// ];
/// let policy = CompensationPolicy::PercentOfRevenue { percent: Decimal::new(50, 0) };
///
/// let summaries = compute_period_salaries(&jobs, &roster, &employees, &policy);
///
/// assert_eq!(summaries.len(), 2);
/// assert_eq!(summaries[0].total_salary, Decimal::new(250, 0));
/// assert_eq!(summaries[0].total_revenue_attributed, Decimal::new(500, 0));
/// assert_eq!(summaries[1].shifts_worked, 1);
/// ```
pub fn compute_period_salaries(
    jobs: &[Job],
    roster: &ShiftRoster,
    employees: &[Employee],
    policy: &CompensationPolicy,
) -> Vec<EmployeeSummary> {
    compute_period_breakdown(jobs, roster, employees, policy).summaries
}

/// Runs the same aggregation as [`compute_period_salaries`] and also returns
/// the daily splits and an audit trace.
pub fn compute_period_breakdown(
    jobs: &[Job],
    roster: &ShiftRoster,
    employees: &[Employee],
    policy: &CompensationPolicy,
) -> PeriodBreakdown {
    let mut accumulators: Vec<EmployeeSummary> = Vec::with_capacity(employees.len());
    let mut directory: HashMap<&str, usize> = HashMap::with_capacity(employees.len());
    for employee in employees {
        // First record wins if the directory repeats an id
        if directory.contains_key(employee.id.as_str()) {
            continue;
        }
        directory.insert(employee.id.as_str(), accumulators.len());
        accumulators.push(EmployeeSummary::new(&employee.id, &employee.name));
    }

    let mut jobs_by_day: BTreeMap<NaiveDate, (Decimal, u32)> = BTreeMap::new();
    for job in jobs {
        let (revenue, job_count) = jobs_by_day
            .entry(job.work_day)
            .or_insert((Decimal::ZERO, 0));
        *revenue += job.revenue;
        *job_count += 1;
    }

    let mut days = Vec::with_capacity(jobs_by_day.len());
    let mut audit_trace = AuditTrace::default();
    let mut step_number: u32 = 1;

    for (work_day, (revenue, job_count)) in jobs_by_day {
        let mut crew_slots = Vec::new();
        let mut crew_ids = Vec::new();
        let crew_size = roster.crew_size(work_day);

        for employee_id in roster.crew(work_day).into_iter().flatten() {
            crew_ids.push(employee_id.clone());
            match directory.get(employee_id.as_str()) {
                Some(&slot) => crew_slots.push(slot),
                None => {
                    debug!(%work_day, %employee_id, "Rostered id not in employee directory");
                    audit_trace
                        .warnings
                        .push(AuditWarning::unknown_employee(work_day, employee_id));
                }
            }
        }

        let per_capita_revenue = per_capita(revenue, crew_size);
        let per_employee_salary = compute_daily_share(revenue, policy, crew_size);
        let orphaned = crew_size == 0;

        if orphaned && !revenue.is_zero() {
            debug!(%work_day, %revenue, "No crew on shift, revenue left unattributed");
            audit_trace
                .warnings
                .push(AuditWarning::orphaned_revenue(work_day, revenue));
        }

        for &slot in &crew_slots {
            let summary = &mut accumulators[slot];
            summary.shifts_worked += 1;
            summary.total_revenue_attributed += per_capita_revenue;
            summary.total_salary += per_employee_salary;
        }

        audit_trace.steps.push(AuditStep {
            step_number,
            rule_id: "daily_share".to_string(),
            rule_name: "Daily Salary Share".to_string(),
            input: serde_json::json!({
                "work_day": work_day.to_string(),
                "revenue": revenue.to_string(),
                "job_count": job_count,
                "crew_size": crew_size,
                "paid_employees": crew_slots.len(),
                "method": policy.method_name(),
            }),
            output: serde_json::json!({
                "per_capita_revenue": per_capita_revenue.to_string(),
                "per_employee_salary": per_employee_salary.to_string(),
                "orphaned": orphaned,
            }),
            reasoning: describe_split(
                revenue,
                crew_size,
                per_capita_revenue,
                per_employee_salary,
                policy,
            ),
        });
        step_number += 1;

        days.push(DailySummary {
            work_day,
            revenue,
            job_count,
            crew: crew_ids,
            per_capita_revenue,
            per_employee_salary,
            orphaned,
        });
    }

    let summaries: Vec<EmployeeSummary> = accumulators
        .into_iter()
        .filter(|summary| summary.shifts_worked > 0)
        .collect();

    debug!(
        work_days = days.len(),
        employees_paid = summaries.len(),
        warnings = audit_trace.warnings.len(),
        "Period salaries computed"
    );

    PeriodBreakdown {
        summaries,
        days,
        audit_trace,
    }
}

fn describe_split(
    revenue: Decimal,
    crew_size: usize,
    per_capita_revenue: Decimal,
    per_employee_salary: Decimal,
    policy: &CompensationPolicy,
) -> String {
    if crew_size == 0 {
        return format!("Revenue {} has no crew on shift; nothing attributed", revenue);
    }

    let split = format!(
        "Revenue {} split across {} employee(s) = {} each",
        revenue, crew_size, per_capita_revenue
    );
    match policy {
        CompensationPolicy::PercentOfRevenue { percent } => {
            format!("{}; {}% paid = {}", split, percent, per_employee_salary)
        }
        CompensationPolicy::MinimumPlusBonus {
            percent,
            minimum_daily_rate,
            bonus_percent,
        } => {
            if per_employee_salary == *minimum_daily_rate
                && per_capita_revenue * *percent / Decimal::ONE_HUNDRED < *minimum_daily_rate
            {
                format!(
                    "{}; {}% is below the minimum {}, minimum paid",
                    split, percent, minimum_daily_rate
                )
            } else {
                format!(
                    "{}; {}% plus {}% bonus on total revenue = {}",
                    split, percent, bonus_percent, per_employee_salary
                )
            }
        }
    }
}
