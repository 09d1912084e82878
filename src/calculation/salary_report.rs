//! Salary report assembly.
//!
//! Combines the period aggregation, organization revenue and totals into a
//! single [`SalaryReport`] for one report period.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{
    AuditWarning, CompensationPolicy, Employee, Job, Organization, ReportPeriod, SalaryReport,
    ShiftRoster,
};

use super::{compute_organization_revenue, compute_period_breakdown, compute_report_totals};

/// Builds the salary report for a period.
///
/// Jobs dated outside `period` are dropped before aggregation, each with a
/// `JOB_OUTSIDE_PERIOD` warning. Summaries are sorted by employee name, then
/// id. The policy is used as given; validate it beforehand if it comes from
/// an untrusted source.
pub fn build_salary_report(
    period: ReportPeriod,
    jobs: &[Job],
    roster: &ShiftRoster,
    employees: &[Employee],
    organizations: &[Organization],
    policy: &CompensationPolicy,
) -> SalaryReport {
    let mut outside_period = Vec::new();
    let in_period: Vec<Job> = jobs
        .iter()
        .filter(|job| {
            let inside = period.contains_date(job.work_day);
            if !inside {
                outside_period.push(AuditWarning::job_outside_period(
                    &job.id,
                    job.work_day,
                    &period,
                ));
            }
            inside
        })
        .cloned()
        .collect();

    let mut breakdown = compute_period_breakdown(&in_period, roster, employees, policy);
    breakdown.summaries.sort_by(|a, b| {
        a.employee_name
            .cmp(&b.employee_name)
            .then_with(|| a.employee_id.cmp(&b.employee_id))
    });

    let totals = compute_report_totals(&in_period, &breakdown.summaries, &breakdown.days);
    let organizations = compute_organization_revenue(&in_period, organizations);

    let mut audit_trace = breakdown.audit_trace;
    audit_trace.warnings.splice(0..0, outside_period);

    SalaryReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        period,
        policy: policy.clone(),
        summaries: breakdown.summaries,
        days: breakdown.days,
        organizations,
        totals,
        audit_trace,
    }
}
