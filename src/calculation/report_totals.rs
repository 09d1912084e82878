//! Report-wide totals.

use rust_decimal::Decimal;

use crate::models::{DailySummary, EmployeeSummary, Job, PaymentType, PaymentTypeTotals, ReportTotals};

/// Sums revenue and salary across a report.
///
/// `total_revenue` covers every job passed in, while `attributed_revenue`
/// only covers what reached an employee in the directory. The difference is
/// the revenue of orphaned days plus the shares of rostered ids missing from
/// the directory.
pub fn compute_report_totals(
    jobs: &[Job],
    summaries: &[EmployeeSummary],
    days: &[DailySummary],
) -> ReportTotals {
    let mut revenue_by_payment_type = PaymentTypeTotals::default();
    for job in jobs {
        let bucket = match job.payment_type {
            PaymentType::Cash => &mut revenue_by_payment_type.cash,
            PaymentType::Card => &mut revenue_by_payment_type.card,
            PaymentType::Organization => &mut revenue_by_payment_type.organization,
        };
        *bucket += job.revenue;
    }

    ReportTotals {
        total_revenue: jobs.iter().map(|job| job.revenue).sum(),
        attributed_revenue: summaries
            .iter()
            .map(|summary| summary.total_revenue_attributed)
            .sum(),
        orphaned_revenue: days
            .iter()
            .filter(|day| day.orphaned)
            .map(|day| day.revenue)
            .sum(),
        total_salaries: summaries.iter().map(|summary| summary.total_salary).sum(),
        revenue_by_payment_type,
        employees_paid: summaries.len() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_period_breakdown;
    use crate::models::{CompensationPolicy, Employee, ShiftRoster};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn job(d: u32, revenue: i64, payment_type: PaymentType) -> Job {
        let mut job = Job::new(day(d), Decimal::new(revenue, 0));
        job.payment_type = payment_type;
        job
    }

    #[test]
    fn test_totals_split_attributed_and_orphaned() {
        let jobs = vec![
            job(3, 1000, PaymentType::Cash),
            job(3, 500, PaymentType::Card),
            job(4, 800, PaymentType::Organization),
        ];
        let roster: ShiftRoster = [(day(3), vec!["e1", "e2"])].into_iter().collect();
        let employees = vec![Employee::new("e1", "Anna"), Employee::new("e2", "Boris")];
        let policy = CompensationPolicy::PercentOfRevenue {
            percent: Decimal::new(40, 0),
        };
        let breakdown = compute_period_breakdown(&jobs, &roster, &employees, &policy);

        let totals = compute_report_totals(&jobs, &breakdown.summaries, &breakdown.days);

        assert_eq!(totals.total_revenue, Decimal::new(2300, 0));
        assert_eq!(totals.attributed_revenue, Decimal::new(1500, 0));
        assert_eq!(totals.orphaned_revenue, Decimal::new(800, 0));
        // 40% of 1500, independent of crew size
        assert_eq!(totals.total_salaries, Decimal::new(600, 0));
        assert_eq!(totals.revenue_by_payment_type.cash, Decimal::new(1000, 0));
        assert_eq!(totals.revenue_by_payment_type.card, Decimal::new(500, 0));
        assert_eq!(totals.revenue_by_payment_type.organization, Decimal::new(800, 0));
        assert_eq!(totals.employees_paid, 2);
    }

    #[test]
    fn test_empty_report_totals_are_zero() {
        let totals = compute_report_totals(&[], &[], &[]);
        assert_eq!(totals.total_revenue, Decimal::ZERO);
        assert_eq!(totals.total_salaries, Decimal::ZERO);
        assert_eq!(totals.employees_paid, 0);
    }
}
