//! Organization revenue report.
//!
//! Sums the revenue of jobs invoiced to corporate clients, per organization.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use crate::models::{Job, Organization, OrganizationRevenue};

/// Name given to an organization id that is not in the directory.
pub const UNKNOWN_ORGANIZATION_NAME: &str = "Unknown organization";

/// Groups invoiced jobs by organization.
///
/// Only jobs paid by `organization` that carry an `organization_id` are
/// counted. Ids missing from `organizations` are still reported, under
/// [`UNKNOWN_ORGANIZATION_NAME`]. The result is sorted by organization id.
///
/// # Examples
///
/// ```
/// use detailing_payroll::calculation::compute_organization_revenue;
/// use detailing_payroll::models::{Job, Organization, PaymentType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut job = Job::new(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), Decimal::new(2500, 0));
/// job.payment_type = PaymentType::Organization;
/// job.organization_id = Some("org_001".to_string());
///
/// let organizations = vec![Organization {
///     id: "org_001".to_string(),
///     name: "City Taxi".to_string(),
///     details: None,
/// }];
///
/// let report = compute_organization_revenue(&[job], &organizations);
/// assert_eq!(report[0].name, "City Taxi");
/// assert_eq!(report[0].revenue, Decimal::new(2500, 0));
/// ```
pub fn compute_organization_revenue(
    jobs: &[Job],
    organizations: &[Organization],
) -> Vec<OrganizationRevenue> {
    let names: HashMap<&str, &str> = organizations
        .iter()
        .map(|org| (org.id.as_str(), org.name.as_str()))
        .collect();

    let mut by_organization: BTreeMap<&str, (Decimal, u32)> = BTreeMap::new();
    for job in jobs.iter().filter(|job| job.is_invoiced()) {
        if let Some(organization_id) = job.organization_id.as_deref() {
            let (revenue, job_count) = by_organization
                .entry(organization_id)
                .or_insert((Decimal::ZERO, 0));
            *revenue += job.revenue;
            *job_count += 1;
        }
    }

    by_organization
        .into_iter()
        .map(|(organization_id, (revenue, job_count))| OrganizationRevenue {
            organization_id: organization_id.to_string(),
            name: names
                .get(organization_id)
                .copied()
                .unwrap_or(UNKNOWN_ORGANIZATION_NAME)
                .to_string(),
            revenue,
            job_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentType;
    use chrono::NaiveDate;

    fn job(revenue: i64, payment_type: PaymentType, organization_id: Option<&str>) -> Job {
        let mut job = Job::new(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), Decimal::new(revenue, 0));
        job.payment_type = payment_type;
        job.organization_id = organization_id.map(str::to_string);
        job
    }

    fn directory() -> Vec<Organization> {
        vec![
            Organization {
                id: "org_001".to_string(),
                name: "City Taxi".to_string(),
                details: None,
            },
            Organization {
                id: "org_002".to_string(),
                name: "Fleet Rent".to_string(),
                details: Some("Invoice monthly".to_string()),
            },
        ]
    }

    #[test]
    fn test_groups_revenue_by_organization() {
        let jobs = vec![
            job(1000, PaymentType::Organization, Some("org_002")),
            job(500, PaymentType::Organization, Some("org_001")),
            job(700, PaymentType::Organization, Some("org_002")),
        ];
        let report = compute_organization_revenue(&jobs, &directory());

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].organization_id, "org_001");
        assert_eq!(report[0].revenue, Decimal::new(500, 0));
        assert_eq!(report[0].job_count, 1);
        assert_eq!(report[1].name, "Fleet Rent");
        assert_eq!(report[1].revenue, Decimal::new(1700, 0));
        assert_eq!(report[1].job_count, 2);
    }

    #[test]
    fn test_cash_and_card_jobs_are_ignored() {
        let jobs = vec![
            job(1000, PaymentType::Cash, None),
            job(800, PaymentType::Card, Some("org_001")),
        ];
        assert!(compute_organization_revenue(&jobs, &directory()).is_empty());
    }

    #[test]
    fn test_organization_payment_without_id_is_ignored() {
        let jobs = vec![job(1000, PaymentType::Organization, None)];
        assert!(compute_organization_revenue(&jobs, &directory()).is_empty());
    }

    #[test]
    fn test_unknown_organization_gets_placeholder_name() {
        let jobs = vec![job(300, PaymentType::Organization, Some("org_999"))];
        let report = compute_organization_revenue(&jobs, &directory());
        assert_eq!(report[0].name, UNKNOWN_ORGANIZATION_NAME);
        assert_eq!(report[0].organization_id, "org_999");
    }
}
