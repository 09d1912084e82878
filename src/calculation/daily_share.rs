//! Daily salary share calculation.
//!
//! This module turns one work-day's revenue into the salary paid to each
//! employee on shift that day, under either compensation policy.

use rust_decimal::Decimal;

use crate::models::CompensationPolicy;

/// Computes the salary each employee on shift earns for one work-day.
///
/// The day's revenue is split evenly across the crew, and the policy is
/// applied to that per-capita share:
///
/// - `PercentOfRevenue`: `(revenue / crew) * percent / 100`.
/// - `MinimumPlusBonus`: the percent salary as above; if it falls below
///   `minimum_daily_rate` the minimum is paid instead, otherwise
///   `revenue * bonus_percent / 100` is added on top. The bonus is taken on
///   the day's **total** revenue, so every crew member receives the full bonus.
///
/// A crew of zero earns nothing, whatever the revenue. Policy values are not
/// range-checked here; see [`CompensationPolicy::validate`]. Amounts are
/// expected within [`MAX_AMOUNT`](crate::models::MAX_AMOUNT), which the API
/// enforces before calling in.
///
/// # Examples
///
/// ```
/// use detailing_payroll::calculation::compute_daily_share;
/// use detailing_payroll::models::CompensationPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = CompensationPolicy::MinimumPlusBonus {
///     percent: Decimal::new(30, 0),
///     minimum_daily_rate: Decimal::new(500, 0),
///     bonus_percent: Decimal::new(5, 0),
/// };
///
/// // 30% of 1000 is 300, below the 500 floor
/// assert_eq!(compute_daily_share(Decimal::new(1000, 0), &policy, 1), Decimal::new(500, 0));
/// // 30% of 4000 is 1200, plus 5% of 4000
/// assert_eq!(compute_daily_share(Decimal::new(4000, 0), &policy, 1), Decimal::new(1400, 0));
/// // nobody on shift
/// assert_eq!(compute_daily_share(Decimal::new(4000, 0), &policy, 0), Decimal::ZERO);
/// ```
pub fn compute_daily_share(
    daily_revenue: Decimal,
    policy: &CompensationPolicy,
    employees_on_shift: usize,
) -> Decimal {
    if employees_on_shift == 0 {
        return Decimal::ZERO;
    }

    let per_capita_revenue = per_capita(daily_revenue, employees_on_shift);

    match policy {
        CompensationPolicy::PercentOfRevenue { percent } => {
            percent_of(per_capita_revenue, *percent)
        }
        CompensationPolicy::MinimumPlusBonus {
            percent,
            minimum_daily_rate,
            bonus_percent,
        } => {
            let percent_salary = percent_of(per_capita_revenue, *percent);
            if percent_salary < *minimum_daily_rate {
                *minimum_daily_rate
            } else {
                percent_salary + percent_of(daily_revenue, *bonus_percent)
            }
        }
    }
}

/// Splits revenue evenly across a crew. A crew of zero gets nothing.
pub(crate) fn per_capita(revenue: Decimal, crew_size: usize) -> Decimal {
    if crew_size == 0 {
        return Decimal::ZERO;
    }
    revenue / Decimal::from(crew_size as u64)
}

fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount * percent / Decimal::ONE_HUNDRED
}
