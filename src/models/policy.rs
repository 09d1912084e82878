//! Compensation policy model.
//!
//! The policy decides how a day's revenue turns into salary for the crew on
//! shift. It is always passed into the engine explicitly; there is no
//! built-in default.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::job::{MAX_AMOUNT, exceeds_max_amount};

/// The configured rule set for turning daily revenue into salary.
///
/// Serialized with a `method` tag: `percent` or `min_plus_percent`. Any other
/// method fails to deserialize.
///
/// # Examples
///
/// ```
/// use detailing_payroll::models::CompensationPolicy;
/// use rust_decimal::Decimal;
///
/// let json = r#"{"method": "min_plus_percent", "percent": "30", "minimum_daily_rate": "500", "bonus_percent": "5"}"#;
/// let policy: CompensationPolicy = serde_json::from_str(json).unwrap();
///
/// assert_eq!(policy.percent(), Decimal::new(30, 0));
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum CompensationPolicy {
    /// Each employee earns `percent`% of their per-capita share of the day's revenue.
    #[serde(rename = "percent")]
    PercentOfRevenue {
        /// Percentage of per-capita revenue paid as salary (0–100).
        percent: Decimal,
    },
    /// Per-capita percent pay, floored at a guaranteed daily minimum, otherwise
    /// topped up with a bonus on the day's total revenue.
    #[serde(rename = "min_plus_percent")]
    MinimumPlusBonus {
        /// Percentage of per-capita revenue paid as salary (0–100).
        percent: Decimal,
        /// Guaranteed salary for a day on shift (0 up to [`MAX_AMOUNT`]).
        #[serde(default)]
        minimum_daily_rate: Decimal,
        /// Percentage of total daily revenue added when the floor is not hit (0–100).
        #[serde(default)]
        bonus_percent: Decimal,
    },
}

impl CompensationPolicy {
    /// Returns the percentage of per-capita revenue paid under this policy.
    pub fn percent(&self) -> Decimal {
        match self {
            CompensationPolicy::PercentOfRevenue { percent } => *percent,
            CompensationPolicy::MinimumPlusBonus { percent, .. } => *percent,
        }
    }

    /// Returns the serialized method tag.
    pub fn method_name(&self) -> &'static str {
        match self {
            CompensationPolicy::PercentOfRevenue { .. } => "percent",
            CompensationPolicy::MinimumPlusBonus { .. } => "min_plus_percent",
        }
    }

    /// Checks that every policy value is within its allowed range.
    ///
    /// The salary engine never calls this; it belongs to whoever accepts a
    /// policy from the outside (configuration loading, API requests).
    pub fn validate(&self) -> EngineResult<()> {
        match self {
            CompensationPolicy::PercentOfRevenue { percent } => {
                check_percent("percent", *percent)
            }
            CompensationPolicy::MinimumPlusBonus {
                percent,
                minimum_daily_rate,
                bonus_percent,
            } => {
                check_percent("percent", *percent)?;
                if *minimum_daily_rate < Decimal::ZERO {
                    return Err(EngineError::InvalidPolicy {
                        field: "minimum_daily_rate".to_string(),
                        message: format!("must not be negative, got {}", minimum_daily_rate),
                    });
                }
                if exceeds_max_amount(*minimum_daily_rate) {
                    return Err(EngineError::InvalidPolicy {
                        field: "minimum_daily_rate".to_string(),
                        message: format!(
                            "must not exceed {}, got {}",
                            MAX_AMOUNT, minimum_daily_rate
                        ),
                    });
                }
                check_percent("bonus_percent", *bonus_percent)
            }
        }
    }
}

fn check_percent(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(EngineError::InvalidPolicy {
            field: field.to_string(),
            message: format!("must be between 0 and 100, got {}", value),
        });
    }
    Ok(())
}
