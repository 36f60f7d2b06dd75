//! Performance facts recorded against employees for a review period.
//!
//! Derived values (percentage achieved, weighted average) are computed on read
//! from the record and its target, never stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmployeeId, PerformanceTarget};

/// An employee's actual achievement against a strategic target for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePerformance {
    /// The employee the achievement belongs to.
    pub employee_id: EmployeeId,
    /// The target the achievement is measured against.
    pub target_id: u64,
    /// Opaque review period token (e.g. "Jan-Jun 2025").
    pub period_under_review: String,
    /// The value the employee actually achieved.
    pub actual_achievement: i64,
    /// The rating given for the achievement, if any.
    #[serde(default)]
    pub actual_rating: Option<i64>,
    /// Supervisor comments.
    #[serde(default)]
    pub comments: Option<String>,
}

impl EmployeePerformance {
    /// Returns `actual_achievement / target_value`, or zero without a usable target value.
    pub fn percentage_achieved(&self, target: &PerformanceTarget) -> Decimal {
        target.percentage_achieved(self.actual_achievement)
    }

    /// Returns the percentage achieved scaled by the target weight.
    ///
    /// # Examples
    ///
    /// ```
    /// use appraisal_engine::models::{EmployeePerformance, PerformanceTarget};
    /// use rust_decimal::Decimal;
    ///
    /// let target = PerformanceTarget {
    ///     id: 1,
    ///     kra_id: 1,
    ///     description: "Recruit 40 new members".to_string(),
    ///     target_value: Some(40),
    ///     annual_target: None,
    ///     weight: 10,
    /// };
    /// let record = EmployeePerformance {
    ///     employee_id: 1,
    ///     target_id: 1,
    ///     period_under_review: "2025".to_string(),
    ///     actual_achievement: 20,
    ///     actual_rating: None,
    ///     comments: None,
    /// };
    /// assert_eq!(record.weighted_average(&target), Decimal::new(5, 0));
    /// ```
    pub fn weighted_average(&self, target: &PerformanceTarget) -> Decimal {
        self.percentage_achieved(target) * target.weight_decimal()
    }
}

/// A soft-skill rating given to an employee for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftSkillRating {
    /// The employee being rated.
    pub employee_id: EmployeeId,
    /// The soft-skill KRA being rated (e.g. Diligence, Teamwork).
    pub kra_id: u64,
    /// Opaque review period token.
    pub period_under_review: String,
    /// The score out of 100.
    pub rating: Decimal,
    /// The relative importance of this soft skill.
    pub weight: u32,
    /// Comments on the rating.
    #[serde(default)]
    pub comments: Option<String>,
}

impl SoftSkillRating {
    /// Returns the weight as a decimal for aggregation.
    pub fn weight_decimal(&self) -> Decimal {
        Decimal::from(self.weight)
    }

    /// Returns `(rating / 100) * weight`, or zero when the weight is zero.
    ///
    /// Ratings are not capped at 100. Returns `None` if the product overflows.
    pub fn weighted_average(&self) -> Option<Decimal> {
        if self.weight == 0 {
            return Some(Decimal::ZERO);
        }
        (self.rating / Decimal::ONE_HUNDRED).checked_mul(self.weight_decimal())
    }
}
