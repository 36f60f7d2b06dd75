//! Bonus pool allocation.
//!
//! This module distributes a bonus pool across all active employees in
//! proportion to salary share scaled by performance rating:
//!
//! ```text
//! bonus = (annual_salary / total_salary) * (performance_rating * total_bonus_pool)
//! ```
//!
//! Only a zero salary basis fails the whole run. Any problem with a single
//! employee yields a warned row with a zero bonus and the run carries on.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, BonusRun, BonusTotals, Employee, EmployeeBonus,
    WARNING_BONUS_ARITHMETIC, WARNING_MISSING_SALARY, WARNING_SCORES_UNAVAILABLE,
};
use crate::records::RecordSource;

use super::score_aggregator::{ScoreBreakdown, aggregate_scores};

/// The inputs of one allocation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusRequest {
    /// The amount to distribute.
    pub total_bonus_pool: Decimal,
    /// Opaque review period token matching the recorded ratings.
    pub period_under_review: String,
}

/// Sums the annual salaries of the given employees, counting a missing salary as 0.
///
/// # Errors
///
/// Returns `CalculationError` if the sum overflows.
pub fn sum_salaries(employees: &[Employee]) -> EngineResult<Decimal> {
    employees.iter().try_fold(Decimal::ZERO, |acc, employee| {
        acc.checked_add(employee.salary_basis())
            .ok_or_else(|| EngineError::CalculationError {
                message: "arithmetic overflow summing annual salaries".to_string(),
            })
    })
}

/// Computes one employee's bonus at full precision.
///
/// Returns `None` if any intermediate value overflows or `total_salary` is zero.
///
/// # Examples
///
/// ```
/// use appraisal_engine::calculation::bonus_amount;
/// use rust_decimal::Decimal;
///
/// let bonus = bonus_amount(
///     Decimal::from(50_000),
///     Decimal::from(100_000),
///     Decimal::new(5, 1),
///     Decimal::from(100_000),
/// );
/// assert_eq!(bonus, Some(Decimal::from(25_000)));
/// ```
pub fn bonus_amount(
    annual_salary: Decimal,
    total_salary: Decimal,
    performance_rating: Decimal,
    total_bonus_pool: Decimal,
) -> Option<Decimal> {
    let share = annual_salary.checked_div(total_salary)?;
    let pool = performance_rating.checked_mul(total_bonus_pool)?;
    share.checked_mul(pool)
}

/// Runs a bonus allocation over the active employees of a record source.
///
/// Rows follow the order in which the source returns active employees. All
/// scores and bonuses in the result are rounded to two decimal places.
///
/// # Errors
///
/// Returns `NoSalaryBasis` if there are active employees but their salaries sum
/// to zero, or any error from fetching the active employees.
///
/// # Examples
///
/// ```
/// use appraisal_engine::calculation::{BonusRequest, allocate_bonus};
/// use appraisal_engine::config::ConfigLoader;
/// use appraisal_engine::records::AppraisalStore;
/// use rust_decimal::Decimal;
///
/// let request = BonusRequest {
///     total_bonus_pool: Decimal::from(100_000),
///     period_under_review: "2025".to_string(),
/// };
/// let run = allocate_bonus(&AppraisalStore::new(), &request, &ConfigLoader::default()).unwrap();
/// assert!(run.results.is_empty());
/// ```
pub fn allocate_bonus<S: RecordSource + ?Sized>(
    source: &S,
    request: &BonusRequest,
    config: &ConfigLoader,
) -> EngineResult<BonusRun> {
    let start_time = Instant::now();
    let period = request.period_under_review.as_str();
    let pool = request.total_bonus_pool;

    let employees = source.active_employees()?;
    let total_salary = sum_salaries(&employees)?;

    if !employees.is_empty() && total_salary.is_zero() {
        warn!(
            period = %period,
            employees = employees.len(),
            "No salary basis for bonus allocation"
        );
        return Err(EngineError::NoSalaryBasis {
            period: period.to_string(),
        });
    }

    let mut allocation = Allocation::new(total_salary, pool);
    for employee in &employees {
        allocation.allocate(source, employee, period, config);
    }

    let run = allocation.finish(request, start_time);
    info!(
        period = %period,
        employees = run.totals.employee_count,
        warnings = run.totals.warning_count,
        total_allocated = %run.totals.total_allocated,
        duration_us = run.audit_trace.duration_us,
        "Bonus allocation completed"
    );

    Ok(run)
}

/// Accumulates rows and audit steps over one run.
struct Allocation {
    total_salary: Decimal,
    pool: Decimal,
    results: Vec<EmployeeBonus>,
    steps: Vec<AuditStep>,
    step_number: u32,
}

impl Allocation {
    fn new(total_salary: Decimal, pool: Decimal) -> Self {
        Self {
            total_salary,
            pool,
            results: Vec::new(),
            steps: Vec::new(),
            step_number: 1,
        }
    }

    fn allocate<S: RecordSource + ?Sized>(
        &mut self,
        source: &S,
        employee: &Employee,
        period: &str,
        config: &ConfigLoader,
    ) {
        let scores = match aggregate_scores(source, employee.id, period, config.category_weights()) {
            Ok(scores) => scores,
            Err(err) => {
                let warning = AuditWarning::for_employee(
                    employee.id,
                    WARNING_SCORES_UNAVAILABLE,
                    format!(
                        "Scores for user {} could not be computed ({}), skipping bonus calculation for them.",
                        employee.username, err
                    ),
                    "high",
                );
                self.push_row(employee, zero_scores(), None, Decimal::ZERO, Some(warning));
                return;
            }
        };

        self.record_step(
            employee,
            "performance_rating",
            "Performance Rating",
            serde_json::json!({
                "strategic_score": scores.strategic_score.normalize().to_string(),
                "soft_skill_score": scores.soft_skill_score.normalize().to_string(),
                "strategic_weight": config.category_weights().strategic.to_string(),
                "soft_skill_weight": config.category_weights().soft_skill.to_string(),
            }),
            serde_json::json!({
                "performance_rating": scores.combined_score.normalize().to_string(),
            }),
            format!(
                "{} x {} + {} x {} = {}",
                config.category_weights().strategic,
                scores.strategic_score.round_dp(4).normalize(),
                config.category_weights().soft_skill,
                scores.soft_skill_score.round_dp(4).normalize(),
                scores.combined_score.round_dp(4).normalize()
            ),
        );

        let rating_band = config
            .rating_band(scores.combined_score)
            .map(|key| key.description.clone());

        let Some(salary) = employee.annual_salary else {
            let warning = AuditWarning::for_employee(
                employee.id,
                WARNING_MISSING_SALARY,
                format!(
                    "User {} has no annual salary defined, skipping bonus calculation for them.",
                    employee.username
                ),
                "medium",
            );
            self.push_row(employee, scores, rating_band, Decimal::ZERO, Some(warning));
            return;
        };

        match bonus_amount(salary, self.total_salary, scores.combined_score, self.pool) {
            Some(bonus) => {
                self.record_step(
                    employee,
                    "bonus_share",
                    "Bonus Share",
                    serde_json::json!({
                        "annual_salary": salary.to_string(),
                        "total_salary": self.total_salary.to_string(),
                        "performance_rating": scores.combined_score.normalize().to_string(),
                        "total_bonus_pool": self.pool.to_string(),
                    }),
                    serde_json::json!({
                        "calculated_bonus": bonus.round_dp(2).to_string(),
                    }),
                    format!(
                        "({} / {}) x ({} x {}) = {}",
                        salary,
                        self.total_salary,
                        scores.combined_score.round_dp(4).normalize(),
                        self.pool,
                        bonus.round_dp(2)
                    ),
                );
                self.push_row(employee, scores, rating_band, bonus, None);
            }
            None => {
                let warning = AuditWarning::for_employee(
                    employee.id,
                    WARNING_BONUS_ARITHMETIC,
                    format!(
                        "Error calculating bonus for user {}: arithmetic overflow",
                        employee.username
                    ),
                    "high",
                );
                self.push_row(employee, scores, rating_band, Decimal::ZERO, Some(warning));
            }
        }
    }

    fn record_step(
        &mut self,
        employee: &Employee,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        self.steps.push(AuditStep {
            step_number: self.step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            employee_id: Some(employee.id),
            input,
            output,
            reasoning,
        });
        self.step_number += 1;
    }

    fn push_row(
        &mut self,
        employee: &Employee,
        scores: ScoreBreakdown,
        rating_band: Option<String>,
        bonus: Decimal,
        warning: Option<AuditWarning>,
    ) {
        if let Some(warning) = &warning {
            warn!(
                employee_id = employee.id,
                code = %warning.code,
                "{}",
                warning.message
            );
        }

        let combined_score = scores.combined_score.round_dp(2);
        self.results.push(EmployeeBonus {
            employee_id: employee.id,
            username: employee.username.clone(),
            display_name: employee.display_name(),
            department: employee.department.clone(),
            role: employee.role.clone(),
            annual_salary: employee.annual_salary,
            strategic_score: scores.strategic_score.round_dp(2),
            soft_skill_score: scores.soft_skill_score.round_dp(2),
            combined_score,
            performance_rating: combined_score,
            rating_band,
            calculated_bonus: bonus.round_dp(2),
            warning,
        });
    }

    fn finish(self, request: &BonusRequest, start_time: Instant) -> BonusRun {
        let total_allocated: Decimal = self.results.iter().map(|r| r.calculated_bonus).sum();
        let warnings: Vec<AuditWarning> = self
            .results
            .iter()
            .filter_map(|r| r.warning.clone())
            .collect();

        let totals = BonusTotals {
            employee_count: self.results.len(),
            warning_count: self.results.iter().filter(|r| r.has_warning()).count(),
            total_allocated,
            unallocated: self.pool - total_allocated,
        };

        BonusRun {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            period_under_review: request.period_under_review.clone(),
            total_bonus_pool: self.pool,
            total_salary: self.total_salary,
            results: self.results,
            totals,
            audit_trace: AuditTrace {
                steps: self.steps,
                warnings,
                duration_us: start_time.elapsed().as_micros() as u64,
            },
        }
    }
}

fn zero_scores() -> ScoreBreakdown {
    ScoreBreakdown {
        strategic_score: Decimal::ZERO,
        soft_skill_score: Decimal::ZERO,
        combined_score: Decimal::ZERO,
    }
}
