//! Performance score aggregation.
//!
//! This module turns an employee's recorded achievements and soft-skill ratings
//! for a review period into two category scores and their weighted combination.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{AppraisalConfig, CategoryWeights};
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeId, OverallAppraisal, ScoreCategory};
use crate::records::{RecordSource, WeightedEntry};

/// The scores of one employee for one review period, at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Weighted mean of strategic-target achievements.
    pub strategic_score: Decimal,
    /// Weighted mean of soft-skill ratings.
    pub soft_skill_score: Decimal,
    /// Category-weighted combination of both scores.
    pub combined_score: Decimal,
}

/// Computes the score of one category as `sum(weighted_average) / sum(weight)`.
///
/// Entries of other categories are ignored. A category with no entries, or
/// whose weights sum to zero, scores 0.
///
/// # Errors
///
/// Returns `CalculationError` if the sums overflow.
///
/// # Examples
///
/// ```
/// use appraisal_engine::calculation::category_score;
/// use appraisal_engine::models::ScoreCategory;
/// use appraisal_engine::records::WeightedEntry;
/// use rust_decimal::Decimal;
///
/// let entries = [
///     WeightedEntry {
///         category: ScoreCategory::Strategic,
///         weight: Decimal::from(10),
///         weighted_average: Decimal::from(10),
///     },
///     WeightedEntry {
///         category: ScoreCategory::Strategic,
///         weight: Decimal::from(10),
///         weighted_average: Decimal::from(5),
///     },
/// ];
/// let score = category_score(&entries, ScoreCategory::Strategic).unwrap();
/// assert_eq!(score, Decimal::new(75, 2));
/// ```
pub fn category_score(entries: &[WeightedEntry], category: ScoreCategory) -> EngineResult<Decimal> {
    let mut total_weight = Decimal::ZERO;
    let mut total_weighted = Decimal::ZERO;

    for entry in entries.iter().filter(|e| e.category == category) {
        total_weight = total_weight
            .checked_add(entry.weight)
            .ok_or_else(|| overflow("category weight sum"))?;
        total_weighted = total_weighted
            .checked_add(entry.weighted_average)
            .ok_or_else(|| overflow("category weighted average sum"))?;
    }

    if total_weight > Decimal::ZERO {
        total_weighted
            .checked_div(total_weight)
            .ok_or_else(|| overflow("category score"))
    } else {
        Ok(Decimal::ZERO)
    }
}

/// Combines the two category scores with the configured weights.
///
/// # Examples
///
/// ```
/// use appraisal_engine::calculation::combine_scores;
/// use appraisal_engine::config::CategoryWeights;
/// use rust_decimal::Decimal;
///
/// let combined = combine_scores(Decimal::ONE, Decimal::new(5, 1), &CategoryWeights::default());
/// assert_eq!(combined, Decimal::new(85, 2));
/// ```
pub fn combine_scores(strategic: Decimal, soft_skill: Decimal, weights: &CategoryWeights) -> Decimal {
    weights.strategic * strategic + weights.soft_skill * soft_skill
}

/// Computes the full score breakdown of one employee for one period.
///
/// # Errors
///
/// Returns any error from the record source, or `CalculationError` if the
/// category sums overflow.
pub fn aggregate_scores<S: RecordSource + ?Sized>(
    source: &S,
    employee_id: EmployeeId,
    period: &str,
    weights: &CategoryWeights,
) -> EngineResult<ScoreBreakdown> {
    let performances = source.performance_entries(employee_id, period)?;
    let soft_skills = source.soft_skill_entries(employee_id, period)?;

    let strategic_score = category_score(&performances, ScoreCategory::Strategic)?;
    let soft_skill_score = category_score(&soft_skills, ScoreCategory::SoftSkill)?;

    Ok(ScoreBreakdown {
        strategic_score,
        soft_skill_score,
        combined_score: combine_scores(strategic_score, soft_skill_score, weights),
    })
}

/// Builds the overall appraisal of an employee for a period.
///
/// The section scores are rounded to two decimal places and the rating band is
/// looked up from the weighted combined score. When the source holds an
/// appraisal record for the period, its date, appraiser and comments are used;
/// otherwise `date_of_appraisal` is used and the rest stays empty.
///
/// # Errors
///
/// Returns `RecordNotFound` for an unknown employee, plus any error from
/// [`aggregate_scores`].
pub fn appraise_employee<S: RecordSource + ?Sized>(
    source: &S,
    employee_id: EmployeeId,
    period: &str,
    config: &AppraisalConfig,
    date_of_appraisal: NaiveDate,
) -> EngineResult<OverallAppraisal> {
    if source.employee(employee_id)?.is_none() {
        return Err(EngineError::RecordNotFound {
            entity: "employee".to_string(),
            id: employee_id.to_string(),
        });
    }

    let scores = aggregate_scores(source, employee_id, period, config.category_weights())?;

    let mut appraisal = OverallAppraisal::new(
        employee_id,
        period,
        scores.strategic_score.round_dp(2),
        scores.soft_skill_score.round_dp(2),
        date_of_appraisal,
    );
    appraisal.rating_band = config
        .rating_band(scores.combined_score)
        .map(|key| key.description.clone());

    if let Some(record) = source.appraisal_record(employee_id, period)? {
        appraisal = appraisal.with_record(record);
    }

    Ok(appraisal)
}

fn overflow(what: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("arithmetic overflow computing {}", what),
    }
}
