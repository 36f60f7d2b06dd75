//! Overall appraisal and rating key models.
//!
//! This module contains the [`OverallAppraisal`] summary of an employee's review
//! period and the [`RatingKey`] bands used to describe a rating in words.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// A band of the rating scale, expressed in percentage points.
///
/// # Example
///
/// ```
/// use appraisal_engine::models::RatingKey;
///
/// let key = RatingKey {
///     point_scale_min: 80,
///     point_scale_max: 100,
///     description: "Exceeds expectations".to_string(),
///     associated_weight: None,
/// };
/// assert!(key.contains(85));
/// assert!(!key.contains(79));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingKey {
    /// Lowest point of the band (inclusive).
    pub point_scale_min: i64,
    /// Highest point of the band (inclusive).
    pub point_scale_max: i64,
    /// What a rating in this band means.
    pub description: String,
    /// Weight associated with the band, used on soft-skill forms.
    #[serde(default)]
    pub associated_weight: Option<u32>,
}

impl RatingKey {
    /// Returns true if the given points fall within this band.
    pub fn contains(&self, points: i64) -> bool {
        points >= self.point_scale_min && points <= self.point_scale_max
    }
}

/// The summarized appraisal of one employee for one review period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallAppraisal {
    /// The employee being appraised.
    pub employee_id: EmployeeId,
    /// Opaque review period token.
    pub period_under_review: String,
    /// Strategic-objective score (Section B).
    pub strategic_objectives_score: Decimal,
    /// Soft-skill score (Section C).
    pub soft_skills_score: Decimal,
    /// Sum of the two section scores.
    pub total_performance_rating: Decimal,
    /// Description of the weighted rating from the rating keys, if one matched.
    #[serde(default)]
    pub rating_band: Option<String>,
    /// The date the appraisal was made.
    pub date_of_appraisal: NaiveDate,
    /// The supervisor who conducted the appraisal.
    #[serde(default)]
    pub appraiser_id: Option<EmployeeId>,
    /// Final comments by role.
    #[serde(default)]
    pub comments: AppraisalComments,
}

/// Final comments attached to an overall appraisal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppraisalComments {
    /// Comments by the appraisee.
    pub appraisee: Option<String>,
    /// Comments by the appraiser.
    pub appraiser: Option<String>,
    /// Comments by the head of department.
    pub hod: Option<String>,
    /// Comments by human resources.
    pub hr: Option<String>,
    /// Comments by the chief executive.
    pub ceo: Option<String>,
}

/// The recorded details of an appraisal meeting.
///
/// At most one exists per employee and review period. The scores are never
/// stored here; they are recomputed from the underlying records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppraisalRecord {
    /// The employee being appraised.
    pub employee_id: EmployeeId,
    /// Opaque review period token.
    pub period_under_review: String,
    /// The date the appraisal was made.
    pub date_of_appraisal: NaiveDate,
    /// The supervisor who conducted the appraisal.
    #[serde(default)]
    pub appraiser_id: Option<EmployeeId>,
    /// Final comments by role.
    #[serde(default)]
    pub comments: AppraisalComments,
}

impl OverallAppraisal {
    /// Creates an appraisal from the two section scores.
    ///
    /// The total is the plain sum of both sections.
    pub fn new(
        employee_id: EmployeeId,
        period_under_review: impl Into<String>,
        strategic_objectives_score: Decimal,
        soft_skills_score: Decimal,
        date_of_appraisal: NaiveDate,
    ) -> Self {
        Self {
            employee_id,
            period_under_review: period_under_review.into(),
            strategic_objectives_score,
            soft_skills_score,
            total_performance_rating: strategic_objectives_score + soft_skills_score,
            rating_band: None,
            date_of_appraisal,
            appraiser_id: None,
            comments: AppraisalComments::default(),
        }
    }

    /// Takes the date, appraiser and comments from a recorded appraisal.
    pub fn with_record(mut self, record: AppraisalRecord) -> Self {
        self.date_of_appraisal = record.date_of_appraisal;
        self.appraiser_id = record.appraiser_id;
        self.comments = record.comments;
        self
    }
}
