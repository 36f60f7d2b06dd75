//! Appraisal structure: pillars, key result areas and performance targets.
//!
//! A [`Pillar`] groups [`KeyResultArea`]s, which in turn group
//! [`PerformanceTarget`]s. Each pillar carries the [`ScoreCategory`] that decides
//! which sub-score its records feed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pillar names whose records count towards the strategic-objective score.
pub const STRATEGIC_PILLAR_NAMES: [&str; 2] =
    ["SHARED PERFORMANCE AREAS", "ICT & BUSINESS PROCESSES"];

/// Pillar names whose records count towards the soft-skill score.
pub const SOFT_SKILL_PILLAR_NAMES: [&str; 1] = ["SOFT SKILLS"];

/// The scoring category a pillar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    /// Strategic objectives (Section B of the appraisal form).
    Strategic,
    /// Soft skills (Section C of the appraisal form).
    SoftSkill,
    /// Any other pillar; its records do not feed the performance rating.
    Other,
}

impl ScoreCategory {
    /// Derives the category from a pillar name.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use appraisal_engine::models::ScoreCategory;
    ///
    /// assert_eq!(ScoreCategory::from_pillar_name("SOFT SKILLS"), ScoreCategory::SoftSkill);
    /// assert_eq!(ScoreCategory::from_pillar_name("Soft Skills"), ScoreCategory::Other);
    /// ```
    pub fn from_pillar_name(name: &str) -> Self {
        if STRATEGIC_PILLAR_NAMES.contains(&name) {
            ScoreCategory::Strategic
        } else if SOFT_SKILL_PILLAR_NAMES.contains(&name) {
            ScoreCategory::SoftSkill
        } else {
            ScoreCategory::Other
        }
    }
}

/// A top-level grouping of performance areas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    /// Unique identifier for the pillar.
    pub id: u64,
    /// The pillar name (unique across the organization).
    pub name: String,
    /// The scoring category, fixed when the pillar is created.
    pub category: ScoreCategory,
}

impl Pillar {
    /// Creates a pillar whose category is derived from its name.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        let name = name.into();
        let category = ScoreCategory::from_pillar_name(&name);
        Self { id, name, category }
    }

    /// Creates a pillar with an explicit category tag.
    pub fn with_category(id: u64, name: impl Into<String>, category: ScoreCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
        }
    }
}

/// A key result area under a pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyResultArea {
    /// Unique identifier for the KRA.
    pub id: u64,
    /// The pillar this KRA belongs to.
    pub pillar_id: u64,
    /// The KRA name (unique within its pillar).
    pub name: String,
    /// Detailed description, mostly used for soft skills.
    #[serde(default)]
    pub description: Option<String>,
}

/// A target an employee's achievement is measured against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceTarget {
    /// Unique identifier for the target.
    pub id: u64,
    /// The KRA this target belongs to.
    pub kra_id: u64,
    /// What the target asks for (e.g. "Recruit 40 new members").
    pub description: String,
    /// The numeric target figure.
    #[serde(default)]
    pub target_value: Option<i64>,
    /// The annual target, which may differ from `target_value`.
    #[serde(default)]
    pub annual_target: Option<i64>,
    /// The relative importance of this target.
    pub weight: u32,
}

impl PerformanceTarget {
    /// Returns the fraction of the target an achievement represents.
    ///
    /// Returns zero when the target has no value or a zero value.
    ///
    /// # Examples
    ///
    /// ```
    /// use appraisal_engine::models::PerformanceTarget;
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
    /// assert_eq!(target.percentage_achieved(30), Decimal::new(75, 2));
    /// ```
    pub fn percentage_achieved(&self, actual_achievement: i64) -> Decimal {
        match self.target_value {
            Some(value) if value != 0 => Decimal::from(actual_achievement) / Decimal::from(value),
            _ => Decimal::ZERO,
        }
    }

    /// Returns the weight as a decimal for aggregation.
    pub fn weight_decimal(&self) -> Decimal {
        Decimal::from(self.weight)
    }
}
