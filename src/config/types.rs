//! Configuration types for appraisal scoring.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::RatingKey;

/// How much each scoring category contributes to the performance rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWeights {
    /// Contribution of the strategic-objective score.
    pub strategic: Decimal,
    /// Contribution of the soft-skill score.
    pub soft_skill: Decimal,
}

impl Default for CategoryWeights {
    /// The 70/30 split between strategic objectives and soft skills.
    fn default() -> Self {
        Self {
            strategic: Decimal::new(70, 2),
            soft_skill: Decimal::new(30, 2),
        }
    }
}

impl CategoryWeights {
    /// Creates validated category weights.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCategoryWeights` if either weight lies outside `[0, 1]`
    /// or the two do not sum to exactly 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use appraisal_engine::config::CategoryWeights;
    /// use rust_decimal::Decimal;
    ///
    /// assert!(CategoryWeights::new(Decimal::new(6, 1), Decimal::new(4, 1)).is_ok());
    /// assert!(CategoryWeights::new(Decimal::new(6, 1), Decimal::new(5, 1)).is_err());
    /// ```
    pub fn new(strategic: Decimal, soft_skill: Decimal) -> EngineResult<Self> {
        let weights = Self {
            strategic,
            soft_skill,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Checks that the weights form a complete split of the rating.
    pub fn validate(&self) -> EngineResult<()> {
        let in_range = |w: Decimal| w >= Decimal::ZERO && w <= Decimal::ONE;
        if !in_range(self.strategic) || !in_range(self.soft_skill) {
            return Err(self.invalid("each weight must lie between 0 and 1"));
        }
        if self.strategic + self.soft_skill != Decimal::ONE {
            return Err(self.invalid("weights must sum to 1"));
        }
        Ok(())
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidCategoryWeights {
            strategic: self.strategic,
            soft_skill: self.soft_skill,
            message: message.to_string(),
        }
    }
}

/// Scoring configuration file structure (`scoring.yaml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    /// Category contributions to the performance rating.
    #[serde(default)]
    pub category_weights: CategoryWeights,
}

/// Rating keys configuration file structure (`rating_keys.yaml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatingKeysConfig {
    /// The rating bands.
    #[serde(default)]
    pub rating_keys: Vec<RatingKey>,
}

/// The complete appraisal configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct AppraisalConfig {
    /// Category contributions, validated to sum to 1.
    category_weights: CategoryWeights,
    /// Rating bands sorted by lower bound.
    rating_keys: Vec<RatingKey>,
}

impl AppraisalConfig {
    /// Creates a new AppraisalConfig from its component parts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCategoryWeights` when the weights do not validate.
    pub fn new(category_weights: CategoryWeights, rating_keys: Vec<RatingKey>) -> EngineResult<Self> {
        category_weights.validate()?;
        let mut sorted_keys = rating_keys;
        sorted_keys.sort_by_key(|k| k.point_scale_min);
        Ok(Self {
            category_weights,
            rating_keys: sorted_keys,
        })
    }

    /// Returns the category weights.
    pub fn category_weights(&self) -> &CategoryWeights {
        &self.category_weights
    }

    /// Returns the rating bands, lowest first.
    pub fn rating_keys(&self) -> &[RatingKey] {
        &self.rating_keys
    }

    /// Finds the rating band for a rating expressed as a fraction (1.0 = 100 points).
    ///
    /// The rating is converted to whole points with half-even rounding.
    pub fn rating_band(&self, rating: Decimal) -> Option<&RatingKey> {
        let points = rating.checked_mul(Decimal::ONE_HUNDRED)?.round().to_i64()?;
        self.rating_keys.iter().find(|key| key.contains(points))
    }
}
