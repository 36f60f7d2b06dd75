//! Request types for the Appraisal Engine API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::BonusRequest;
use crate::error::{EngineError, EngineResult};

/// Request body for the `/bonus-calculation` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusCalculationRequest {
    /// The amount to distribute; must be greater than zero.
    pub total_bonus_pool: Decimal,
    /// Opaque review period token, e.g. "Jan-Jun 2025".
    pub period_under_review: String,
}

impl BonusCalculationRequest {
    /// Validates the request and converts it into an allocation request.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBonusPool` when the pool is zero or negative.
    pub fn into_bonus_request(self) -> EngineResult<BonusRequest> {
        if self.total_bonus_pool <= Decimal::ZERO {
            return Err(EngineError::InvalidBonusPool {
                amount: self.total_bonus_pool,
            });
        }
        Ok(BonusRequest {
            total_bonus_pool: self.total_bonus_pool,
            period_under_review: self.period_under_review,
        })
    }
}

/// Query string of the `/employees/{id}/appraisal` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppraisalQuery {
    /// The review period to appraise.
    pub period: String,
}
