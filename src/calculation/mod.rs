//! Calculation logic for the Appraisal Engine.
//!
//! This module contains score aggregation, which turns an employee's recorded
//! achievements and soft-skill ratings into a performance rating, and bonus
//! allocation, which distributes a bonus pool by salary share and rating.

mod bonus_allocator;
mod score_aggregator;

pub use bonus_allocator::{BonusRequest, allocate_bonus, bonus_amount, sum_salaries};
pub use score_aggregator::{
    ScoreBreakdown, aggregate_scores, appraise_employee, category_score, combine_scores,
};
