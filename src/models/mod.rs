//! Core data models for the Appraisal Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod appraisal;
mod bonus_result;
mod employee;
mod performance;
mod structure;

pub use appraisal::{AppraisalComments, AppraisalRecord, OverallAppraisal, RatingKey};
pub use bonus_result::{
    AuditStep, AuditTrace, AuditWarning, BonusRun, BonusTotals, EmployeeBonus,
    WARNING_BONUS_ARITHMETIC, WARNING_MISSING_SALARY, WARNING_SCORES_UNAVAILABLE,
};
pub use employee::{Department, Employee, EmployeeId, Role};
pub use performance::{EmployeePerformance, SoftSkillRating};
pub use structure::{
    KeyResultArea, PerformanceTarget, Pillar, SOFT_SKILL_PILLAR_NAMES, STRATEGIC_PILLAR_NAMES,
    ScoreCategory,
};
