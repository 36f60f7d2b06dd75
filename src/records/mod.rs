//! Record access for the scoring core.
//!
//! The scoring and allocation functions never touch storage directly. They read
//! a snapshot through the [`RecordSource`] trait, which the in-memory
//! [`AppraisalStore`] implements.

mod snapshot;
mod store;

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AppraisalRecord, Employee, EmployeeId, ScoreCategory};

pub use snapshot::{OrgSnapshot, PillarRecord};
pub use store::AppraisalStore;

/// One record's contribution to a category score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedEntry {
    /// The category of the pillar the record belongs to.
    pub category: ScoreCategory,
    /// The record's weight (the denominator share).
    pub weight: Decimal,
    /// The record's weighted average (the numerator share).
    pub weighted_average: Decimal,
}

/// Read-only queries the scoring core needs from the record layer.
pub trait RecordSource: Send + Sync {
    /// Returns all active employees in a stable order.
    fn active_employees(&self) -> EngineResult<Vec<Employee>>;

    /// Looks up a single employee, active or not.
    fn employee(&self, employee_id: EmployeeId) -> EngineResult<Option<Employee>>;

    /// Returns one entry per strategic-target achievement recorded for the period.
    fn performance_entries(
        &self,
        employee_id: EmployeeId,
        period: &str,
    ) -> EngineResult<Vec<WeightedEntry>>;

    /// Returns one entry per soft-skill rating recorded for the period.
    fn soft_skill_entries(
        &self,
        employee_id: EmployeeId,
        period: &str,
    ) -> EngineResult<Vec<WeightedEntry>>;

    /// Returns the recorded appraisal details for the period, if any.
    ///
    /// Sources without appraisal records report none.
    fn appraisal_record(
        &self,
        _employee_id: EmployeeId,
        _period: &str,
    ) -> EngineResult<Option<AppraisalRecord>> {
        Ok(None)
    }
}
