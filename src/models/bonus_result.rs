//! Bonus allocation result models.
//!
//! This module contains the [`BonusRun`] type and its associated structures that
//! capture all outputs of one allocation: per-employee rows, totals, and the
//! audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EmployeeId;

/// Warning code for an employee without an annual salary.
pub const WARNING_MISSING_SALARY: &str = "MISSING_SALARY";
/// Warning code for an employee whose records could not be read.
pub const WARNING_SCORES_UNAVAILABLE: &str = "SCORES_UNAVAILABLE";
/// Warning code for an arithmetic failure while computing one bonus.
pub const WARNING_BONUS_ARITHMETIC: &str = "BONUS_ARITHMETIC";

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The employee the step was computed for, if any.
    pub employee_id: Option<EmployeeId>,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during allocation.
///
/// Warnings flag rows whose bonus was forced to zero without aborting the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
    /// The employee the warning concerns.
    pub employee_id: Option<EmployeeId>,
}

impl AuditWarning {
    /// Creates a warning for a specific employee.
    pub fn for_employee(
        employee_id: EmployeeId,
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
            employee_id: Some(employee_id),
        }
    }
}

/// The complete audit trace for an allocation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during the run.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The bonus breakdown for one employee.
///
/// All scores and the bonus are rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeBonus {
    /// The employee identifier.
    pub employee_id: EmployeeId,
    /// The employee's login name.
    pub username: String,
    /// Full name, or username when no name is recorded.
    pub display_name: String,
    /// Department name, if assigned.
    pub department: Option<String>,
    /// Role name, if assigned.
    pub role: Option<String>,
    /// Annual salary used for the salary share.
    pub annual_salary: Option<Decimal>,
    /// Strategic-objective score.
    pub strategic_score: Decimal,
    /// Soft-skill score.
    pub soft_skill_score: Decimal,
    /// Category-weighted combination of both scores.
    pub combined_score: Decimal,
    /// The multiplier applied to the employee's share of the pool.
    pub performance_rating: Decimal,
    /// Description of the rating band, if one matched.
    pub rating_band: Option<String>,
    /// The bonus awarded.
    pub calculated_bonus: Decimal,
    /// Why the bonus was forced to zero, if it was.
    pub warning: Option<AuditWarning>,
}

impl EmployeeBonus {
    /// Returns true if the row carries a warning.
    pub fn has_warning(&self) -> bool {
        self.warning.is_some()
    }
}

/// Aggregated totals for an allocation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTotals {
    /// Number of active employees in the run.
    pub employee_count: usize,
    /// Number of rows carrying a warning.
    pub warning_count: usize,
    /// Sum of the awarded bonuses.
    pub total_allocated: Decimal,
    /// Pool left after allocation; negative when ratings above 1.0 over-allocate.
    pub unallocated: Decimal,
}

/// The complete result of one bonus allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusRun {
    /// Unique identifier for this run.
    pub calculation_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// The review period the run was made for.
    pub period_under_review: String,
    /// The pool that was distributed.
    pub total_bonus_pool: Decimal,
    /// Sum of active staff annual salaries.
    pub total_salary: Decimal,
    /// One row per active employee, in fetch order.
    pub results: Vec<EmployeeBonus>,
    /// Aggregated totals.
    pub totals: BonusTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
