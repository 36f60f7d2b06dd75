//! Employee model and organizational structure.
//!
//! This module defines the Employee struct together with the Department and
//! Role records that employees reference.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of an employee record.
pub type EmployeeId = u64;

/// A department within the organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: u64,
    /// The department name (unique across the organization).
    pub name: String,
}

/// A role an employee can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique identifier for the role.
    pub id: u64,
    /// The role name (unique across the organization).
    pub name: String,
}

fn default_active() -> bool {
    true
}

/// Represents an employee subject to appraisal and bonus allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: EmployeeId,
    /// Login name of the employee.
    pub username: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Contact e-mail address.
    #[serde(default)]
    pub email: String,
    /// Payroll number (PF.NO in the appraisal form).
    #[serde(default)]
    pub employee_number: Option<String>,
    /// Annual salary used as the bonus share basis.
    #[serde(default)]
    pub annual_salary: Option<Decimal>,
    /// Name of the department the employee belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// Name of the role the employee holds.
    #[serde(default)]
    pub role: Option<String>,
    /// Whether the employee participates in appraisal runs.
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Employee {
    /// Returns the full name of the employee, or an empty string if no name is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use appraisal_engine::models::Employee;
    ///
    /// let employee = Employee {
    ///     id: 1,
    ///     username: "jdoe".to_string(),
    ///     first_name: "Jane".to_string(),
    ///     last_name: "Doe".to_string(),
    ///     email: "jane@example.com".to_string(),
    ///     employee_number: None,
    ///     annual_salary: None,
    ///     department: None,
    ///     role: None,
    ///     active: true,
    /// };
    /// assert_eq!(employee.full_name(), "Jane Doe");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Returns the name shown on reports: the full name, falling back to the username.
    pub fn display_name(&self) -> String {
        let full_name = self.full_name();
        if full_name.is_empty() {
            self.username.clone()
        } else {
            full_name
        }
    }

    /// Returns the salary used when summing the organization's salary basis.
    ///
    /// A missing salary counts as zero.
    pub fn salary_basis(&self) -> Decimal {
        self.annual_salary.unwrap_or(Decimal::ZERO)
    }
}
