//! In-memory record store.
//!
//! [`AppraisalStore`] holds an organization's records and enforces the
//! integrity rules of the record layer on every write: unique names and keys,
//! existing references, positive target weights, and pillar tags that agree
//! with the fixed pillar name sets.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AppraisalRecord, Department, Employee, EmployeeId, EmployeePerformance, KeyResultArea,
    PerformanceTarget, Pillar, Role, ScoreCategory, SoftSkillRating,
};

use super::{OrgSnapshot, RecordSource, WeightedEntry};

/// Organization records held in memory.
///
/// Employees keep their insertion order, which is the order allocation rows
/// are reported in.
///
/// # Example
///
/// ```
/// use appraisal_engine::models::{Employee, Pillar};
/// use appraisal_engine::records::{AppraisalStore, RecordSource};
///
/// let mut store = AppraisalStore::new();
/// store.add_pillar(Pillar::new(1, "SOFT SKILLS")).unwrap();
/// store
///     .add_employee(Employee {
///         id: 1,
///         username: "jdoe".to_string(),
///         first_name: "Jane".to_string(),
///         last_name: "Doe".to_string(),
///         email: String::new(),
///         employee_number: None,
///         annual_salary: None,
///         department: None,
///         role: None,
///         active: true,
///     })
///     .unwrap();
/// assert_eq!(store.active_employees().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppraisalStore {
    departments: Vec<Department>,
    roles: Vec<Role>,
    employees: Vec<Employee>,
    pillars: HashMap<u64, Pillar>,
    kras: HashMap<u64, KeyResultArea>,
    targets: HashMap<u64, PerformanceTarget>,
    performances: Vec<EmployeePerformance>,
    soft_skill_ratings: Vec<SoftSkillRating>,
    appraisals: Vec<AppraisalRecord>,
}

fn duplicate(entity: &str, key: impl ToString) -> EngineError {
    EngineError::DuplicateRecord {
        entity: entity.to_string(),
        key: key.to_string(),
    }
}

fn not_found(entity: &str, id: impl ToString) -> EngineError {
    EngineError::RecordNotFound {
        entity: entity.to_string(),
        id: id.to_string(),
    }
}

impl AppraisalStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store by replaying every record of a snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first integrity violation found in the snapshot.
    pub fn from_snapshot(snapshot: OrgSnapshot) -> EngineResult<Self> {
        let mut store = Self::new();

        for department in snapshot.departments {
            store.add_department(department)?;
        }
        for role in snapshot.roles {
            store.add_role(role)?;
        }
        for employee in snapshot.employees {
            store.add_employee(employee)?;
        }
        for pillar in snapshot.pillars {
            store.add_pillar(pillar.into())?;
        }
        for kra in snapshot.kras {
            store.add_kra(kra)?;
        }
        for target in snapshot.targets {
            store.add_target(target)?;
        }
        for performance in snapshot.performances {
            store.record_performance(performance)?;
        }
        for rating in snapshot.soft_skill_ratings {
            store.record_soft_skill_rating(rating)?;
        }
        for appraisal in snapshot.appraisals {
            store.record_appraisal(appraisal)?;
        }

        debug!(
            employees = store.employees.len(),
            performances = store.performances.len(),
            soft_skill_ratings = store.soft_skill_ratings.len(),
            appraisals = store.appraisals.len(),
            "Snapshot loaded"
        );

        Ok(store)
    }

    /// Loads a snapshot file (YAML or JSON) into a new store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file cannot be read, `ConfigParseError`
    /// if it cannot be parsed, or any integrity violation in its records.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let snapshot: OrgSnapshot =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Self::from_snapshot(snapshot)
    }

    /// Adds a department with a unique id and name.
    pub fn add_department(&mut self, department: Department) -> EngineResult<()> {
        if self
            .departments
            .iter()
            .any(|d| d.id == department.id || d.name == department.name)
        {
            return Err(duplicate("department", &department.name));
        }
        self.departments.push(department);
        Ok(())
    }

    /// Adds a role with a unique id and name.
    pub fn add_role(&mut self, role: Role) -> EngineResult<()> {
        if self
            .roles
            .iter()
            .any(|r| r.id == role.id || r.name == role.name)
        {
            return Err(duplicate("role", &role.name));
        }
        self.roles.push(role);
        Ok(())
    }

    /// Adds an employee.
    ///
    /// The id and username must be unique, a referenced department or role must
    /// exist, and a salary, when present, must not be negative.
    pub fn add_employee(&mut self, employee: Employee) -> EngineResult<()> {
        if self
            .employees
            .iter()
            .any(|e| e.id == employee.id || e.username == employee.username)
        {
            return Err(duplicate("employee", &employee.username));
        }
        if let Some(department) = &employee.department {
            if !self.departments.iter().any(|d| &d.name == department) {
                return Err(not_found("department", department));
            }
        }
        if let Some(role) = &employee.role {
            if !self.roles.iter().any(|r| &r.name == role) {
                return Err(not_found("role", role));
            }
        }
        if employee.annual_salary.is_some_and(|s| s < Decimal::ZERO) {
            return Err(EngineError::InvalidRecord {
                entity: "employee".to_string(),
                message: format!("annual salary of '{}' is negative", employee.username),
            });
        }
        self.employees.push(employee);
        Ok(())
    }

    /// Activates or deactivates an employee.
    pub fn set_employee_active(&mut self, employee_id: EmployeeId, active: bool) -> EngineResult<()> {
        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.id == employee_id)
            .ok_or_else(|| not_found("employee", employee_id))?;
        employee.active = active;
        Ok(())
    }

    /// Adds a pillar with a unique id and name.
    ///
    /// A pillar named in the strategic or soft-skill name set must carry that
    /// set's category. Other names may be tagged freely.
    pub fn add_pillar(&mut self, pillar: Pillar) -> EngineResult<()> {
        if self.pillars.contains_key(&pillar.id)
            || self.pillars.values().any(|p| p.name == pillar.name)
        {
            return Err(duplicate("pillar", &pillar.name));
        }
        let named = ScoreCategory::from_pillar_name(&pillar.name);
        if named != ScoreCategory::Other && pillar.category != named {
            return Err(EngineError::InvalidRecord {
                entity: "pillar".to_string(),
                message: format!(
                    "'{}' is a {:?} pillar and cannot be tagged {:?}",
                    pillar.name, named, pillar.category
                ),
            });
        }
        self.pillars.insert(pillar.id, pillar);
        Ok(())
    }

    /// Adds a KRA under an existing pillar; names are unique per pillar.
    pub fn add_kra(&mut self, kra: KeyResultArea) -> EngineResult<()> {
        if !self.pillars.contains_key(&kra.pillar_id) {
            return Err(not_found("pillar", kra.pillar_id));
        }
        if self.kras.contains_key(&kra.id)
            || self
                .kras
                .values()
                .any(|k| k.pillar_id == kra.pillar_id && k.name == kra.name)
        {
            return Err(duplicate("key result area", &kra.name));
        }
        self.kras.insert(kra.id, kra);
        Ok(())
    }

    /// Adds a target under an existing KRA. The weight must be positive.
    pub fn add_target(&mut self, target: PerformanceTarget) -> EngineResult<()> {
        if !self.kras.contains_key(&target.kra_id) {
            return Err(not_found("key result area", target.kra_id));
        }
        if target.weight == 0 {
            return Err(EngineError::InvalidRecord {
                entity: "performance target".to_string(),
                message: format!("target {} must have a positive weight", target.id),
            });
        }
        if self.targets.contains_key(&target.id) {
            return Err(duplicate("performance target", target.id));
        }
        self.targets.insert(target.id, target);
        Ok(())
    }

    /// Records an achievement; one per (employee, target, period).
    pub fn record_performance(&mut self, performance: EmployeePerformance) -> EngineResult<()> {
        self.require_employee(performance.employee_id)?;
        if !self.targets.contains_key(&performance.target_id) {
            return Err(not_found("performance target", performance.target_id));
        }
        if self.performances.iter().any(|p| {
            p.employee_id == performance.employee_id
                && p.target_id == performance.target_id
                && p.period_under_review == performance.period_under_review
        }) {
            return Err(duplicate(
                "employee performance",
                format!(
                    "employee {} target {} period '{}'",
                    performance.employee_id, performance.target_id, performance.period_under_review
                ),
            ));
        }
        self.performances.push(performance);
        Ok(())
    }

    /// Records a soft-skill rating; one per (employee, KRA, period).
    pub fn record_soft_skill_rating(&mut self, rating: SoftSkillRating) -> EngineResult<()> {
        self.require_employee(rating.employee_id)?;
        if !self.kras.contains_key(&rating.kra_id) {
            return Err(not_found("key result area", rating.kra_id));
        }
        if self.soft_skill_ratings.iter().any(|r| {
            r.employee_id == rating.employee_id
                && r.kra_id == rating.kra_id
                && r.period_under_review == rating.period_under_review
        }) {
            return Err(duplicate(
                "soft skill rating",
                format!(
                    "employee {} kra {} period '{}'",
                    rating.employee_id, rating.kra_id, rating.period_under_review
                ),
            ));
        }
        if rating.rating < Decimal::ZERO || rating.rating > Decimal::ONE_HUNDRED {
            warn!(
                employee_id = rating.employee_id,
                kra_id = rating.kra_id,
                rating = %rating.rating,
                "Soft skill rating outside the 0-100 scale"
            );
        }
        self.soft_skill_ratings.push(rating);
        Ok(())
    }

    /// Records the details of an appraisal; one per (employee, period).
    ///
    /// The appraiser, when given, must be a known employee.
    pub fn record_appraisal(&mut self, appraisal: AppraisalRecord) -> EngineResult<()> {
        self.require_employee(appraisal.employee_id)?;
        if let Some(appraiser_id) = appraisal.appraiser_id {
            self.require_employee(appraiser_id)?;
        }
        if self.appraisals.iter().any(|a| {
            a.employee_id == appraisal.employee_id
                && a.period_under_review == appraisal.period_under_review
        }) {
            return Err(duplicate(
                "appraisal",
                format!(
                    "employee {} period '{}'",
                    appraisal.employee_id, appraisal.period_under_review
                ),
            ));
        }
        self.appraisals.push(appraisal);
        Ok(())
    }

    fn require_employee(&self, employee_id: EmployeeId) -> EngineResult<()> {
        if self.employees.iter().any(|e| e.id == employee_id) {
            Ok(())
        } else {
            Err(not_found("employee", employee_id))
        }
    }

    fn pillar_of_kra(&self, kra_id: u64) -> EngineResult<&Pillar> {
        let kra = self
            .kras
            .get(&kra_id)
            .ok_or_else(|| not_found("key result area", kra_id))?;
        self.pillars
            .get(&kra.pillar_id)
            .ok_or_else(|| not_found("pillar", kra.pillar_id))
    }
}

impl RecordSource for AppraisalStore {
    fn active_employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.employees.iter().filter(|e| e.active).cloned().collect())
    }

    fn employee(&self, employee_id: EmployeeId) -> EngineResult<Option<Employee>> {
        Ok(self.employees.iter().find(|e| e.id == employee_id).cloned())
    }

    fn performance_entries(
        &self,
        employee_id: EmployeeId,
        period: &str,
    ) -> EngineResult<Vec<WeightedEntry>> {
        self.performances
            .iter()
            .filter(|p| p.employee_id == employee_id && p.period_under_review == period)
            .map(|p| -> EngineResult<WeightedEntry> {
                let target = self
                    .targets
                    .get(&p.target_id)
                    .ok_or_else(|| not_found("performance target", p.target_id))?;
                let pillar = self.pillar_of_kra(target.kra_id)?;
                Ok(WeightedEntry {
                    category: pillar.category,
                    weight: target.weight_decimal(),
                    weighted_average: p.weighted_average(target),
                })
            })
            .collect()
    }

    fn soft_skill_entries(
        &self,
        employee_id: EmployeeId,
        period: &str,
    ) -> EngineResult<Vec<WeightedEntry>> {
        self.soft_skill_ratings
            .iter()
            .filter(|r| r.employee_id == employee_id && r.period_under_review == period)
            .map(|r| -> EngineResult<WeightedEntry> {
                let pillar = self.pillar_of_kra(r.kra_id)?;
                let weighted_average =
                    r.weighted_average()
                        .ok_or_else(|| EngineError::CalculationError {
                            message: format!(
                                "arithmetic overflow weighting soft skill rating {} for kra {}",
                                r.rating, r.kra_id
                            ),
                        })?;
                Ok(WeightedEntry {
                    category: pillar.category,
                    weight: r.weight_decimal(),
                    weighted_average,
                })
            })
            .collect()
    }

    fn appraisal_record(
        &self,
        employee_id: EmployeeId,
        period: &str,
    ) -> EngineResult<Option<AppraisalRecord>> {
        Ok(self
            .appraisals
            .iter()
            .find(|a| a.employee_id == employee_id && a.period_under_review == period)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppraisalComments;
    use chrono::NaiveDate;
    use std::str::FromStr;

    const PERIOD: &str = "Jan-Jun 2025";

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_employee(id: EmployeeId, username: &str) -> Employee {
        Employee {
            id,
            username: username.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: format!("{}@example.com", username),
            employee_number: None,
            annual_salary: Some(dec("40000")),
            department: None,
            role: None,
            active: true,
        }
    }

    fn create_store() -> AppraisalStore {
        let mut store = AppraisalStore::new();
        store
            .add_department(Department {
                id: 1,
                name: "Credit".to_string(),
            })
            .unwrap();
        store.add_employee(create_employee(1, "amina")).unwrap();
        store.add_employee(create_employee(2, "brian")).unwrap();
        store.add_pillar(Pillar::new(1, "SHARED PERFORMANCE AREAS")).unwrap();
        store.add_pillar(Pillar::new(2, "SOFT SKILLS")).unwrap();
        store
            .add_kra(KeyResultArea {
                id: 1,
                pillar_id: 1,
                name: "Membership".to_string(),
                description: None,
            })
            .unwrap();
        store
            .add_kra(KeyResultArea {
                id: 2,
                pillar_id: 2,
                name: "Teamwork".to_string(),
                description: Some("Works well with others".to_string()),
            })
            .unwrap();
        store
            .add_target(PerformanceTarget {
                id: 1,
                kra_id: 1,
                description: "Recruit 40 new members".to_string(),
                target_value: Some(40),
                annual_target: Some(80),
                weight: 10,
            })
            .unwrap();
        store
    }

    fn performance(employee_id: EmployeeId, actual: i64, period: &str) -> EmployeePerformance {
        EmployeePerformance {
            employee_id,
            target_id: 1,
            period_under_review: period.to_string(),
            actual_achievement: actual,
            actual_rating: None,
            comments: None,
        }
    }

    fn rating(employee_id: EmployeeId, value: &str, weight: u32) -> SoftSkillRating {
        SoftSkillRating {
            employee_id,
            kra_id: 2,
            period_under_review: PERIOD.to_string(),
            rating: dec(value),
            weight,
            comments: None,
        }
    }

    fn appraisal(employee_id: EmployeeId, appraiser_id: Option<EmployeeId>) -> AppraisalRecord {
        AppraisalRecord {
            employee_id,
            period_under_review: PERIOD.to_string(),
            date_of_appraisal: NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(),
            appraiser_id,
            comments: AppraisalComments {
                appraiser: Some("Strong half year".to_string()),
                ..Default::default()
            },
        }
    }

    /// RS-001: duplicate department names are rejected
    #[test]
    fn test_duplicate_department_rejected() {
        let mut store = create_store();
        let result = store.add_department(Department {
            id: 2,
            name: "Credit".to_string(),
        });
        assert!(matches!(result, Err(EngineError::DuplicateRecord { .. })));
    }

    /// RS-002: employee must reference an existing department
    #[test]
    fn test_employee_with_unknown_department_rejected() {
        let mut store = create_store();
        let mut employee = create_employee(3, "chebet");
        employee.department = Some("Marketing".to_string());

        match store.add_employee(employee).unwrap_err() {
            EngineError::RecordNotFound { entity, id } => {
                assert_eq!(entity, "department");
                assert_eq!(id, "Marketing");
            }
            other => panic!("Expected RecordNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_employee_with_known_department_accepted() {
        let mut store = create_store();
        let mut employee = create_employee(3, "chebet");
        employee.department = Some("Credit".to_string());
        assert!(store.add_employee(employee).is_ok());
    }

    #[test]
    fn test_negative_salary_rejected() {
        let mut store = create_store();
        let mut employee = create_employee(3, "chebet");
        employee.annual_salary = Some(dec("-1"));
        assert!(matches!(
            store.add_employee(employee),
            Err(EngineError::InvalidRecord { .. })
        ));
    }

    /// RS-003: KRA names are unique per pillar only
    #[test]
    fn test_kra_name_unique_per_pillar() {
        let mut store = create_store();
        let same_pillar = store.add_kra(KeyResultArea {
            id: 3,
            pillar_id: 1,
            name: "Membership".to_string(),
            description: None,
        });
        assert!(same_pillar.is_err());

        let other_pillar = store.add_kra(KeyResultArea {
            id: 4,
            pillar_id: 2,
            name: "Membership".to_string(),
            description: None,
        });
        assert!(other_pillar.is_ok());
    }

    /// RS-004: target weight must be positive
    #[test]
    fn test_zero_weight_target_rejected() {
        let mut store = create_store();
        let result = store.add_target(PerformanceTarget {
            id: 2,
            kra_id: 1,
            description: "Nothing".to_string(),
            target_value: Some(1),
            annual_target: None,
            weight: 0,
        });
        assert!(matches!(result, Err(EngineError::InvalidRecord { .. })));
    }

    /// RS-005: one performance per employee, target and period
    #[test]
    fn test_duplicate_performance_rejected() {
        let mut store = create_store();
        store.record_performance(performance(1, 20, PERIOD)).unwrap();

        assert!(store.record_performance(performance(1, 30, PERIOD)).is_err());
        assert!(store.record_performance(performance(1, 30, "Annual")).is_ok());
        assert!(store.record_performance(performance(2, 30, PERIOD)).is_ok());
    }

    #[test]
    fn test_performance_for_unknown_employee_rejected() {
        let mut store = create_store();
        assert!(matches!(
            store.record_performance(performance(99, 30, PERIOD)),
            Err(EngineError::RecordNotFound { .. })
        ));
    }

    #[test]
    fn test_duplicate_soft_skill_rating_rejected() {
        let mut store = create_store();
        store.record_soft_skill_rating(rating(1, "80", 5)).unwrap();
        assert!(store.record_soft_skill_rating(rating(1, "60", 5)).is_err());
    }

    /// RS-006: ratings above 100 are stored and lift the entry above its weight
    #[test]
    fn test_soft_skill_rating_above_scale_is_stored() {
        let mut store = create_store();
        store.record_soft_skill_rating(rating(1, "120", 5)).unwrap();

        let entries = store.soft_skill_entries(1, PERIOD).unwrap();
        assert_eq!(entries[0].weight, dec("5"));
        assert_eq!(entries[0].weighted_average, dec("6"));
    }

    #[test]
    fn test_overflowing_soft_skill_rating_is_calculation_error() {
        let mut store = create_store();
        let mut huge = rating(1, "0", u32::MAX);
        huge.rating = Decimal::MAX;
        store.record_soft_skill_rating(huge).unwrap();

        assert!(matches!(
            store.soft_skill_entries(1, PERIOD),
            Err(EngineError::CalculationError { .. })
        ));
    }

    /// RS-007: a pillar in a fixed name set cannot be tagged with another category
    #[test]
    fn test_pillar_tag_conflicting_with_name_set_rejected() {
        let mut store = AppraisalStore::new();
        let result = store.add_pillar(Pillar::with_category(1, "SOFT SKILLS", ScoreCategory::Other));
        assert!(matches!(result, Err(EngineError::InvalidRecord { .. })));

        let result = store.add_pillar(Pillar::with_category(
            2,
            "SHARED PERFORMANCE AREAS",
            ScoreCategory::SoftSkill,
        ));
        assert!(matches!(result, Err(EngineError::InvalidRecord { .. })));
    }

    #[test]
    fn test_pillar_tag_matching_name_set_or_outside_it_accepted() {
        let mut store = AppraisalStore::new();
        store
            .add_pillar(Pillar::with_category(1, "SOFT SKILLS", ScoreCategory::SoftSkill))
            .unwrap();
        store
            .add_pillar(Pillar::with_category(2, "CUSTOMER FOCUS", ScoreCategory::Strategic))
            .unwrap();
        assert_eq!(store.pillars[&2].category, ScoreCategory::Strategic);
    }

    /// RS-008: one appraisal record per employee and period
    #[test]
    fn test_duplicate_appraisal_rejected() {
        let mut store = create_store();
        store.record_appraisal(appraisal(1, Some(2))).unwrap();
        assert!(matches!(
            store.record_appraisal(appraisal(1, None)),
            Err(EngineError::DuplicateRecord { .. })
        ));

        let mut annual = appraisal(1, None);
        annual.period_under_review = "Annual".to_string();
        assert!(store.record_appraisal(annual).is_ok());
    }

    #[test]
    fn test_appraisal_with_unknown_appraiser_rejected() {
        let mut store = create_store();
        assert!(matches!(
            store.record_appraisal(appraisal(1, Some(99))),
            Err(EngineError::RecordNotFound { .. })
        ));
        assert!(matches!(
            store.record_appraisal(appraisal(99, None)),
            Err(EngineError::RecordNotFound { .. })
        ));
    }

    #[test]
    fn test_appraisal_record_lookup_by_period() {
        let mut store = create_store();
        store.record_appraisal(appraisal(1, Some(2))).unwrap();

        let record = store.appraisal_record(1, PERIOD).unwrap().unwrap();
        assert_eq!(record.appraiser_id, Some(2));
        assert_eq!(record.comments.appraiser.as_deref(), Some("Strong half year"));
        assert!(store.appraisal_record(1, "Annual").unwrap().is_none());
        assert!(store.appraisal_record(2, PERIOD).unwrap().is_none());
    }

    #[test]
    fn test_active_employees_excludes_inactive_and_keeps_order() {
        let mut store = create_store();
        store.add_employee(create_employee(3, "chebet")).unwrap();
        store.set_employee_active(2, false).unwrap();

        let ids: Vec<EmployeeId> = store
            .active_employees()
            .unwrap()
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(store.employee(2).unwrap().is_some());
    }

    #[test]
    fn test_set_active_unknown_employee_fails() {
        let mut store = create_store();
        assert!(store.set_employee_active(42, false).is_err());
    }

    #[test]
    fn test_performance_entries_carry_category_and_derived_values() {
        let mut store = create_store();
        store.record_performance(performance(1, 30, PERIOD)).unwrap();
        store.record_performance(performance(1, 40, "Annual")).unwrap();

        let entries = store.performance_entries(1, PERIOD).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].category, ScoreCategory::Strategic);
        assert_eq!(entries[0].weight, dec("10"));
        assert_eq!(entries[0].weighted_average, dec("7.5"));
    }

    #[test]
    fn test_soft_skill_entries_filter_by_employee_and_period() {
        let mut store = create_store();
        store.record_soft_skill_rating(rating(1, "80", 5)).unwrap();
        store.record_soft_skill_rating(rating(2, "60", 5)).unwrap();

        let entries = store.soft_skill_entries(1, PERIOD).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].category, ScoreCategory::SoftSkill);
        assert_eq!(entries[0].weighted_average, dec("4"));

        assert!(store.soft_skill_entries(1, "Annual").unwrap().is_empty());
    }

    #[test]
    fn test_load_fixture_snapshot() {
        let store = AppraisalStore::load("./fixtures/org_snapshot.yaml").unwrap();
        assert_eq!(store.active_employees().unwrap().len(), 4);
        assert!(store.appraisal_record(1, PERIOD).unwrap().is_some());
    }

    #[test]
    fn test_load_missing_snapshot_returns_config_not_found() {
        let result = AppraisalStore::load("/nonexistent/snapshot.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }
}
