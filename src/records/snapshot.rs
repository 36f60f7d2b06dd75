//! Serialized organization snapshot.
//!
//! An [`OrgSnapshot`] is the on-disk form of every record an allocation run
//! reads. It is loaded from YAML (or JSON) and replayed into an
//! [`AppraisalStore`](super::AppraisalStore), which validates it.

use serde::{Deserialize, Serialize};

use crate::models::{
    AppraisalRecord, Department, Employee, EmployeePerformance, KeyResultArea, PerformanceTarget,
    Pillar, Role, ScoreCategory, SoftSkillRating,
};

/// A pillar as written in a snapshot file.
///
/// When `category` is omitted it is derived from the pillar name. Only pillars
/// outside the fixed strategic and soft-skill name sets may carry a tag that
/// differs from the derived one; the store rejects any other mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarRecord {
    /// Unique identifier for the pillar.
    pub id: u64,
    /// The pillar name.
    pub name: String,
    /// Explicit category tag.
    #[serde(default)]
    pub category: Option<ScoreCategory>,
}

impl From<PillarRecord> for Pillar {
    fn from(record: PillarRecord) -> Self {
        match record.category {
            Some(category) => Pillar::with_category(record.id, record.name, category),
            None => Pillar::new(record.id, record.name),
        }
    }
}

/// Every record of an organization needed for appraisal and allocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrgSnapshot {
    /// Departments.
    #[serde(default)]
    pub departments: Vec<Department>,
    /// Roles.
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Employees, in the order allocation rows are reported.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Pillars.
    #[serde(default)]
    pub pillars: Vec<PillarRecord>,
    /// Key result areas.
    #[serde(default)]
    pub kras: Vec<KeyResultArea>,
    /// Performance targets.
    #[serde(default)]
    pub targets: Vec<PerformanceTarget>,
    /// Strategic-target achievements.
    #[serde(default)]
    pub performances: Vec<EmployeePerformance>,
    /// Soft-skill ratings.
    #[serde(default)]
    pub soft_skill_ratings: Vec<SoftSkillRating>,
    /// Appraisal meeting details, one per employee and period.
    #[serde(default)]
    pub appraisals: Vec<AppraisalRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pillar_record_without_category_derives_it() {
        let record = PillarRecord {
            id: 1,
            name: "ICT & BUSINESS PROCESSES".to_string(),
            category: None,
        };
        let pillar: Pillar = record.into();
        assert_eq!(pillar.category, ScoreCategory::Strategic);
    }

    #[test]
    fn test_pillar_record_explicit_category_wins() {
        let record = PillarRecord {
            id: 2,
            name: "CUSTOMER FOCUS".to_string(),
            category: Some(ScoreCategory::SoftSkill),
        };
        let pillar: Pillar = record.into();
        assert_eq!(pillar.category, ScoreCategory::SoftSkill);
    }

    #[test]
    fn test_deserialize_partial_snapshot() {
        let yaml = r#"
departments:
  - id: 1
    name: Finance
pillars:
  - id: 10
    name: SOFT SKILLS
  - id: 11
    name: Customer Experience
    category: strategic
"#;
        let snapshot: OrgSnapshot = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(snapshot.departments.len(), 1);
        assert!(snapshot.employees.is_empty());
        assert_eq!(snapshot.pillars[0].category, None);
        assert_eq!(snapshot.pillars[1].category, Some(ScoreCategory::Strategic));
        assert!(snapshot.appraisals.is_empty());
    }

    #[test]
    fn test_deserialize_appraisal_records() {
        let yaml = r#"
appraisals:
  - employee_id: 1
    period_under_review: Jan-Jun 2025
    date_of_appraisal: 2025-07-10
    appraiser_id: 2
    comments:
      appraiser: Strong half year
      hr: Recommended for training
"#;
        let snapshot: OrgSnapshot = serde_yaml::from_str(yaml).unwrap();
        let record = &snapshot.appraisals[0];
        assert_eq!(record.appraiser_id, Some(2));
        assert_eq!(record.comments.hr.as_deref(), Some("Recommended for training"));
        assert!(record.comments.ceo.is_none());
    }
}
