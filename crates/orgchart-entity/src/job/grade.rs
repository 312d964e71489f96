//! Pay grade entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use orgchart_core::types::GradeId;
use orgchart_core::types::patch;

use crate::record::{EntityType, RecordPatch, impl_record};
use crate::status::RecordStatus;

/// A pay grade with a salary band. Designations reference a grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// Unique grade identifier.
    pub id: GradeId,
    /// Grade name.
    pub name: String,
    /// Short code.
    pub code: String,
    /// Numeric rank; higher is more senior.
    pub level: i32,
    /// Currency of the salary band.
    pub currency: String,
    /// Lower end of the base salary band.
    pub min_base_salary: f64,
    /// Upper end of the base salary band.
    pub max_base_salary: f64,
    /// Grade status.
    pub status: RecordStatus,
    /// When the grade was created.
    pub created_at: DateTime<Utc>,
    /// When the grade was last updated.
    pub updated_at: DateTime<Utc>,
}

impl_record!(Grade, GradeId, RecordStatus, EntityType::Grade, |g| g.name.clone());

/// Data required to create a new grade.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_salary_band"))]
pub struct CreateGrade {
    /// Grade name.
    #[validate(length(min = 1, message = "Grade name is required"))]
    pub name: String,
    /// Short code.
    #[validate(length(min = 1, message = "Grade code is required"))]
    pub code: String,
    /// Numeric rank.
    pub level: i32,
    /// Currency of the salary band.
    #[validate(length(equal = 3, message = "Currency must be a 3-letter ISO code"))]
    pub currency: String,
    /// Lower end of the band.
    #[validate(range(min = 0.0, message = "Salary cannot be negative"))]
    pub min_base_salary: f64,
    /// Upper end of the band.
    #[validate(range(min = 0.0, message = "Salary cannot be negative"))]
    pub max_base_salary: f64,
    /// Initial status.
    #[serde(default)]
    pub status: RecordStatus,
}

fn validate_salary_band(req: &CreateGrade) -> Result<(), ValidationError> {
    check_salary_band(req.min_base_salary, req.max_base_salary)
}

/// Reject a band whose minimum exceeds its maximum.
pub fn check_salary_band(min: f64, max: f64) -> Result<(), ValidationError> {
    if min > max {
        return Err(ValidationError::new("salary_band")
            .with_message("Minimum base salary cannot exceed maximum base salary".into()));
    }
    Ok(())
}

impl CreateGrade {
    /// Build the stored row.
    pub fn into_record(self, now: DateTime<Utc>) -> Grade {
        Grade {
            id: GradeId::new(),
            name: self.name,
            code: self.code,
            level: self.level,
            currency: self.currency.to_uppercase(),
            min_base_salary: self.min_base_salary,
            max_base_salary: self.max_base_salary,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a grade.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateGrade {
    /// New name.
    #[serde(default)]
    #[validate(length(min = 1, message = "Grade name cannot be empty"))]
    pub name: Option<String>,
    /// New code.
    #[serde(default)]
    #[validate(length(min = 1, message = "Grade code cannot be empty"))]
    pub code: Option<String>,
    /// New level.
    #[serde(default)]
    pub level: Option<i32>,
    /// New currency.
    #[serde(default)]
    #[validate(length(equal = 3, message = "Currency must be a 3-letter ISO code"))]
    pub currency: Option<String>,
    /// New band minimum.
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Salary cannot be negative"))]
    pub min_base_salary: Option<f64>,
    /// New band maximum.
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Salary cannot be negative"))]
    pub max_base_salary: Option<f64>,
    /// New status.
    #[serde(default)]
    pub status: Option<RecordStatus>,
}

impl RecordPatch for UpdateGrade {
    type Target = Grade;

    fn status(&self) -> Option<RecordStatus> {
        self.status
    }

    fn apply_to(self, target: &mut Grade) {
        patch::apply(&mut target.name, self.name);
        patch::apply(&mut target.code, self.code);
        patch::apply(&mut target.level, self.level);
        patch::apply(&mut target.currency, self.currency.map(|c| c.to_uppercase()));
        patch::apply(&mut target.min_base_salary, self.min_base_salary);
        patch::apply(&mut target.max_base_salary, self.max_base_salary);
        patch::apply(&mut target.status, self.status);
    }
}
