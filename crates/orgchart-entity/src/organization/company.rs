//! Company entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use orgchart_core::types::CompanyId;
use orgchart_core::types::patch::{self, double_option};

use crate::address::Address;
use crate::record::{EntityType, RecordPatch, impl_record};
use crate::status::RecordStatus;

/// A legal entity at the top of the organization. Divisions point at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Unique company identifier.
    pub id: CompanyId,
    /// Trading name.
    pub name: String,
    /// Registration number; unique across companies.
    pub registration_number: String,
    /// Tax identifier.
    pub tax_id: Option<String>,
    /// Primary internet domain.
    pub domain: Option<String>,
    /// Industry sector.
    pub sector: Option<String>,
    /// Registered address.
    pub address: Address,
    /// Month the fiscal year starts in (1-12).
    pub fiscal_year_start_month: u8,
    /// Reporting currency (ISO 4217 code).
    pub currency: String,
    /// Company status.
    pub status: RecordStatus,
    /// When the company was created.
    pub created_at: DateTime<Utc>,
    /// When the company was last updated.
    pub updated_at: DateTime<Utc>,
}

impl_record!(Company, CompanyId, RecordStatus, EntityType::Company, |c| c.name.clone());

/// A company together with counts derived from related tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyWithCounts {
    /// The company row.
    #[serde(flatten)]
    pub company: Company,
    /// Number of divisions owned by the company.
    pub division_count: u64,
    /// Sum of department headcount across the company's divisions.
    pub employee_count: u64,
}

/// Data required to create a new company.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCompany {
    /// Trading name.
    #[validate(length(min = 1, message = "Company name is required"))]
    pub name: String,
    /// Registration number.
    #[validate(length(min = 1, message = "Registration number is required"))]
    pub registration_number: String,
    /// Tax identifier.
    #[serde(default)]
    pub tax_id: Option<String>,
    /// Primary internet domain.
    #[serde(default)]
    pub domain: Option<String>,
    /// Industry sector.
    #[serde(default)]
    pub sector: Option<String>,
    /// Registered address.
    #[serde(default)]
    pub address: Address,
    /// Month the fiscal year starts in.
    #[validate(range(min = 1, max = 12, message = "Fiscal year start month must be 1-12"))]
    pub fiscal_year_start_month: u8,
    /// Reporting currency.
    #[validate(length(equal = 3, message = "Currency must be a 3-letter ISO code"))]
    pub currency: String,
    /// Initial status.
    #[serde(default)]
    pub status: RecordStatus,
}

impl CreateCompany {
    /// Build the stored row.
    pub fn into_record(self, now: DateTime<Utc>) -> Company {
        Company {
            id: CompanyId::new(),
            name: self.name,
            registration_number: self.registration_number,
            tax_id: self.tax_id,
            domain: self.domain,
            sector: self.sector,
            address: self.address,
            fiscal_year_start_month: self.fiscal_year_start_month,
            currency: self.currency.to_uppercase(),
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a company.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCompany {
    /// New trading name.
    #[serde(default)]
    #[validate(length(min = 1, message = "Company name cannot be empty"))]
    pub name: Option<String>,
    /// New registration number.
    #[serde(default)]
    #[validate(length(min = 1, message = "Registration number cannot be empty"))]
    pub registration_number: Option<String>,
    /// New tax identifier; `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub tax_id: Option<Option<String>>,
    /// New domain; `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub domain: Option<Option<String>>,
    /// New sector; `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub sector: Option<Option<String>>,
    /// Replacement address.
    #[serde(default)]
    pub address: Option<Address>,
    /// New fiscal year start month.
    #[serde(default)]
    #[validate(range(min = 1, max = 12, message = "Fiscal year start month must be 1-12"))]
    pub fiscal_year_start_month: Option<u8>,
    /// New currency.
    #[serde(default)]
    #[validate(length(equal = 3, message = "Currency must be a 3-letter ISO code"))]
    pub currency: Option<String>,
    /// New status.
    #[serde(default)]
    pub status: Option<RecordStatus>,
}

impl RecordPatch for UpdateCompany {
    type Target = Company;

    fn status(&self) -> Option<RecordStatus> {
        self.status
    }

    fn apply_to(self, target: &mut Company) {
        patch::apply(&mut target.name, self.name);
        patch::apply(&mut target.registration_number, self.registration_number);
        patch::apply(&mut target.tax_id, self.tax_id);
        patch::apply(&mut target.domain, self.domain);
        patch::apply(&mut target.sector, self.sector);
        patch::apply(&mut target.address, self.address);
        patch::apply(&mut target.fiscal_year_start_month, self.fiscal_year_start_month);
        patch::apply(&mut target.currency, self.currency.map(|c| c.to_uppercase()));
        patch::apply(&mut target.status, self.status);
    }
}
