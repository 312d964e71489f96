//! The full set of entity tables.

use serde::{Deserialize, Serialize};

use orgchart_entity::Record;
use orgchart_entity::finance::CostCenter;
use orgchart_entity::geography::{GeoCity, GeoCountry, GeoState};
use orgchart_entity::job::{Designation, Grade};
use orgchart_entity::location::{CompanyLocation, Location};
use orgchart_entity::organization::{Company, Department, Division};

use crate::table::Table;

/// Every entity table, one field per entity type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tables {
    /// Companies.
    #[serde(default)]
    pub companies: Table<Company>,
    /// Divisions.
    #[serde(default)]
    pub divisions: Table<Division>,
    /// Departments of every kind.
    #[serde(default)]
    pub departments: Table<Department>,
    /// Pay grades.
    #[serde(default)]
    pub grades: Table<Grade>,
    /// Designations.
    #[serde(default)]
    pub designations: Table<Designation>,
    /// Locations.
    #[serde(default)]
    pub locations: Table<Location>,
    /// Company-to-location mappings.
    #[serde(default)]
    pub company_locations: Table<CompanyLocation>,
    /// Countries.
    #[serde(default)]
    pub countries: Table<GeoCountry>,
    /// States.
    #[serde(default)]
    pub states: Table<GeoState>,
    /// Cities.
    #[serde(default)]
    pub cities: Table<GeoCity>,
    /// Cost centers.
    #[serde(default)]
    pub cost_centers: Table<CostCenter>,
}

impl Tables {
    /// Borrow the table holding `T`.
    pub fn table<T: Stored>(&self) -> &Table<T> {
        T::table(self)
    }

    /// Mutably borrow the table holding `T`.
    pub fn table_mut<T: Stored>(&mut self) -> &mut Table<T> {
        T::table_mut(self)
    }

    /// Total number of rows across all tables.
    pub fn total_rows(&self) -> usize {
        self.companies.len()
            + self.divisions.len()
            + self.departments.len()
            + self.grades.len()
            + self.designations.len()
            + self.locations.len()
            + self.company_locations.len()
            + self.countries.len()
            + self.states.len()
            + self.cities.len()
            + self.cost_centers.len()
    }
}

/// A [`Record`] type with a home in [`Tables`].
pub trait Stored: Record {
    /// Borrow this type's table.
    fn table(tables: &Tables) -> &Table<Self>;

    /// Mutably borrow this type's table.
    fn table_mut(tables: &mut Tables) -> &mut Table<Self>;
}

macro_rules! stored_in {
    ($ty:ty => $field:ident) => {
        impl Stored for $ty {
            fn table(tables: &Tables) -> &Table<Self> {
                &tables.$field
            }

            fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
                &mut tables.$field
            }
        }
    };
}

stored_in!(Company => companies);
stored_in!(Division => divisions);
stored_in!(Department => departments);
stored_in!(Grade => grades);
stored_in!(Designation => designations);
stored_in!(Location => locations);
stored_in!(CompanyLocation => company_locations);
stored_in!(GeoCountry => countries);
stored_in!(GeoState => states);
stored_in!(GeoCity => cities);
stored_in!(CostCenter => cost_centers);
