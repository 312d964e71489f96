//! Guard rules.
//!
//! Each rule counts the rows that still depend on the target and denies the
//! transition when any exist. Rules never look the target up themselves
//! except where they need its own counters; callers resolve `NotFound`
//! first.

use orgchart_core::types::{
    CountryId, DepartmentId, DesignationId, DivisionId, GradeId, LocationId, StateId,
};
use orgchart_entity::Lifecycle;
use orgchart_entity::job::Designation;
use orgchart_entity::organization::Department;
use orgchart_store::Tables;

use super::GuardDecision;

/// Grade -> inactive: no active designation may still use the grade.
pub fn deactivate_grade(tables: &Tables, id: GradeId) -> GuardDecision {
    let n = tables
        .designations
        .count_where(|d| d.grade_id == id && d.status.is_active());
    if n > 0 {
        return GuardDecision::deny(format!(
            "Cannot deactivate grade: it is assigned to {n} active designation(s)."
        ));
    }
    GuardDecision::allow()
}

/// Designation -> inactive: nobody may hold it and no active designation
/// may report to it.
pub fn deactivate_designation(tables: &Tables, id: DesignationId) -> GuardDecision {
    let holders = tables
        .designations
        .get(id)
        .map_or(0, |d| d.employee_count);
    designation_deactivation(tables, id, holders)
}

/// [`deactivate_designation`] for a patched row. Holders are the larger of
/// the stored and the requested `employee_count`.
pub fn deactivate_designation_row(tables: &Tables, row: &Designation) -> GuardDecision {
    let stored = tables
        .designations
        .get(row.id)
        .map_or(0, |d| d.employee_count);
    designation_deactivation(tables, row.id, stored.max(row.employee_count))
}

fn designation_deactivation(tables: &Tables, id: DesignationId, holders: u32) -> GuardDecision {
    if holders > 0 {
        return GuardDecision::deny(format!(
            "Cannot deactivate designation: {holders} employee(s) currently hold this designation."
        ));
    }

    let reports = tables.designations.count_where(|d| {
        d.id != id && d.reports_to_designation_id == Some(id) && d.status.is_active()
    });
    if reports > 0 {
        return GuardDecision::deny(format!(
            "Cannot deactivate designation: it is the reporting manager for {reports} active designation(s)."
        ));
    }
    GuardDecision::allow()
}

/// Division -> inactive: no active department may remain in it.
pub fn deactivate_division(tables: &Tables, id: DivisionId) -> GuardDecision {
    let n = tables
        .departments
        .count_where(|d| d.division_id == id && d.status.is_active());
    if n > 0 {
        return GuardDecision::deny(format!(
            "Cannot deactivate division: it has {n} active department(s)."
        ));
    }
    GuardDecision::allow()
}

/// Department -> inactive: headcount must be zero and no child may be active.
pub fn deactivate_department(tables: &Tables, id: DepartmentId) -> GuardDecision {
    let headcount = tables.departments.get(id).map_or(0, |d| d.headcount);
    department_deactivation(tables, id, headcount)
}

/// [`deactivate_department`] for a patched row. Headcount is the larger of
/// the stored and the requested value.
pub fn deactivate_department_row(tables: &Tables, row: &Department) -> GuardDecision {
    let stored = tables.departments.get(row.id).map_or(0, |d| d.headcount);
    department_deactivation(tables, row.id, stored.max(row.headcount))
}

fn department_deactivation(tables: &Tables, id: DepartmentId, headcount: u32) -> GuardDecision {
    if headcount > 0 {
        return GuardDecision::deny(format!(
            "Cannot deactivate department with active headcount ({headcount} employee(s))."
        ));
    }

    let active_children = tables
        .departments
        .count_where(|d| d.parent_id == Some(id) && d.status.is_active());
    if active_children > 0 {
        return GuardDecision::deny(format!(
            "Cannot deactivate department with {active_children} active child unit(s)."
        ));
    }
    GuardDecision::allow()
}

/// Department removal: no headcount, no children of any status, and no
/// active cost center pointing at it.
pub fn delete_department(tables: &Tables, id: DepartmentId) -> GuardDecision {
    let headcount = tables.departments.get(id).map_or(0, |d| d.headcount);
    if headcount > 0 {
        return GuardDecision::deny(format!(
            "Cannot delete department with active headcount ({headcount} employee(s))."
        ));
    }

    let children = tables.departments.count_where(|d| d.parent_id == Some(id));
    if children > 0 {
        return GuardDecision::deny(format!(
            "Cannot delete department with child units. Remove or reassign {children} child unit(s) first."
        ));
    }

    let centers = tables
        .cost_centers
        .count_where(|c| c.department_id == id && c.status.is_active());
    if centers > 0 {
        return GuardDecision::deny(format!(
            "Cannot delete department: it is referenced by {centers} active cost center(s)."
        ));
    }
    GuardDecision::allow()
}

/// Location removal: no company mapping may reference it.
pub fn delete_location(tables: &Tables, id: LocationId) -> GuardDecision {
    let n = tables
        .company_locations
        .count_where(|m| m.location_id == id);
    if n > 0 {
        return GuardDecision::deny(format!(
            "Cannot delete location: it is mapped to {n} company(ies)."
        ));
    }
    GuardDecision::allow()
}

/// Country removal: the country must have no states.
pub fn delete_country(tables: &Tables, id: CountryId) -> GuardDecision {
    let n = tables.states.count_where(|s| s.country_id == id);
    if n > 0 {
        return GuardDecision::deny(format!(
            "Cannot delete country with {n} state(s). Remove its states first."
        ));
    }
    GuardDecision::allow()
}

/// State removal: the state must have no cities.
pub fn delete_state(tables: &Tables, id: StateId) -> GuardDecision {
    let n = tables.cities.count_where(|c| c.state_id == id);
    if n > 0 {
        return GuardDecision::deny(format!(
            "Cannot delete state with {n} city(ies). Remove its cities first."
        ));
    }
    GuardDecision::allow()
}

/// Rule for tables without a guard.
pub fn unguarded<I>(_tables: &Tables, _id: I) -> GuardDecision {
    GuardDecision::allow()
}

/// Update-time counterpart of [`unguarded`].
pub fn unguarded_row<T>(_tables: &Tables, _row: &T) -> GuardDecision {
    GuardDecision::allow()
}
