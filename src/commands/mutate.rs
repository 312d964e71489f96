//! Guarded delete and status-change commands.

use clap::Args;
use serde_json::Value;
use uuid::Uuid;

use orgchart_core::error::AppError;
use orgchart_core::result::AppResult;
use orgchart_entity::EntityType;
use orgchart_entity::finance::UpdateCostCenter;
use orgchart_entity::geography::{UpdateCity, UpdateCountry, UpdateState};
use orgchart_entity::job::{UpdateDesignation, UpdateGrade};
use orgchart_entity::location::UpdateLocation;
use orgchart_entity::organization::{UpdateCompany, UpdateDepartment, UpdateDivision};

use super::{Session, parse_id};
use crate::output::{self, OutputFormat};

/// Arguments for the delete command
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Entity table
    pub entity_type: EntityType,
    /// Row ID
    pub id: String,
    /// Write the result back to the seed file
    #[arg(long)]
    pub save: bool,
}

/// Arguments for the set-status command
#[derive(Debug, Args)]
pub struct SetStatusArgs {
    /// Entity table
    pub entity_type: EntityType,
    /// Row ID
    pub id: String,
    /// New status, e.g. `inactive`, `archived`, `frozen`
    pub status: String,
    /// Write the result back to the seed file
    #[arg(long)]
    pub save: bool,
}

/// Execute the delete command
pub async fn delete(args: &DeleteArgs, session: &Session, format: OutputFormat) -> AppResult<()> {
    let id = parse_id(&args.id)?;
    let s = &session.services;
    let ctx = &session.ctx;

    let removed = match args.entity_type {
        EntityType::Company => to_json(s.companies.delete(ctx, id.into()).await?)?,
        EntityType::Division => to_json(s.divisions.delete(ctx, id.into()).await?)?,
        EntityType::Department => to_json(s.departments.delete(ctx, id.into()).await?)?,
        EntityType::Grade => to_json(s.grades.delete(ctx, id.into()).await?)?,
        EntityType::Designation => to_json(s.designations.delete(ctx, id.into()).await?)?,
        EntityType::Location => to_json(s.locations.delete(ctx, id.into()).await?)?,
        EntityType::CompanyLocation => to_json(s.locations.unmap_company(ctx, id.into()).await?)?,
        EntityType::Country => to_json(s.geography.delete_country(ctx, id.into()).await?)?,
        EntityType::State => to_json(s.geography.delete_state(ctx, id.into()).await?)?,
        EntityType::City => to_json(s.geography.delete_city(ctx, id.into()).await?)?,
        EntityType::CostCenter => to_json(s.cost_centers.delete(ctx, id.into()).await?)?,
    };

    report(session, format, &removed, &format!("Deleted {} {id}", args.entity_type), args.save)
        .await
}

/// Execute the set-status command
pub async fn set_status(
    args: &SetStatusArgs,
    session: &Session,
    format: OutputFormat,
) -> AppResult<()> {
    let id = parse_id(&args.id)?;
    let updated = apply_status(session, args.entity_type, id, &args.status).await?;

    report(
        session,
        format,
        &updated,
        &format!("{} {id} is now {}", args.entity_type, args.status),
        args.save,
    )
    .await
}

async fn apply_status(
    session: &Session,
    entity_type: EntityType,
    id: Uuid,
    raw: &str,
) -> AppResult<Value> {
    let s = &session.services;
    let ctx = &session.ctx;

    match entity_type {
        EntityType::Company => {
            let patch = UpdateCompany {
                status: Some(raw.parse()?),
                ..Default::default()
            };
            to_json(s.companies.update(ctx, id.into(), patch).await?)
        }
        EntityType::Division => {
            let patch = UpdateDivision {
                status: Some(raw.parse()?),
                ..Default::default()
            };
            to_json(s.divisions.update(ctx, id.into(), patch).await?)
        }
        EntityType::Department => {
            let patch = UpdateDepartment {
                status: Some(raw.parse()?),
                ..Default::default()
            };
            to_json(s.departments.update(ctx, id.into(), patch).await?)
        }
        EntityType::Grade => {
            let patch = UpdateGrade {
                status: Some(raw.parse()?),
                ..Default::default()
            };
            to_json(s.grades.update(ctx, id.into(), patch).await?)
        }
        EntityType::Designation => {
            let patch = UpdateDesignation {
                status: Some(raw.parse()?),
                ..Default::default()
            };
            to_json(s.designations.update(ctx, id.into(), patch).await?)
        }
        EntityType::Location => {
            let patch = UpdateLocation {
                status: Some(raw.parse()?),
                ..Default::default()
            };
            to_json(s.locations.update(ctx, id.into(), patch).await?)
        }
        EntityType::Country => {
            let patch = UpdateCountry {
                status: Some(raw.parse()?),
                ..Default::default()
            };
            to_json(s.geography.update_country(ctx, id.into(), patch).await?)
        }
        EntityType::State => {
            let patch = UpdateState {
                status: Some(raw.parse()?),
                ..Default::default()
            };
            to_json(s.geography.update_state(ctx, id.into(), patch).await?)
        }
        EntityType::City => {
            let patch = UpdateCity {
                status: Some(raw.parse()?),
                ..Default::default()
            };
            to_json(s.geography.update_city(ctx, id.into(), patch).await?)
        }
        EntityType::CostCenter => {
            let patch = UpdateCostCenter {
                status: Some(raw.parse()?),
                ..Default::default()
            };
            to_json(s.cost_centers.update(ctx, id.into(), patch).await?)
        }
        EntityType::CompanyLocation => Err(AppError::validation(
            "Company location mappings have no editable status; unmap them instead",
        )),
    }
}

fn to_json<T: serde::Serialize>(row: T) -> AppResult<Value> {
    Ok(serde_json::to_value(row)?)
}

async fn report(
    session: &Session,
    format: OutputFormat,
    row: &Value,
    message: &str,
    save: bool,
) -> AppResult<()> {
    let saved = if save { Some(session.save().await?) } else { None };

    match format {
        OutputFormat::Json => output::print_json(row),
        OutputFormat::Table => {
            output::print_success(message);
            match saved {
                Some(path) => output::print_success(&format!("Snapshot written to '{path}'")),
                None => output::print_warning("Changes were not saved; pass --save to persist them"),
            }
        }
    }
    Ok(())
}
