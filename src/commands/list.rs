//! Table listing commands.

use clap::Args;
use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use orgchart_core::result::AppResult;
use orgchart_entity::EntityType;

use super::Session;
use crate::output::{self, OutputFormat};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Entity table, e.g. `department` or `cost-center`
    pub entity_type: EntityType,
}

/// Generic display row
#[derive(Debug, Serialize, Tabled)]
struct EntityRow {
    /// Row ID
    id: String,
    /// Name or title
    name: String,
    /// Short code
    code: String,
    /// Status
    status: String,
    /// Last update
    updated_at: String,
}

impl EntityRow {
    fn from_json(row: &Value) -> Self {
        let text = |key: &str| row.get(key).and_then(Value::as_str).unwrap_or("-").to_string();
        let name = row
            .get("name")
            .or_else(|| row.get("title"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} @ {}", text("company_id"), text("location_id")));

        Self {
            id: text("id"),
            name,
            code: text("code"),
            status: text("status"),
            updated_at: text("updated_at"),
        }
    }
}

/// Execute the list command
pub async fn execute(args: &ListArgs, session: &Session, format: OutputFormat) -> AppResult<()> {
    let rows = session.services.list(args.entity_type).await?;

    match format {
        OutputFormat::Json => output::print_json(&rows),
        OutputFormat::Table => {
            let rows: Vec<EntityRow> = rows.iter().map(EntityRow::from_json).collect();
            output::print_list(&rows, format);
        }
    }
    Ok(())
}
