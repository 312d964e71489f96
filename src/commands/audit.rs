//! Audit log CLI commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use orgchart_core::result::AppResult;
use orgchart_core::types::pagination::PageRequest;
use orgchart_entity::EntityType;
use orgchart_entity::audit::{AuditAction, AuditFilter};

use super::{Session, parse_id};
use crate::output::{self, OutputFormat};

/// Arguments for the audit command
#[derive(Debug, Args)]
pub struct AuditArgs {
    /// Filter by entity ID
    #[arg(long)]
    pub entity_id: Option<String>,
    /// Filter by entity type
    #[arg(short, long)]
    pub entity_type: Option<EntityType>,
    /// Filter by action
    #[arg(long)]
    pub action: Option<AuditAction>,
    /// Filter by actor
    #[arg(long)]
    pub actor: Option<String>,
    /// Page number
    #[arg(short, long, default_value = "1")]
    pub page: u64,
    /// Page size (defaults to `audit.default_page_size`)
    #[arg(short, long)]
    pub limit: Option<u64>,
}

/// Audit display row
#[derive(Debug, Serialize, Tabled)]
struct AuditRow {
    /// Time
    time: String,
    /// Actor
    actor: String,
    /// Action
    action: String,
    /// Details
    details: String,
    /// Changed fields
    changes: String,
}

/// Execute the audit command
pub async fn execute(args: &AuditArgs, session: &Session, format: OutputFormat) -> AppResult<()> {
    let filter = AuditFilter {
        entity_id: args.entity_id.as_deref().map(parse_id).transpose()?,
        entity_type: args.entity_type,
        action: args.action,
        actor: args.actor.clone(),
    };
    let page = PageRequest::new(args.page, args.limit.unwrap_or(session.page_size));
    let response = session.services.audit.get_audit_logs(&filter, &page).await;

    match format {
        OutputFormat::Json => output::print_json(&response),
        OutputFormat::Table => {
            let rows: Vec<AuditRow> = response
                .items
                .iter()
                .map(|e| AuditRow {
                    time: e.timestamp.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
                    actor: e.actor.clone(),
                    action: e.action.to_string(),
                    details: e.details.clone(),
                    changes: e
                        .changes
                        .as_ref()
                        .map(|c| c.keys().cloned().collect::<Vec<_>>().join(", "))
                        .unwrap_or_default(),
                })
                .collect();
            output::print_list(&rows, format);
            output::print_kv(
                "Page",
                &format!("{}/{} ({} entries)", response.page, response.total_pages, response.total_items),
            );
        }
    }
    Ok(())
}
