//! Guard dry-run command.

use clap::Args;

use orgchart_core::result::AppResult;
use orgchart_service::GuardCheck;

use super::{Session, parse_id};
use crate::output::{self, OutputFormat};

/// Arguments for the guard command
#[derive(Debug, Args)]
pub struct GuardArgs {
    /// Guard to evaluate, e.g. `delete-department` or `deactivate-grade`
    pub check: GuardCheck,
    /// Target row ID
    pub id: String,
}

/// Execute the guard command
pub async fn execute(args: &GuardArgs, session: &Session, format: OutputFormat) -> AppResult<()> {
    let target = parse_id(&args.id)?;
    let decision = session.services.guards.evaluate(args.check, target).await?;

    match format {
        OutputFormat::Json => output::print_json(&decision),
        OutputFormat::Table => {
            if decision.allowed {
                output::print_success(&format!("{} is allowed for {target}", args.check));
            } else {
                output::print_warning(&format!("{} is blocked for {target}", args.check));
                output::print_kv("Reason", decision.reason.as_deref().unwrap_or_default());
            }
        }
    }
    Ok(())
}
