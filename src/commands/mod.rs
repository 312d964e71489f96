//! CLI command definitions and dispatch.

pub mod audit;
pub mod guard;
pub mod list;
pub mod mutate;
pub mod tree;

use clap::{Parser, Subcommand};
use uuid::Uuid;

use orgchart_core::config::AppConfig;
use orgchart_core::error::AppError;
use orgchart_core::result::AppResult;
use orgchart_service::{OrgServices, RequestContext};
use orgchart_store::OrgStore;

use crate::output::OutputFormat;

/// OrgChart: organization hierarchy administration
#[derive(Debug, Parser)]
#[command(name = "orgchart", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/orgchart.toml")]
    pub config: String,

    /// JSON snapshot to seed the store from (overrides `store.seed_file`)
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Actor recorded on audit entries (defaults to `audit.default_actor`)
    #[arg(short, long)]
    pub actor: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the rows of one entity table
    List(list::ListArgs),
    /// Show the department or designation forest
    Tree(tree::TreeArgs),
    /// Ask whether a deactivation or deletion would be allowed
    Guard(guard::GuardArgs),
    /// Search the audit log
    Audit(audit::AuditArgs),
    /// Delete a row, subject to its guard
    Delete(mutate::DeleteArgs),
    /// Change the status of a row, subject to its guard
    SetStatus(mutate::SetStatusArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let session = Session::open(self, config).await?;

        match &self.command {
            Commands::List(args) => list::execute(args, &session, self.format).await,
            Commands::Tree(args) => tree::execute(args, &session, self.format).await,
            Commands::Guard(args) => guard::execute(args, &session, self.format).await,
            Commands::Audit(args) => audit::execute(args, &session, self.format).await,
            Commands::Delete(args) => mutate::delete(args, &session, self.format).await,
            Commands::SetStatus(args) => mutate::set_status(args, &session, self.format).await,
        }
    }
}

/// A seeded store plus everything a command needs to act on it.
pub struct Session {
    /// Services over the seeded store.
    pub services: OrgServices,
    /// Actor for mutations.
    pub ctx: RequestContext,
    /// Where the store was seeded from, if anywhere.
    pub seed_path: Option<String>,
    /// Default audit page size.
    pub page_size: u64,
}

impl Session {
    /// Build the store from the seed file, or start empty.
    pub async fn open(cli: &Cli, config: &AppConfig) -> AppResult<Self> {
        let seed_path = cli.seed.clone().or_else(|| config.store.seed_file.clone());
        let store = match &seed_path {
            Some(path) => OrgStore::load(path).await?,
            None => {
                tracing::warn!("No seed file configured; starting with an empty store");
                OrgStore::new()
            }
        };

        let actor = cli
            .actor
            .clone()
            .unwrap_or_else(|| config.audit.default_actor.clone());

        Ok(Self {
            services: OrgServices::new(store, config),
            ctx: RequestContext::new(actor),
            seed_path,
            page_size: config.audit.default_page_size,
        })
    }

    /// Write the current store back to the seed file.
    pub async fn save(&self) -> AppResult<String> {
        let path = self
            .seed_path
            .clone()
            .ok_or_else(|| AppError::configuration("--save requires a seed file"))?;
        self.services.store.snapshot().await.write_to(&path).await?;
        Ok(path)
    }
}

/// Helper: parse a UUID argument
pub fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| AppError::validation(format!("Invalid UUID '{raw}': {e}")))
}
