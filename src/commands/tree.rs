//! Hierarchy tree commands.

use clap::{Args, Subcommand};

use orgchart_core::result::AppResult;
use orgchart_entity::job::DesignationNode;
use orgchart_entity::organization::DepartmentNode;

use super::{Session, parse_id};
use crate::output::{self, OutputFormat};

/// Arguments for tree commands
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Tree subcommand
    #[command(subcommand)]
    pub command: TreeCommand,
}

/// Tree subcommands
#[derive(Debug, Subcommand)]
pub enum TreeCommand {
    /// Department forest
    Departments {
        /// Limit to one division
        #[arg(short, long)]
        division: Option<String>,
    },
    /// Designation reporting forest
    Designations {
        /// Limit to one department; managers outside it are not shown
        #[arg(short, long)]
        department: Option<String>,
    },
}

/// Execute tree commands
pub async fn execute(args: &TreeArgs, session: &Session, format: OutputFormat) -> AppResult<()> {
    let hierarchy = &session.services.hierarchy;

    match &args.command {
        TreeCommand::Departments { division } => {
            let division_id = division.as_deref().map(parse_id).transpose()?;
            let tree = hierarchy.department_tree(division_id.map(Into::into)).await;
            match format {
                OutputFormat::Json => output::print_json(&tree),
                OutputFormat::Table => {
                    for root in &tree.roots {
                        print_department(root, 0);
                    }
                    output::print_kv("Units", &tree.total_units.to_string());
                }
            }
        }
        TreeCommand::Designations { department } => {
            let department_id = department.as_deref().map(parse_id).transpose()?;
            let tree = hierarchy.designation_tree(department_id.map(Into::into)).await;
            match format {
                OutputFormat::Json => output::print_json(&tree),
                OutputFormat::Table => {
                    for root in &tree.roots {
                        print_designation(root, 0);
                    }
                    output::print_kv("Designations", &tree.total_designations.to_string());
                }
            }
        }
    }

    Ok(())
}

fn print_department(node: &DepartmentNode, depth: usize) {
    println!(
        "{}├── {} [{}] {} ({} / {} total, {})",
        "  ".repeat(depth),
        node.name,
        node.code,
        node.kind,
        node.headcount,
        node.total_headcount,
        node.status
    );
    for child in &node.children {
        print_department(child, depth + 1);
    }
}

fn print_designation(node: &DesignationNode, depth: usize) {
    println!(
        "{}├── {} [{}] L{} ({} held, {})",
        "  ".repeat(depth),
        node.title,
        node.code,
        node.level,
        node.employee_count,
        node.status
    );
    for child in &node.children {
        print_designation(child, depth + 1);
    }
}
