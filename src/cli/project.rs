//! Project CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::project::{format_project_details, format_project_list};
use crate::error::{SiteKickError, SiteKickResult};
use crate::models::ProjectStatus;
use crate::services::{ClientService, ProjectService};
use crate::storage::Storage;

/// Project subcommands
#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a new project
    Create {
        /// Project title
        title: String,
        /// Site address
        #[arg(short, long, default_value = "")]
        address: String,
        /// Client name or ID
        #[arg(short, long)]
        client: Option<String>,
    },
    /// List projects with their financial summaries
    List {
        /// Filter by status (active, completed, archived)
        #[arg(short, long)]
        status: Option<String>,
        /// Include archived projects
        #[arg(short, long)]
        all: bool,
    },
    /// Show a project's details and financial summary
    Show {
        /// Project title or ID
        project: String,
    },
    /// Edit a project
    Edit {
        /// Project title or ID
        project: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New address
        #[arg(short, long)]
        address: Option<String>,
        /// New notes
        #[arg(long)]
        notes: Option<String>,
        /// Attach a client by name or ID
        #[arg(short, long)]
        client: Option<String>,
        /// Detach the current client
        #[arg(long, conflicts_with = "client")]
        no_client: bool,
    },
    /// Mark a project as completed
    Complete {
        /// Project title or ID
        project: String,
    },
    /// Archive a project
    Archive {
        /// Project title or ID
        project: String,
    },
    /// Reactivate a completed or archived project
    Reactivate {
        /// Project title or ID
        project: String,
    },
    /// Delete a project and all its quotes, expenses and payments
    Delete {
        /// Project title or ID
        project: String,
    },
}

/// Handle a project command
pub fn handle_project_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ProjectCommands,
) -> SiteKickResult<()> {
    let service = ProjectService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        ProjectCommands::Create {
            title,
            address,
            client,
        } => {
            let client_id = match client {
                Some(identifier) => {
                    let client_service = ClientService::new(storage);
                    let found = client_service
                        .find(&identifier)?
                        .ok_or_else(|| SiteKickError::client_not_found(&identifier))?;
                    Some(found.id)
                }
                None => None,
            };

            let project = service.create(&title, &address, client_id)?;
            println!("Created project: {}", project.title);
            println!("  ID: {}", project.id);
        }

        ProjectCommands::List { status, all } => {
            let status = match status {
                Some(s) => Some(parse_status(&s)?),
                None => None,
            };

            let mut summaries = service.list_summaries(status)?;
            if status.is_none() && !all {
                summaries.retain(|s| !s.project.is_archived());
            }
            println!("{}", format_project_list(&summaries, symbol));
        }

        ProjectCommands::Show { project } => {
            let found = service
                .find(&project)?
                .ok_or_else(|| SiteKickError::project_not_found(&project))?;

            let summary = service.summary(found.id)?;
            print!("{}", format_project_details(&summary, symbol));
        }

        ProjectCommands::Edit {
            project,
            title,
            address,
            notes,
            client,
            no_client,
        } => {
            let found = service
                .find(&project)?
                .ok_or_else(|| SiteKickError::project_not_found(&project))?;

            if title.is_none() && address.is_none() && notes.is_none() && client.is_none() && !no_client
            {
                println!(
                    "No changes specified. Use --title, --address, --notes, --client or --no-client."
                );
                return Ok(());
            }

            let client_change = if no_client {
                Some(None)
            } else if let Some(identifier) = client {
                let client_service = ClientService::new(storage);
                let found_client = client_service
                    .find(&identifier)?
                    .ok_or_else(|| SiteKickError::client_not_found(&identifier))?;
                Some(Some(found_client.id))
            } else {
                None
            };

            let updated = service.update(
                found.id,
                title.as_deref(),
                address.as_deref(),
                notes.as_deref(),
                client_change,
            )?;
            println!("Updated project: {}", updated.title);
        }

        ProjectCommands::Complete { project } => {
            let found = service
                .find(&project)?
                .ok_or_else(|| SiteKickError::project_not_found(&project))?;
            let updated = service.set_status(found.id, ProjectStatus::Completed)?;
            println!("Completed project: {}", updated.title);
        }

        ProjectCommands::Archive { project } => {
            let found = service
                .find(&project)?
                .ok_or_else(|| SiteKickError::project_not_found(&project))?;
            let updated = service.set_status(found.id, ProjectStatus::Archived)?;
            println!("Archived project: {}", updated.title);
        }

        ProjectCommands::Reactivate { project } => {
            let found = service
                .find(&project)?
                .ok_or_else(|| SiteKickError::project_not_found(&project))?;
            let updated = service.set_status(found.id, ProjectStatus::Active)?;
            println!("Reactivated project: {}", updated.title);
        }

        ProjectCommands::Delete { project } => {
            let found = service
                .find(&project)?
                .ok_or_else(|| SiteKickError::project_not_found(&project))?;
            service.delete(found.id)?;
            println!("Deleted project: {}", found.title);
        }
    }

    Ok(())
}

fn parse_status(s: &str) -> SiteKickResult<ProjectStatus> {
    ProjectStatus::parse(s).ok_or_else(|| {
        SiteKickError::Validation(format!(
            "Invalid status: '{}'. Valid statuses: active, completed, archived",
            s
        ))
    })
}
