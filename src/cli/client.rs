//! Client CLI commands

use clap::Subcommand;

use crate::display::client::{format_client_details, format_client_list};
use crate::error::{SiteKickError, SiteKickResult};
use crate::services::ClientService;
use crate::storage::Storage;

/// Client subcommands
#[derive(Subcommand)]
pub enum ClientCommands {
    /// Add a new client
    Add {
        /// Client name
        name: String,
        /// Contact phone
        #[arg(short, long, default_value = "")]
        phone: String,
        /// Contact email
        #[arg(short, long, default_value = "")]
        email: String,
    },
    /// List all clients
    List {
        /// Filter by a search term (name, phone or email)
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show client details
    Show {
        /// Client name or ID
        client: String,
    },
    /// Edit a client
    Edit {
        /// Client name or ID
        client: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New phone
        #[arg(short, long)]
        phone: Option<String>,
        /// New email
        #[arg(short, long)]
        email: Option<String>,
        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a client (their projects are kept, without a client)
    Delete {
        /// Client name or ID
        client: String,
    },
}

/// Handle a client command
pub fn handle_client_command(storage: &Storage, cmd: ClientCommands) -> SiteKickResult<()> {
    let service = ClientService::new(storage);

    match cmd {
        ClientCommands::Add { name, phone, email } => {
            let client = service.create(&name, &phone, &email)?;
            println!("Added client: {}", client.name);
            println!("  ID: {}", client.id);
        }

        ClientCommands::List { search } => {
            let clients = match search {
                Some(query) => service.search(&query)?,
                None => service.list()?,
            };
            println!("{}", format_client_list(&clients));
        }

        ClientCommands::Show { client } => {
            let found = service
                .find(&client)?
                .ok_or_else(|| SiteKickError::client_not_found(&client))?;

            let project_count = storage
                .projects
                .get_all()?
                .iter()
                .filter(|p| p.client_id == Some(found.id))
                .count();
            print!("{}", format_client_details(&found, project_count));
        }

        ClientCommands::Edit {
            client,
            name,
            phone,
            email,
            notes,
        } => {
            let found = service
                .find(&client)?
                .ok_or_else(|| SiteKickError::client_not_found(&client))?;

            if name.is_none() && phone.is_none() && email.is_none() && notes.is_none() {
                println!("No changes specified. Use --name, --phone, --email or --notes.");
                return Ok(());
            }

            let updated = service.update(
                found.id,
                name.as_deref(),
                phone.as_deref(),
                email.as_deref(),
                notes.as_deref(),
            )?;
            println!("Updated client: {}", updated.name);
        }

        ClientCommands::Delete { client } => {
            let found = service
                .find(&client)?
                .ok_or_else(|| SiteKickError::client_not_found(&client))?;

            let detached = service.delete(found.id)?;
            println!("Deleted client: {}", found.name);
            if detached > 0 {
                println!("  {} project(s) kept without a client", detached);
            }
        }
    }

    Ok(())
}
