//! Catalog CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::catalog::format_catalog_list;
use crate::error::{SiteKickError, SiteKickResult};
use crate::models::{ItemKind, Money};
use crate::services::CatalogService;
use crate::storage::Storage;

/// Catalog subcommands
#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Add an item to the catalog
    Add {
        /// Item name
        name: String,
        /// Item kind (work, material)
        #[arg(short, long, default_value = "work")]
        kind: String,
        /// Unit of measure
        #[arg(short, long, default_value = "pcs")]
        unit: String,
        /// Suggested unit price
        #[arg(short, long)]
        price: Option<String>,
    },
    /// List catalog items, most used first
    List,
    /// Search the catalog
    Search {
        /// Search term
        query: String,
        /// Restrict to one kind (work, material)
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// Delete a catalog item by name
    Delete {
        /// Item name
        name: String,
        /// Item kind (work, material)
        #[arg(short, long, default_value = "work")]
        kind: String,
    },
}

/// Handle a catalog command
pub fn handle_catalog_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CatalogCommands,
) -> SiteKickResult<()> {
    let service = CatalogService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        CatalogCommands::Add {
            name,
            kind,
            unit,
            price,
        } => {
            let kind = parse_kind(&kind)?;
            let price = match price {
                Some(p) => Some(Money::parse(&p).map_err(|e| {
                    SiteKickError::Validation(format!("Invalid price '{}': {}", p, e))
                })?),
                None => None,
            };

            let item = service.add(&name, kind, &unit, price)?;
            println!("Added catalog item: {} ({})", item.name, item.kind);
        }

        CatalogCommands::List => {
            let items = service.list()?;
            println!("{}", format_catalog_list(&items, symbol));
        }

        CatalogCommands::Search { query, kind } => {
            let kind = match kind {
                Some(k) => Some(parse_kind(&k)?),
                None => None,
            };
            let items = service.search(&query, kind)?;
            println!("{}", format_catalog_list(&items, symbol));
        }

        CatalogCommands::Delete { name, kind } => {
            let kind = parse_kind(&kind)?;
            let item = storage
                .catalog
                .get_by_name(&name, kind)?
                .ok_or_else(|| SiteKickError::NotFound {
                    entity_type: "Catalog item",
                    identifier: name.clone(),
                })?;

            service.delete(item.id)?;
            println!("Deleted catalog item: {}", item.name);
        }
    }

    Ok(())
}

fn parse_kind(s: &str) -> SiteKickResult<ItemKind> {
    ItemKind::parse(s).ok_or_else(|| {
        SiteKickError::Validation(format!(
            "Invalid item kind: '{}'. Valid kinds: work, material",
            s
        ))
    })
}
