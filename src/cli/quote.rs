//! Quote CLI commands
//!
//! Quote and line-item management plus the client-facing detail view, which
//! prints the business profile from settings in its header.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::quote::{format_quote_detail, format_quote_list};
use crate::engine;
use crate::error::{SiteKickError, SiteKickResult};
use crate::models::{ItemKind, Money, Quantity};
use crate::services::{ProjectService, QuoteService};
use crate::storage::Storage;

/// Quote subcommands
#[derive(Subcommand)]
pub enum QuoteCommands {
    /// Create a new quote on a project
    Create {
        /// Project title or ID
        project: String,
        /// Quote title
        title: String,
    },
    /// List quotes for a project
    List {
        /// Project title or ID
        project: String,
    },
    /// Show a quote with its line items and totals
    Show {
        /// Quote ID or share code
        quote: String,
    },
    /// Edit a quote's title or notes
    Edit {
        /// Quote ID or share code
        quote: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a quote
    Delete {
        /// Quote ID or share code
        quote: String,
    },
    /// Add a line item to a quote
    AddItem {
        /// Quote ID or share code
        quote: String,
        /// Item name
        name: String,
        /// Quantity (e.g. "25" or "2.5")
        quantity: String,
        /// Price per unit (e.g. "600.00")
        price: String,
        /// Item kind (work, material)
        #[arg(short, long, default_value = "work")]
        kind: String,
        /// Unit of measure (defaults to the configured unit)
        #[arg(short, long)]
        unit: Option<String>,
    },
    /// Edit a line item
    EditItem {
        /// Quote ID or share code
        quote: String,
        /// 1-based item number as shown by `quote show`
        item: usize,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New quantity
        #[arg(short = 'q', long)]
        quantity: Option<String>,
        /// New unit price
        #[arg(short, long)]
        price: Option<String>,
    },
    /// Remove a line item
    RemoveItem {
        /// Quote ID or share code
        quote: String,
        /// 1-based item number as shown by `quote show`
        item: usize,
    },
}

/// Handle a quote command
pub fn handle_quote_command(
    storage: &Storage,
    settings: &Settings,
    cmd: QuoteCommands,
) -> SiteKickResult<()> {
    let service = QuoteService::new(storage);

    match cmd {
        QuoteCommands::Create { project, title } => {
            let project_service = ProjectService::new(storage);
            let found = project_service
                .find(&project)?
                .ok_or_else(|| SiteKickError::project_not_found(&project))?;

            let quote = service.create(found.id, &title)?;
            println!("Created quote: {}", quote.title);
            println!("  Share code: {}", quote.public_id);
        }

        QuoteCommands::List { project } => {
            let project_service = ProjectService::new(storage);
            let found = project_service
                .find(&project)?
                .ok_or_else(|| SiteKickError::project_not_found(&project))?;

            let quotes = service.list_by_project(found.id)?;
            let mut with_totals = Vec::with_capacity(quotes.len());
            for quote in quotes {
                let totals = engine::quote_totals(&quote.items)?;
                with_totals.push((quote, totals.total_amount));
            }
            println!(
                "{}",
                format_quote_list(&with_totals, &settings.currency_symbol)
            );
        }

        QuoteCommands::Show { quote } => {
            let found = service
                .find(&quote)?
                .ok_or_else(|| SiteKickError::quote_not_found(&quote))?;

            let summary = service.summary(found.id)?;
            print!("{}", format_quote_detail(&summary, settings));
        }

        QuoteCommands::Edit {
            quote,
            title,
            notes,
        } => {
            let found = service
                .find(&quote)?
                .ok_or_else(|| SiteKickError::quote_not_found(&quote))?;

            if title.is_none() && notes.is_none() {
                println!("No changes specified. Use --title or --notes.");
                return Ok(());
            }

            let updated = service.update(found.id, title.as_deref(), notes.as_deref())?;
            println!("Updated quote: {}", updated.title);
        }

        QuoteCommands::Delete { quote } => {
            let found = service
                .find(&quote)?
                .ok_or_else(|| SiteKickError::quote_not_found(&quote))?;
            service.delete(found.id)?;
            println!("Deleted quote: {}", found.title);
        }

        QuoteCommands::AddItem {
            quote,
            name,
            quantity,
            price,
            kind,
            unit,
        } => {
            let found = service
                .find(&quote)?
                .ok_or_else(|| SiteKickError::quote_not_found(&quote))?;

            let kind = parse_kind(&kind)?;
            let quantity = parse_quantity(&quantity)?;
            let price = parse_price(&price)?;
            let unit = unit.unwrap_or_else(|| settings.default_unit.clone());

            let item = service.add_item(found.id, &name, kind, &unit, quantity, price)?;
            let line_total = quantity.times(price);
            println!(
                "Added {} item: {} ({} {} x {} = {})",
                item.kind,
                item.name,
                item.quantity,
                item.unit,
                item.unit_price.format_with_symbol(&settings.currency_symbol),
                line_total.format_with_symbol(&settings.currency_symbol)
            );
        }

        QuoteCommands::EditItem {
            quote,
            item,
            name,
            quantity,
            price,
        } => {
            let found = service
                .find(&quote)?
                .ok_or_else(|| SiteKickError::quote_not_found(&quote))?;

            if name.is_none() && quantity.is_none() && price.is_none() {
                println!("No changes specified. Use --name, --quantity or --price.");
                return Ok(());
            }

            let item_id = item_id_by_number(&service, found.id, item)?;
            let quantity = match quantity {
                Some(q) => Some(parse_quantity(&q)?),
                None => None,
            };
            let price = match price {
                Some(p) => Some(parse_price(&p)?),
                None => None,
            };

            let updated = service.update_item(found.id, item_id, name.as_deref(), quantity, price)?;
            println!("Updated item: {}", updated.name);
        }

        QuoteCommands::RemoveItem { quote, item } => {
            let found = service
                .find(&quote)?
                .ok_or_else(|| SiteKickError::quote_not_found(&quote))?;

            let item_id = item_id_by_number(&service, found.id, item)?;
            service.remove_item(found.id, item_id)?;
            println!("Removed item {} from {}", item, found.title);
        }
    }

    Ok(())
}

/// Resolve a 1-based display position to an item ID
fn item_id_by_number(
    service: &QuoteService,
    quote_id: crate::models::QuoteId,
    number: usize,
) -> SiteKickResult<crate::models::QuoteItemId> {
    let quote = service
        .get(quote_id)?
        .ok_or_else(|| SiteKickError::quote_not_found(quote_id.to_string()))?;

    quote
        .items_ordered()
        .get(number.wrapping_sub(1))
        .map(|item| item.id)
        .ok_or_else(|| SiteKickError::quote_item_not_found(format!("#{}", number)))
}

fn parse_kind(s: &str) -> SiteKickResult<ItemKind> {
    ItemKind::parse(s).ok_or_else(|| {
        SiteKickError::Validation(format!(
            "Invalid item kind: '{}'. Valid kinds: work, material",
            s
        ))
    })
}

fn parse_quantity(s: &str) -> SiteKickResult<Quantity> {
    Quantity::parse(s)
        .map_err(|e| SiteKickError::Validation(format!("Invalid quantity '{}': {}", s, e)))
}

fn parse_price(s: &str) -> SiteKickResult<Money> {
    Money::parse(s)
        .map_err(|e| SiteKickError::Validation(format!("Invalid price '{}': {}", s, e)))
}
