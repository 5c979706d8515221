//! Payment CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{SiteKickError, SiteKickResult};
use crate::models::Money;
use crate::services::{PaymentService, ProjectService};
use crate::storage::Storage;

use super::expense::parse_date_or_today;

/// Payment subcommands
#[derive(Subcommand)]
pub enum PaymentCommands {
    /// Record a payment received on a project
    Add {
        /// Project title or ID
        project: String,
        /// Amount received (e.g. "20000.00")
        amount: String,
        /// What the payment covers ("advance", "final payment")
        #[arg(short, long, default_value = "")]
        description: String,
        /// Payment date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List payments for a project
    List {
        /// Project title or ID
        project: String,
    },
    /// Delete a payment by its 1-based number in the list
    Delete {
        /// Project title or ID
        project: String,
        /// 1-based payment number as shown by `payment list`
        number: usize,
    },
}

/// Handle a payment command
pub fn handle_payment_command(
    storage: &Storage,
    settings: &Settings,
    cmd: PaymentCommands,
) -> SiteKickResult<()> {
    let service = PaymentService::new(storage);
    let project_service = ProjectService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        PaymentCommands::Add {
            project,
            amount,
            description,
            date,
        } => {
            let found = project_service
                .find(&project)?
                .ok_or_else(|| SiteKickError::project_not_found(&project))?;

            let amount = Money::parse(&amount)
                .map_err(|e| SiteKickError::Validation(format!("Invalid amount '{}': {}", amount, e)))?;
            let date = parse_date_or_today(date.as_deref())?;

            let payment = service.add(found.id, amount, &description, date)?;
            println!(
                "Recorded payment: {} {} on {}",
                payment.amount.format_with_symbol(symbol),
                payment.description,
                payment.payment_date
            );
        }

        PaymentCommands::List { project } => {
            let found = project_service
                .find(&project)?
                .ok_or_else(|| SiteKickError::project_not_found(&project))?;

            let payments = service.list(found.id)?;
            if payments.is_empty() {
                println!("No payments recorded for {}.", found.title);
                return Ok(());
            }

            let mut total = Money::zero();
            for (index, payment) in payments.iter().enumerate() {
                total += payment.amount;
                println!(
                    "{:>3}. {} {:>12}  {}",
                    index + 1,
                    payment.payment_date.format("%Y-%m-%d"),
                    payment.amount.format_with_symbol(symbol),
                    payment.description
                );
            }
            println!("     Total: {}", total.format_with_symbol(symbol));
        }

        PaymentCommands::Delete { project, number } => {
            let found = project_service
                .find(&project)?
                .ok_or_else(|| SiteKickError::project_not_found(&project))?;

            let payments = service.list(found.id)?;
            let payment = payments
                .get(number.wrapping_sub(1))
                .ok_or_else(|| SiteKickError::payment_not_found(format!("#{}", number)))?;

            service.delete(payment.id)?;
            println!(
                "Deleted payment: {} {}",
                payment.amount.format_with_symbol(symbol),
                payment.description
            );
        }
    }

    Ok(())
}
