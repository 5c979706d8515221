//! Expense CLI commands

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{SiteKickError, SiteKickResult};
use crate::models::Money;
use crate::services::{ExpenseService, ProjectService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense against a project
    Add {
        /// Project title or ID
        project: String,
        /// Amount spent (e.g. "125.50")
        amount: String,
        /// What the money went on
        #[arg(short, long, default_value = "")]
        description: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List expenses for a project
    List {
        /// Project title or ID
        project: String,
    },
    /// Delete an expense by its 1-based number in the list
    Delete {
        /// Project title or ID
        project: String,
        /// 1-based expense number as shown by `expense list`
        number: usize,
    },
    /// Import expenses from a CSV file (date,amount,description)
    Import {
        /// Project title or ID
        project: String,
        /// Path to the CSV file
        file: PathBuf,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SiteKickResult<()> {
    let service = ExpenseService::new(storage);
    let project_service = ProjectService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        ExpenseCommands::Add {
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

            let expense = service.add(found.id, amount, &description, date)?;
            println!(
                "Recorded expense: {} {} on {}",
                expense.amount.format_with_symbol(symbol),
                expense.description,
                expense.expense_date
            );
        }

        ExpenseCommands::List { project } => {
            let found = project_service
                .find(&project)?
                .ok_or_else(|| SiteKickError::project_not_found(&project))?;

            let expenses = service.list(found.id)?;
            if expenses.is_empty() {
                println!("No expenses recorded for {}.", found.title);
                return Ok(());
            }

            let mut total = Money::zero();
            for (index, expense) in expenses.iter().enumerate() {
                total += expense.amount;
                println!(
                    "{:>3}. {} {:>12}  {}",
                    index + 1,
                    expense.expense_date.format("%Y-%m-%d"),
                    expense.amount.format_with_symbol(symbol),
                    expense.description
                );
            }
            println!("     Total: {}", total.format_with_symbol(symbol));
        }

        ExpenseCommands::Delete { project, number } => {
            let found = project_service
                .find(&project)?
                .ok_or_else(|| SiteKickError::project_not_found(&project))?;

            let expenses = service.list(found.id)?;
            let expense = expenses
                .get(number.wrapping_sub(1))
                .ok_or_else(|| SiteKickError::expense_not_found(format!("#{}", number)))?;

            service.delete(expense.id)?;
            println!(
                "Deleted expense: {} {}",
                expense.amount.format_with_symbol(symbol),
                expense.description
            );
        }

        ExpenseCommands::Import { project, file } => {
            let found = project_service
                .find(&project)?
                .ok_or_else(|| SiteKickError::project_not_found(&project))?;

            let result = service.import_csv(found.id, &file)?;
            println!("Imported {} expense(s).", result.imported);
            for (row, reason) in &result.skipped {
                println!("  Skipped row {}: {}", row, reason);
            }
        }
    }

    Ok(())
}

/// Parse a YYYY-MM-DD date, or default to today's local date
pub fn parse_date_or_today(date: Option<&str>) -> SiteKickResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            SiteKickError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s))
        }),
        None => Ok(Local::now().date_naive()),
    }
}
