//! Project Summary Report
//!
//! The full financial picture of one project: its quotes with totals, the
//! expense and payment registers, expected profit and balance due.

use std::io::Write;

use crate::engine::{self, ProjectTotals};
use crate::error::{SiteKickError, SiteKickResult};
use crate::models::{Client, Expense, Money, Payment, Project};
use crate::services::ProjectService;
use crate::storage::Storage;

/// A quote with its derived total, one row of the quotes section
#[derive(Debug, Clone)]
pub struct QuoteRow {
    pub title: String,
    pub public_id: String,
    pub item_count: usize,
    pub total: Money,
}

/// Project Summary Report
#[derive(Debug, Clone)]
pub struct ProjectSummaryReport {
    pub project: Project,
    /// The client, if one is attached
    pub client: Option<Client>,
    pub quotes: Vec<QuoteRow>,
    pub expenses: Vec<Expense>,
    pub payments: Vec<Payment>,
    /// Derived aggregates, recomputed at generation time
    pub totals: ProjectTotals,
}

impl ProjectSummaryReport {
    /// Generate a summary for a project found by title or ID
    pub fn generate(storage: &Storage, identifier: &str) -> SiteKickResult<Self> {
        let service = ProjectService::new(storage);
        let project = service
            .find(identifier)?
            .ok_or_else(|| SiteKickError::project_not_found(identifier.to_string()))?;

        let summary = service.summary(project.id)?;

        let mut quotes = Vec::new();
        for quote in storage.quotes.get_by_project(project.id)? {
            let totals = engine::quote_totals(&quote.items)?;
            quotes.push(QuoteRow {
                title: quote.title,
                public_id: quote.public_id,
                item_count: quote.items.len(),
                total: totals.total_amount,
            });
        }

        let expenses = storage.expenses.get_by_project(project.id)?;
        let payments = storage.payments.get_by_project(project.id)?;

        Ok(Self {
            project: summary.project,
            client: summary.client,
            quotes,
            expenses,
            payments,
            totals: summary.totals,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Project: {}\n", self.project.title));
        if let Some(client) = &self.client {
            output.push_str(&format!("Client: {}\n", client.name));
        }
        if !self.project.address.is_empty() {
            output.push_str(&format!("Address: {}\n", self.project.address));
        }
        output.push_str(&format!("Status: {}\n", self.project.status));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if !self.quotes.is_empty() {
            output.push_str("\nQUOTES\n");
            for quote in &self.quotes {
                output.push_str(&format!(
                    "  {:<36} {:>5} items {:>14}\n",
                    quote.title,
                    quote.item_count,
                    quote.total.format_with_symbol(currency_symbol)
                ));
            }
        }

        if !self.expenses.is_empty() {
            output.push_str("\nEXPENSES\n");
            for expense in &self.expenses {
                output.push_str(&format!(
                    "  {} {:<34} {:>14}\n",
                    expense.expense_date.format("%Y-%m-%d"),
                    expense.description,
                    expense.amount.format_with_symbol(currency_symbol)
                ));
            }
        }

        if !self.payments.is_empty() {
            output.push_str("\nPAYMENTS\n");
            for payment in &self.payments {
                output.push_str(&format!(
                    "  {} {:<34} {:>14}\n",
                    payment.payment_date.format("%Y-%m-%d"),
                    payment.description,
                    payment.amount.format_with_symbol(currency_symbol)
                ));
            }
        }

        output.push('\n');
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<44} {:>14}\n",
            "Total quoted:",
            self.totals.total_quote_amount.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<44} {:>14}\n",
            "Total expenses:",
            self.totals.total_expenses.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<44} {:>14}\n",
            "Payments received:",
            self.totals.total_payments_received.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<44} {:>14}\n",
            "Expected profit:",
            self.totals.expected_profit.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<44} {:>14}\n",
            "Balance due:",
            self.totals.balance_due.format_with_symbol(currency_symbol)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SiteKickResult<()> {
        writeln!(writer, "Section,Date,Description,Amount")
            .map_err(|e| SiteKickError::Export(e.to_string()))?;

        for quote in &self.quotes {
            writeln!(
                writer,
                "Quote,,{},{}",
                quote.title,
                quote.total.to_decimal_string()
            )
            .map_err(|e| SiteKickError::Export(e.to_string()))?;
        }
        for expense in &self.expenses {
            writeln!(
                writer,
                "Expense,{},{},{}",
                expense.expense_date.format("%Y-%m-%d"),
                expense.description,
                expense.amount.to_decimal_string()
            )
            .map_err(|e| SiteKickError::Export(e.to_string()))?;
        }
        for payment in &self.payments {
            writeln!(
                writer,
                "Payment,{},{},{}",
                payment.payment_date.format("%Y-%m-%d"),
                payment.description,
                payment.amount.to_decimal_string()
            )
            .map_err(|e| SiteKickError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "Total,,Total quoted,{}",
            self.totals.total_quote_amount.to_decimal_string()
        )
        .map_err(|e| SiteKickError::Export(e.to_string()))?;
        writeln!(
            writer,
            "Total,,Expected profit,{}",
            self.totals.expected_profit.to_decimal_string()
        )
        .map_err(|e| SiteKickError::Export(e.to_string()))?;
        writeln!(
            writer,
            "Total,,Balance due,{}",
            self.totals.balance_due.to_decimal_string()
        )
        .map_err(|e| SiteKickError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SiteKickPaths;
    use crate::models::{ItemKind, ProjectId, Quantity, Quote, QuoteItem};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SiteKickPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, day).unwrap()
    }

    fn setup_project(storage: &Storage) -> ProjectId {
        let project = Project::new("Bathroom remodel");
        let project_id = project.id;
        storage.projects.upsert(project).unwrap();

        let mut quote = Quote::new(project_id, "Main estimate");
        quote.add_item(QuoteItem::new(
            "Tiling",
            ItemKind::Work,
            Quantity::parse("25").unwrap(),
            Money::parse("600").unwrap(),
        ));
        quote.add_item(QuoteItem::new(
            "Tile",
            ItemKind::Material,
            Quantity::parse("38").unwrap(),
            Money::parse("1250").unwrap(),
        ));
        storage.quotes.upsert(quote).unwrap();

        storage
            .expenses
            .upsert(Expense::new(
                project_id,
                Money::parse("5000").unwrap(),
                "Tile purchase",
                date(3),
            ))
            .unwrap();
        storage
            .payments
            .upsert(Payment::new(
                project_id,
                Money::parse("50000").unwrap(),
                "Advance",
                date(1),
            ))
            .unwrap();

        project_id
    }

    #[test]
    fn test_generate_report() {
        let (_temp_dir, storage) = create_test_storage();
        setup_project(&storage);

        let report = ProjectSummaryReport::generate(&storage, "Bathroom remodel").unwrap();

        assert_eq!(report.quotes.len(), 1);
        assert_eq!(report.expenses.len(), 1);
        assert_eq!(report.payments.len(), 1);
        assert_eq!(report.totals.total_quote_amount.cents(), 6_250_000);
        assert_eq!(report.totals.expected_profit.cents(), 5_750_000);
        assert_eq!(report.totals.balance_due.cents(), 1_250_000);
    }

    #[test]
    fn test_terminal_format() {
        let (_temp_dir, storage) = create_test_storage();
        setup_project(&storage);

        let report = ProjectSummaryReport::generate(&storage, "Bathroom remodel").unwrap();
        let output = report.format_terminal("$");

        assert!(output.contains("Bathroom remodel"));
        assert!(output.contains("QUOTES"));
        assert!(output.contains("EXPENSES"));
        assert!(output.contains("PAYMENTS"));
        assert!(output.contains("Balance due:"));
        assert!(output.contains("$12500.00"));
    }

    #[test]
    fn test_terminal_format_uses_configured_symbol() {
        let (_temp_dir, storage) = create_test_storage();
        setup_project(&storage);

        let report = ProjectSummaryReport::generate(&storage, "Bathroom remodel").unwrap();
        let output = report.format_terminal("€");

        assert!(output.contains("€12500.00"));
        assert!(!output.contains('$'));
    }

    #[test]
    fn test_csv_export() {
        let (_temp_dir, storage) = create_test_storage();
        setup_project(&storage);

        let report = ProjectSummaryReport::generate(&storage, "Bathroom remodel").unwrap();

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("Section,Date,Description,Amount"));
        assert!(csv_string.contains("Expense,2025-05-03,Tile purchase,5000.00"));
        assert!(csv_string.contains("Total,,Balance due,12500.00"));
    }
}
