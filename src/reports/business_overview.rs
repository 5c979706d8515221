//! Business Overview Report
//!
//! Rolls the per-project aggregates up across the whole business so a
//! contractor can see quoted work, money out and money in at a glance.

use std::io::Write;

use crate::error::{SiteKickError, SiteKickResult};
use crate::models::{Money, ProjectStatus};
use crate::services::ProjectService;
use crate::storage::Storage;

/// One project's line in the overview
#[derive(Debug, Clone)]
pub struct OverviewRow {
    pub title: String,
    pub status: ProjectStatus,
    pub client_name: Option<String>,
    pub total_quoted: Money,
    pub total_expenses: Money,
    pub payments_received: Money,
    pub expected_profit: Money,
    pub balance_due: Money,
}

/// Business Overview Report
#[derive(Debug, Clone)]
pub struct BusinessOverviewReport {
    /// The status filter applied, if any
    pub status: Option<ProjectStatus>,
    pub rows: Vec<OverviewRow>,
    pub total_quoted: Money,
    pub total_expenses: Money,
    pub total_payments: Money,
    pub total_profit: Money,
    pub total_balance_due: Money,
}

impl BusinessOverviewReport {
    /// Generate the overview across projects matching the status filter
    pub fn generate(storage: &Storage, status: Option<ProjectStatus>) -> SiteKickResult<Self> {
        let service = ProjectService::new(storage);
        let summaries = service.list_summaries(status)?;

        let mut rows = Vec::with_capacity(summaries.len());
        let mut total_quoted = Money::zero();
        let mut total_expenses = Money::zero();
        let mut total_payments = Money::zero();
        let mut total_profit = Money::zero();
        let mut total_balance_due = Money::zero();

        for summary in summaries {
            total_quoted += summary.totals.total_quote_amount;
            total_expenses += summary.totals.total_expenses;
            total_payments += summary.totals.total_payments_received;
            total_profit += summary.totals.expected_profit;
            total_balance_due += summary.totals.balance_due;

            rows.push(OverviewRow {
                title: summary.project.title,
                status: summary.project.status,
                client_name: summary.client.map(|c| c.name),
                total_quoted: summary.totals.total_quote_amount,
                total_expenses: summary.totals.total_expenses,
                payments_received: summary.totals.total_payments_received,
                expected_profit: summary.totals.expected_profit,
                balance_due: summary.totals.balance_due,
            });
        }

        Ok(Self {
            status,
            rows,
            total_quoted,
            total_expenses,
            total_payments,
            total_profit,
            total_balance_due,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        match self.status {
            Some(status) => output.push_str(&format!("Business Overview - {} projects\n", status)),
            None => output.push_str("Business Overview - all projects\n"),
        }
        output.push_str(&"=".repeat(96));
        output.push('\n');

        output.push_str(&format!(
            "{:<28} {:>13} {:>13} {:>13} {:>12} {:>12}\n",
            "Project", "Quoted", "Expenses", "Payments", "Profit", "Balance"
        ));
        output.push_str(&"-".repeat(96));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<28} {:>13} {:>13} {:>13} {:>12} {:>12}\n",
                row.title,
                row.total_quoted.format_with_symbol(currency_symbol),
                row.total_expenses.format_with_symbol(currency_symbol),
                row.payments_received.format_with_symbol(currency_symbol),
                row.expected_profit.format_with_symbol(currency_symbol),
                row.balance_due.format_with_symbol(currency_symbol)
            ));
        }

        output.push_str(&"-".repeat(96));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>13} {:>13} {:>13} {:>12} {:>12}\n",
            "TOTAL",
            self.total_quoted.format_with_symbol(currency_symbol),
            self.total_expenses.format_with_symbol(currency_symbol),
            self.total_payments.format_with_symbol(currency_symbol),
            self.total_profit.format_with_symbol(currency_symbol),
            self.total_balance_due.format_with_symbol(currency_symbol)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SiteKickResult<()> {
        writeln!(
            writer,
            "Project,Status,Client,Quoted,Expenses,Payments,Profit,Balance Due"
        )
        .map_err(|e| SiteKickError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{},{},{},{},{},{}",
                row.title,
                row.status,
                row.client_name.as_deref().unwrap_or(""),
                row.total_quoted.to_decimal_string(),
                row.total_expenses.to_decimal_string(),
                row.payments_received.to_decimal_string(),
                row.expected_profit.to_decimal_string(),
                row.balance_due.to_decimal_string(),
            )
            .map_err(|e| SiteKickError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "TOTAL,,,{},{},{},{},{}",
            self.total_quoted.to_decimal_string(),
            self.total_expenses.to_decimal_string(),
            self.total_payments.to_decimal_string(),
            self.total_profit.to_decimal_string(),
            self.total_balance_due.to_decimal_string(),
        )
        .map_err(|e| SiteKickError::Export(e.to_string()))?;

        Ok(())
    }
}
