//! Quote Breakdown Report
//!
//! A line-by-line breakdown of one quote with Work and Material subtotals
//! and the grand total, formatted for the terminal or exported as CSV.

use std::io::Write;

use crate::engine::QuoteTotals;
use crate::error::{SiteKickError, SiteKickResult};
use crate::models::{ItemKind, Money, Quantity, Quote};
use crate::services::QuoteService;
use crate::storage::Storage;

/// One line of the breakdown
#[derive(Debug, Clone)]
pub struct BreakdownRow {
    pub name: String,
    pub kind: ItemKind,
    pub unit: String,
    pub quantity: Quantity,
    pub unit_price: Money,
    pub line_total: Money,
}

/// Quote Breakdown Report
#[derive(Debug, Clone)]
pub struct QuoteBreakdownReport {
    /// The quote being broken down
    pub quote: Quote,
    /// Lines in display order
    pub rows: Vec<BreakdownRow>,
    /// Work/Material subtotals and grand total
    pub totals: QuoteTotals,
}

impl QuoteBreakdownReport {
    /// Generate a breakdown for a quote found by ID or public ID
    pub fn generate(storage: &Storage, identifier: &str) -> SiteKickResult<Self> {
        let service = QuoteService::new(storage);
        let quote = service
            .find(identifier)?
            .ok_or_else(|| SiteKickError::quote_not_found(identifier.to_string()))?;

        let summary = service.summary(quote.id)?;

        let rows = summary
            .lines
            .iter()
            .map(|line| BreakdownRow {
                name: line.item.name.clone(),
                kind: line.item.kind,
                unit: line.item.unit.clone(),
                quantity: line.item.quantity,
                unit_price: line.item.unit_price,
                line_total: line.line_total,
            })
            .collect();

        Ok(Self {
            quote: summary.quote,
            rows,
            totals: summary.totals,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Quote: {}\n", self.quote.title));
        output.push_str(&format!("Share code: {}\n", self.quote.public_id));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        output.push_str(&format!(
            "{:<30} {:>9} {:>6} {:>12} {:>14}\n",
            "Item", "Qty", "Unit", "Unit price", "Total"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for kind in [ItemKind::Work, ItemKind::Material] {
            let rows: Vec<_> = self.rows.iter().filter(|r| r.kind == kind).collect();
            if rows.is_empty() {
                continue;
            }

            output.push_str(&format!("\n{}\n", kind.to_string().to_uppercase()));
            for row in rows {
                output.push_str(&format!(
                    "  {:<28} {:>9} {:>6} {:>12} {:>14}\n",
                    row.name,
                    row.quantity.to_string(),
                    row.unit,
                    row.unit_price.format_with_symbol(currency_symbol),
                    row.line_total.format_with_symbol(currency_symbol)
                ));
            }

            let subtotal = match kind {
                ItemKind::Work => self.totals.work_amount,
                ItemKind::Material => self.totals.material_amount,
            };
            output.push_str(&format!(
                "  {:<58} {:>14}\n",
                "Subtotal:",
                subtotal.format_with_symbol(currency_symbol)
            ));
        }

        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<60} {:>14}\n",
            "GRAND TOTAL",
            self.totals.total_amount.format_with_symbol(currency_symbol)
        ));

        if !self.quote.notes.is_empty() {
            output.push_str(&format!("\nNotes: {}\n", self.quote.notes));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SiteKickResult<()> {
        writeln!(writer, "Item,Kind,Unit,Quantity,Unit Price,Line Total")
            .map_err(|e| SiteKickError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{},{},{},{}",
                row.name,
                row.kind,
                row.unit,
                row.quantity,
                row.unit_price.to_decimal_string(),
                row.line_total.to_decimal_string(),
            )
            .map_err(|e| SiteKickError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "Work subtotal,,,,,{}",
            self.totals.work_amount.to_decimal_string()
        )
        .map_err(|e| SiteKickError::Export(e.to_string()))?;
        writeln!(
            writer,
            "Material subtotal,,,,,{}",
            self.totals.material_amount.to_decimal_string()
        )
        .map_err(|e| SiteKickError::Export(e.to_string()))?;
        writeln!(
            writer,
            "TOTAL,,,,,{}",
            self.totals.total_amount.to_decimal_string()
        )
        .map_err(|e| SiteKickError::Export(e.to_string()))?;

        Ok(())
    }
}
