//! Quote display formatting
//!
//! List tables for quotes and the client-facing detail view, which carries
//! the business profile and configured currency symbol from settings.

use tabled::{settings::Style, Table, Tabled};

use crate::config::settings::Settings;
use crate::models::{ItemKind, Money, Quote};
use crate::services::QuoteSummary;

#[derive(Tabled)]
struct QuoteListRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Share code")]
    public_id: String,
    #[tabled(rename = "Items")]
    items: usize,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format a list of quotes with their derived totals as a table
pub fn format_quote_list(quotes: &[(Quote, Money)], symbol: &str) -> String {
    if quotes.is_empty() {
        return "No quotes found.".to_string();
    }

    let rows: Vec<QuoteListRow> = quotes
        .iter()
        .map(|(quote, total)| QuoteListRow {
            title: quote.title.clone(),
            public_id: quote.public_id.clone(),
            items: quote.items.len(),
            total: total.format_with_symbol(symbol),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format a quote the way it would be handed to a client
pub fn format_quote_detail(summary: &QuoteSummary, settings: &Settings) -> String {
    let business = &settings.business;
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    if !business.is_empty() {
        if !business.company_name.is_empty() {
            output.push_str(&format!("{}\n", business.company_name));
        }
        let mut contact = Vec::new();
        if !business.phone.is_empty() {
            contact.push(business.phone.clone());
        }
        if !business.email.is_empty() {
            contact.push(business.email.clone());
        }
        if !contact.is_empty() {
            output.push_str(&format!("{}\n", contact.join(" | ")));
        }
        output.push('\n');
    }

    output.push_str(&format!("Quote: {}\n", summary.quote.title));
    output.push_str(&format!("Share code: {}\n", summary.quote.public_id));
    output.push_str(&"=".repeat(76));
    output.push('\n');

    for kind in [ItemKind::Work, ItemKind::Material] {
        let lines: Vec<_> = summary
            .lines
            .iter()
            .filter(|l| l.item.kind == kind)
            .collect();
        if lines.is_empty() {
            continue;
        }

        output.push_str(&format!("\n{}\n", kind.to_string().to_uppercase()));
        for line in lines {
            output.push_str(&format!(
                "  {:<30} {:>8} {:>6} x {:>10} = {:>12}\n",
                line.item.name,
                line.item.quantity.to_string(),
                line.item.unit,
                line.item.unit_price.format_with_symbol(symbol),
                line.line_total.format_with_symbol(symbol)
            ));
        }

        let subtotal = match kind {
            ItemKind::Work => summary.totals.work_amount,
            ItemKind::Material => summary.totals.material_amount,
        };
        output.push_str(&format!(
            "  {:<61} {:>12}\n",
            "Subtotal:",
            subtotal.format_with_symbol(symbol)
        ));
    }

    output.push('\n');
    output.push_str(&"-".repeat(76));
    output.push('\n');
    output.push_str(&format!(
        "{:<63} {:>12}\n",
        "TOTAL",
        summary.totals.total_amount.format_with_symbol(symbol)
    ));

    if !summary.quote.notes.is_empty() {
        output.push_str(&format!("\n{}\n", summary.quote.notes));
    }

    output
}
