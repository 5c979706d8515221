//! Project display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::services::ProjectSummary;

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Client")]
    client: String,
    #[tabled(rename = "Quoted")]
    quoted: String,
    #[tabled(rename = "Profit")]
    profit: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format a list of project summaries as a table
pub fn format_project_list(summaries: &[ProjectSummary], symbol: &str) -> String {
    if summaries.is_empty() {
        return "No projects found.".to_string();
    }

    let rows: Vec<ProjectRow> = summaries
        .iter()
        .map(|s| ProjectRow {
            title: s.project.title.clone(),
            status: s.project.status.to_string(),
            client: s
                .client
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            quoted: s.totals.total_quote_amount.format_with_symbol(symbol),
            profit: s.totals.expected_profit.format_with_symbol(symbol),
            balance: s.totals.balance_due.format_with_symbol(symbol),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format a single project's details with its financial summary
pub fn format_project_details(summary: &ProjectSummary, symbol: &str) -> String {
    let project = &summary.project;
    let mut output = String::new();

    output.push_str(&format!("Project: {}\n", project.title));
    output.push_str(&format!("  ID:       {}\n", project.id));
    output.push_str(&format!("  Status:   {}\n", project.status));
    if let Some(client) = &summary.client {
        output.push_str(&format!("  Client:   {}\n", client.name));
    }
    if !project.address.is_empty() {
        output.push_str(&format!("  Address:  {}\n", project.address));
    }

    output.push('\n');
    output.push_str(&format!(
        "  Quotes:   {} ({} total)\n",
        summary.quote_count,
        summary.totals.total_quote_amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Expenses: {} ({} total)\n",
        summary.expense_count,
        summary.totals.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Payments: {} ({} received)\n",
        summary.payment_count,
        summary.totals.total_payments_received.format_with_symbol(symbol)
    ));

    output.push('\n');
    output.push_str(&format!(
        "  Expected profit: {}\n",
        summary.totals.expected_profit.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Balance due:     {}\n",
        summary.totals.balance_due.format_with_symbol(symbol)
    ));

    if !project.notes.is_empty() {
        output.push('\n');
        output.push_str(&format!("  Notes: {}\n", project.notes));
    }

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        project.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        project.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ProjectTotals;
    use crate::models::{Money, Project};

    fn test_summary(title: &str) -> ProjectSummary {
        ProjectSummary {
            project: Project::new(title),
            client: None,
            totals: ProjectTotals {
                total_quote_amount: Money::from_cents(7_050_000),
                total_expenses: Money::from_cents(500_000),
                total_payments_received: Money::from_cents(5_000_000),
                expected_profit: Money::from_cents(6_550_000),
                balance_due: Money::from_cents(2_050_000),
            },
            quote_count: 1,
            expense_count: 2,
            payment_count: 1,
        }
    }

    #[test]
    fn test_format_project_list() {
        let summaries = vec![test_summary("Kitchen"), test_summary("Bathroom")];
        let output = format_project_list(&summaries, "$");

        assert!(output.contains("Kitchen"));
        assert!(output.contains("Bathroom"));
        assert!(output.contains("$70500.00"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_project_list(&[], "$");
        assert!(output.contains("No projects found"));
    }

    #[test]
    fn test_format_project_details() {
        let output = format_project_details(&test_summary("Kitchen"), "$");

        assert!(output.contains("Kitchen"));
        assert!(output.contains("Expected profit: $65500.00"));
        assert!(output.contains("Balance due:     $20500.00"));
    }

    #[test]
    fn test_configured_symbol_is_used() {
        let output = format_project_details(&test_summary("Kitchen"), "€");

        assert!(output.contains("€65500.00"));
        assert!(!output.contains('$'));
    }
}
