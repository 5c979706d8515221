//! Client display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::Client;

#[derive(Tabled)]
struct ClientRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Added")]
    added: String,
}

/// Format a list of clients as a table
pub fn format_client_list(clients: &[Client]) -> String {
    if clients.is_empty() {
        return "No clients found.".to_string();
    }

    let rows: Vec<ClientRow> = clients
        .iter()
        .map(|c| ClientRow {
            name: c.name.clone(),
            phone: c.phone.clone(),
            email: c.email.clone(),
            added: c.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format a single client's details
pub fn format_client_details(client: &Client, project_count: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("Client: {}\n", client.name));
    output.push_str(&format!("  ID:       {}\n", client.id));
    if !client.phone.is_empty() {
        output.push_str(&format!("  Phone:    {}\n", client.phone));
    }
    if !client.email.is_empty() {
        output.push_str(&format!("  Email:    {}\n", client.email));
    }
    output.push_str(&format!("  Projects: {}\n", project_count));

    if !client.notes.is_empty() {
        output.push('\n');
        output.push_str(&format!("  Notes: {}\n", client.notes));
    }

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        client.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        client.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}
