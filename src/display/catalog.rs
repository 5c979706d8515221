//! Catalog display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::CatalogItem;

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Default price")]
    default_price: String,
    #[tabled(rename = "Used")]
    used: u64,
}

/// Format catalog items as a table, most used first
pub fn format_catalog_list(items: &[CatalogItem], symbol: &str) -> String {
    if items.is_empty() {
        return "Catalog is empty.".to_string();
    }

    let rows: Vec<CatalogRow> = items
        .iter()
        .map(|item| CatalogRow {
            name: item.name.clone(),
            kind: item.kind.to_string(),
            unit: item.unit.clone(),
            default_price: item
                .default_price
                .map(|p| p.format_with_symbol(symbol))
                .unwrap_or_default(),
            used: item.usage_count,
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemKind, Money};

    #[test]
    fn test_format_catalog_list() {
        let mut item = CatalogItem::new("Tile laying", ItemKind::Work, "m²");
        item.record_usage(Money::from_cents(60_000));

        let output = format_catalog_list(&[item], "$");
        assert!(output.contains("Tile laying"));
        assert!(output.contains("$600.00"));
    }

    #[test]
    fn test_format_empty_catalog() {
        let output = format_catalog_list(&[], "$");
        assert!(output.contains("Catalog is empty"));
    }

    #[test]
    fn test_configured_symbol_is_used() {
        let mut item = CatalogItem::new("Tile laying", ItemKind::Work, "m²");
        item.record_usage(Money::from_cents(60_000));

        let output = format_catalog_list(&[item], "€");
        assert!(output.contains("€600.00"));
        assert!(!output.contains('$'));
    }
}
