//! Catalog item model
//!
//! Reusable line-item templates. Every time a quote line is added its
//! name/kind/unit is remembered here, so frequent items can be suggested and
//! pre-priced on the next quote.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CatalogItemId;
use super::money::Money;
use super::quote::ItemKind;

/// A reusable quote line template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique identifier
    pub id: CatalogItemId,

    /// Line name ("Tile laying", "Primer")
    pub name: String,

    /// Work or Material
    pub kind: ItemKind,

    /// Unit of measure
    #[serde(default)]
    pub unit: String,

    /// Suggested unit price, if one has been set
    pub default_price: Option<Money>,

    /// How many times this item has been used on quotes
    #[serde(default)]
    pub usage_count: u64,

    /// When the item was last used on a quote
    pub last_used_at: Option<DateTime<Utc>>,
}

impl CatalogItem {
    /// Create a new catalog item
    pub fn new(name: impl Into<String>, kind: ItemKind, unit: impl Into<String>) -> Self {
        Self {
            id: CatalogItemId::new(),
            name: name.into(),
            kind,
            unit: unit.into(),
            default_price: None,
            usage_count: 0,
            last_used_at: None,
        }
    }

    /// Record one more use of this item
    pub fn record_usage(&mut self, price: Money) {
        self.usage_count += 1;
        self.last_used_at = Some(Utc::now());
        self.default_price = Some(price);
    }

    /// Validate the catalog item
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Catalog item name cannot be empty".into());
        }
        if let Some(price) = self.default_price {
            if price.is_negative() {
                return Err(format!("Catalog item '{}' has a negative price", self.name));
            }
        }
        Ok(())
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}
