//! Quote model
//!
//! A quote is a cost estimate for a project, built from ordered Work and
//! Material line items. Totals are never stored; they are derived from the
//! items by the aggregation code in `crate::engine`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ids::{ProjectId, QuoteId, QuoteItemId};
use super::money::Money;
use super::quantity::Quantity;

/// The two mutually exclusive categories of a quote line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Labor
    Work,
    /// Materials
    Material,
}

impl ItemKind {
    /// Parse a kind from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "work" | "labor" => Some(Self::Work),
            "material" | "materials" => Some(Self::Material),
            _ => None,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Work => write!(f, "Work"),
            Self::Material => write!(f, "Material"),
        }
    }
}

/// A single line of a quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteItem {
    /// Unique identifier
    pub id: QuoteItemId,

    /// What the line covers ("Demolition", "Tile 60x60")
    pub name: String,

    /// Work or Material
    pub kind: ItemKind,

    /// Unit of measure ("m²", "pcs", "hours")
    #[serde(default)]
    pub unit: String,

    /// How many units
    pub quantity: Quantity,

    /// Price per unit
    pub unit_price: Money,

    /// Position within the quote (0-based, display order)
    #[serde(default)]
    pub position: u32,
}

impl QuoteItem {
    /// Create a new line item
    pub fn new(
        name: impl Into<String>,
        kind: ItemKind,
        quantity: Quantity,
        unit_price: Money,
    ) -> Self {
        Self {
            id: QuoteItemId::new(),
            name: name.into(),
            kind,
            unit: String::new(),
            quantity,
            unit_price,
            position: 0,
        }
    }

    /// Create a line item with a unit of measure
    pub fn with_unit(
        name: impl Into<String>,
        kind: ItemKind,
        unit: impl Into<String>,
        quantity: Quantity,
        unit_price: Money,
    ) -> Self {
        let mut item = Self::new(name, kind, quantity, unit_price);
        item.unit = unit.into();
        item
    }

    /// Validate the line item
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Item name cannot be empty".into());
        }
        if self.quantity.is_negative() {
            return Err(format!("Item '{}' has a negative quantity", self.name));
        }
        if self.unit_price.is_negative() {
            return Err(format!("Item '{}' has a negative unit price", self.name));
        }
        Ok(())
    }
}

/// A cost estimate for a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Unique identifier
    pub id: QuoteId,

    /// The project this quote belongs to
    pub project_id: ProjectId,

    /// Quote title
    pub title: String,

    /// Free-form notes shown under the line items
    #[serde(default)]
    pub notes: String,

    /// Short shareable token for handing the quote to a client
    pub public_id: String,

    /// Ordered line items
    #[serde(default)]
    pub items: Vec<QuoteItem>,

    /// When the quote was created
    pub created_at: DateTime<Utc>,

    /// When the quote was last modified
    pub updated_at: DateTime<Utc>,
}

impl Quote {
    /// Create a new empty quote
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: QuoteId::new(),
            project_id,
            title: title.into(),
            notes: String::new(),
            public_id: generate_public_id(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append an item, assigning the next position
    pub fn add_item(&mut self, mut item: QuoteItem) -> QuoteItemId {
        item.position = self.items.len() as u32;
        let id = item.id;
        self.items.push(item);
        self.updated_at = Utc::now();
        id
    }

    /// Look up an item by ID
    pub fn item(&self, id: QuoteItemId) -> Option<&QuoteItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Look up an item mutably by ID
    pub fn item_mut(&mut self, id: QuoteItemId) -> Option<&mut QuoteItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Remove an item and close the position gap
    pub fn remove_item(&mut self, id: QuoteItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == before {
            return false;
        }
        for (idx, item) in self.items.iter_mut().enumerate() {
            item.position = idx as u32;
        }
        self.updated_at = Utc::now();
        true
    }

    /// Items sorted by position
    pub fn items_ordered(&self) -> Vec<&QuoteItem> {
        let mut items: Vec<_> = self.items.iter().collect();
        items.sort_by_key(|i| i.position);
        items
    }

    /// Mark the quote as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the quote and all its items
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Quote title cannot be empty".into());
        }
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} items)", self.title, self.items.len())
    }
}

/// Generate a short shareable token for a quote
fn generate_public_id() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}
