//! Catalog service
//!
//! Business logic for the item catalog that powers suggestions when
//! building quotes.

use crate::error::{SiteKickError, SiteKickResult};
use crate::models::{CatalogItem, CatalogItemId, ItemKind, Money};
use crate::storage::Storage;

/// Service for catalog management
pub struct CatalogService<'a> {
    storage: &'a Storage,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add an item to the catalog
    pub fn add(
        &self,
        name: &str,
        kind: ItemKind,
        unit: &str,
        default_price: Option<Money>,
    ) -> SiteKickResult<CatalogItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SiteKickError::Validation("Item name cannot be empty".into()));
        }

        if self.storage.catalog.get_by_name(name, kind)?.is_some() {
            return Err(SiteKickError::Duplicate {
                entity_type: "Catalog item",
                identifier: name.to_string(),
            });
        }

        if let Some(price) = default_price {
            if price.is_negative() {
                return Err(SiteKickError::InvalidAmount(format!(
                    "Default price cannot be negative: {}",
                    price
                )));
            }
        }

        let mut item = CatalogItem::new(name, kind, unit);
        item.default_price = default_price;

        self.storage.catalog.upsert(item.clone())?;
        self.storage.catalog.save()?;

        Ok(item)
    }

    /// Get all catalog items, most used first
    pub fn list(&self) -> SiteKickResult<Vec<CatalogItem>> {
        self.storage.catalog.get_all()
    }

    /// Search the catalog by name prefix or substring, optionally by kind
    pub fn search(&self, query: &str, kind: Option<ItemKind>) -> SiteKickResult<Vec<CatalogItem>> {
        self.storage.catalog.search(query, kind)
    }

    /// Suggest the top matches for a partial name while entering a quote line
    pub fn suggest(
        &self,
        partial: &str,
        kind: ItemKind,
        limit: usize,
    ) -> SiteKickResult<Vec<CatalogItem>> {
        let mut matches = self.storage.catalog.search(partial, Some(kind))?;
        matches.truncate(limit);
        Ok(matches)
    }

    /// Delete a catalog item
    pub fn delete(&self, id: CatalogItemId) -> SiteKickResult<()> {
        if !self.storage.catalog.delete(id)? {
            return Err(SiteKickError::NotFound {
                entity_type: "Catalog item",
                identifier: id.to_string(),
            });
        }
        self.storage.catalog.save()?;
        Ok(())
    }
}
