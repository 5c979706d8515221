//! Quote service
//!
//! Business logic for quotes and their line items: CRUD, item management
//! with position maintenance, catalog usage recording, and the engine-backed
//! totals summary.

use crate::engine::{self, QuoteTotals};
use crate::error::{SiteKickError, SiteKickResult};
use crate::models::{
    CatalogItem, ItemKind, Money, ProjectId, Quantity, Quote, QuoteId, QuoteItem, QuoteItemId,
};
use crate::storage::Storage;

/// Service for quote management
pub struct QuoteService<'a> {
    storage: &'a Storage,
}

/// A single line with its derived total
#[derive(Debug, Clone)]
pub struct QuoteLine {
    pub item: QuoteItem,
    pub line_total: Money,
}

/// A quote with derived totals for every line and the whole document
#[derive(Debug, Clone)]
pub struct QuoteSummary {
    pub quote: Quote,
    /// Lines in display order with rounded totals
    pub lines: Vec<QuoteLine>,
    /// Work/Material subtotals and grand total
    pub totals: QuoteTotals,
}

impl<'a> QuoteService<'a> {
    /// Create a new quote service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new quote on a project
    pub fn create(&self, project_id: ProjectId, title: &str) -> SiteKickResult<Quote> {
        let title = title.trim();
        if title.is_empty() {
            return Err(SiteKickError::Validation(
                "Quote title cannot be empty".into(),
            ));
        }

        if !self.storage.projects.exists(project_id)? {
            return Err(SiteKickError::project_not_found(project_id.to_string()));
        }

        let quote = Quote::new(project_id, title);

        self.storage.quotes.upsert(quote.clone())?;
        self.storage.quotes.save()?;

        Ok(quote)
    }

    /// Get a quote by ID
    pub fn get(&self, id: QuoteId) -> SiteKickResult<Option<Quote>> {
        self.storage.quotes.get(id)
    }

    /// Find a quote by ID string or shareable public ID
    pub fn find(&self, identifier: &str) -> SiteKickResult<Option<Quote>> {
        if let Some(quote) = self.storage.quotes.get_by_public_id(identifier)? {
            return Ok(Some(quote));
        }

        if let Ok(id) = identifier.parse::<QuoteId>() {
            return self.storage.quotes.get(id);
        }

        Ok(None)
    }

    /// Get all quotes for a project
    pub fn list_by_project(&self, project_id: ProjectId) -> SiteKickResult<Vec<Quote>> {
        self.storage.quotes.get_by_project(project_id)
    }

    /// Update a quote's title and notes; `None` leaves a field unchanged
    pub fn update(
        &self,
        id: QuoteId,
        title: Option<&str>,
        notes: Option<&str>,
    ) -> SiteKickResult<Quote> {
        let mut quote = self
            .storage
            .quotes
            .get(id)?
            .ok_or_else(|| SiteKickError::quote_not_found(id.to_string()))?;

        if let Some(title) = title {
            let title = title.trim();
            if title.is_empty() {
                return Err(SiteKickError::Validation(
                    "Quote title cannot be empty".into(),
                ));
            }
            quote.title = title.to_string();
        }
        if let Some(notes) = notes {
            quote.notes = notes.to_string();
        }
        quote.touch();

        self.storage.quotes.upsert(quote.clone())?;
        self.storage.quotes.save()?;

        Ok(quote)
    }

    /// Delete a quote
    pub fn delete(&self, id: QuoteId) -> SiteKickResult<()> {
        if !self.storage.quotes.delete(id)? {
            return Err(SiteKickError::quote_not_found(id.to_string()));
        }
        self.storage.quotes.save()?;
        Ok(())
    }

    /// Add a line item to a quote
    ///
    /// The line is validated through the same totals code that will later
    /// aggregate it, so a quantity/price the engine would reject can never be
    /// stored. Usage is recorded in the catalog for later suggestions.
    pub fn add_item(
        &self,
        quote_id: QuoteId,
        name: &str,
        kind: ItemKind,
        unit: &str,
        quantity: Quantity,
        unit_price: Money,
    ) -> SiteKickResult<QuoteItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SiteKickError::Validation("Item name cannot be empty".into()));
        }

        let mut quote = self
            .storage
            .quotes
            .get(quote_id)?
            .ok_or_else(|| SiteKickError::quote_not_found(quote_id.to_string()))?;

        let item = QuoteItem::with_unit(name, kind, unit, quantity, unit_price);
        engine::line_total(&item)?;

        let item_id = quote.add_item(item);
        self.storage.quotes.upsert(quote.clone())?;
        self.storage.quotes.save()?;

        self.record_catalog_usage(name, kind, unit, unit_price)?;

        // The item was just added, so the lookup cannot fail
        let item = quote
            .item(item_id)
            .cloned()
            .ok_or_else(|| SiteKickError::quote_item_not_found(item_id.to_string()))?;
        Ok(item)
    }

    /// Update a line item; `None` leaves a field unchanged
    pub fn update_item(
        &self,
        quote_id: QuoteId,
        item_id: QuoteItemId,
        name: Option<&str>,
        quantity: Option<Quantity>,
        unit_price: Option<Money>,
    ) -> SiteKickResult<QuoteItem> {
        let mut quote = self
            .storage
            .quotes
            .get(quote_id)?
            .ok_or_else(|| SiteKickError::quote_not_found(quote_id.to_string()))?;

        {
            let item = quote
                .item_mut(item_id)
                .ok_or_else(|| SiteKickError::quote_item_not_found(item_id.to_string()))?;

            if let Some(name) = name {
                let name = name.trim();
                if name.is_empty() {
                    return Err(SiteKickError::Validation(
                        "Item name cannot be empty".into(),
                    ));
                }
                item.name = name.to_string();
            }
            if let Some(quantity) = quantity {
                item.quantity = quantity;
            }
            if let Some(unit_price) = unit_price {
                item.unit_price = unit_price;
            }

            engine::line_total(item)?;
        }
        quote.touch();

        self.storage.quotes.upsert(quote.clone())?;
        self.storage.quotes.save()?;

        let item = quote
            .item(item_id)
            .cloned()
            .ok_or_else(|| SiteKickError::quote_item_not_found(item_id.to_string()))?;
        Ok(item)
    }

    /// Remove a line item from a quote
    pub fn remove_item(&self, quote_id: QuoteId, item_id: QuoteItemId) -> SiteKickResult<()> {
        let mut quote = self
            .storage
            .quotes
            .get(quote_id)?
            .ok_or_else(|| SiteKickError::quote_not_found(quote_id.to_string()))?;

        if !quote.remove_item(item_id) {
            return Err(SiteKickError::quote_item_not_found(item_id.to_string()));
        }

        self.storage.quotes.upsert(quote)?;
        self.storage.quotes.save()?;

        Ok(())
    }

    /// Build a quote's summary: lines in order with rounded totals plus
    /// Work/Material subtotals and the grand total
    pub fn summary(&self, id: QuoteId) -> SiteKickResult<QuoteSummary> {
        let quote = self
            .storage
            .quotes
            .get(id)?
            .ok_or_else(|| SiteKickError::quote_not_found(id.to_string()))?;

        let totals = engine::quote_totals(&quote.items)?;

        let mut lines = Vec::with_capacity(quote.items.len());
        for item in quote.items_ordered() {
            lines.push(QuoteLine {
                item: item.clone(),
                line_total: engine::line_total(item)?,
            });
        }

        Ok(QuoteSummary {
            quote,
            lines,
            totals,
        })
    }

    /// Remember a used line in the catalog, updating usage stats
    fn record_catalog_usage(
        &self,
        name: &str,
        kind: ItemKind,
        unit: &str,
        price: Money,
    ) -> SiteKickResult<()> {
        let mut entry = match self.storage.catalog.get_by_name(name, kind)? {
            Some(existing) => existing,
            None => CatalogItem::new(name, kind, unit),
        };

        entry.record_usage(price);
        self.storage.catalog.upsert(entry)?;
        self.storage.catalog.save()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SiteKickPaths;
    use crate::models::Project;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SiteKickPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn setup_project(storage: &Storage) -> ProjectId {
        let project = Project::new("Bathroom");
        let id = project.id;
        storage.projects.upsert(project).unwrap();
        id
    }

    #[test]
    fn test_create_requires_project() {
        let (_temp_dir, storage) = create_test_storage();
        let service = QuoteService::new(&storage);

        let err = service.create(ProjectId::new(), "Estimate").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_create_and_find_by_public_id() {
        let (_temp_dir, storage) = create_test_storage();
        let project_id = setup_project(&storage);
        let service = QuoteService::new(&storage);

        let quote = service.create(project_id, "Estimate").unwrap();
        let found = service.find(&quote.public_id).unwrap().unwrap();
        assert_eq!(found.id, quote.id);
    }

    #[test]
    fn test_add_item_records_catalog_usage() {
        let (_temp_dir, storage) = create_test_storage();
        let project_id = setup_project(&storage);
        let service = QuoteService::new(&storage);

        let quote = service.create(project_id, "Estimate").unwrap();
        service
            .add_item(
                quote.id,
                "Tile laying",
                ItemKind::Work,
                "m²",
                Quantity::parse("25").unwrap(),
                Money::parse("600.00").unwrap(),
            )
            .unwrap();

        let entry = storage
            .catalog
            .get_by_name("Tile laying", ItemKind::Work)
            .unwrap()
            .unwrap();
        assert_eq!(entry.usage_count, 1);
        assert_eq!(entry.default_price, Some(Money::parse("600.00").unwrap()));
    }

    #[test]
    fn test_add_item_rejects_negative_price() {
        let (_temp_dir, storage) = create_test_storage();
        let project_id = setup_project(&storage);
        let service = QuoteService::new(&storage);

        let quote = service.create(project_id, "Estimate").unwrap();
        let err = service
            .add_item(
                quote.id,
                "Bad line",
                ItemKind::Work,
                "pcs",
                Quantity::parse("1").unwrap(),
                Money::from_cents(-100),
            )
            .unwrap_err();
        assert!(err.is_invalid_amount());

        // Nothing was stored
        let reloaded = service.get(quote.id).unwrap().unwrap();
        assert!(reloaded.items.is_empty());
    }

    #[test]
    fn test_summary_matches_reference_scenario() {
        let (_temp_dir, storage) = create_test_storage();
        let project_id = setup_project(&storage);
        let service = QuoteService::new(&storage);

        let quote = service.create(project_id, "Main estimate").unwrap();
        let qty = |s: &str| Quantity::parse(s).unwrap();
        let price = |s: &str| Money::parse(s).unwrap();

        service
            .add_item(quote.id, "Demolition", ItemKind::Work, "m²", qty("25"), price("600"))
            .unwrap();
        service
            .add_item(quote.id, "Painting", ItemKind::Work, "m²", qty("20"), price("400"))
            .unwrap();
        service
            .add_item(quote.id, "Tile", ItemKind::Material, "m²", qty("38"), price("1250"))
            .unwrap();

        let summary = service.summary(quote.id).unwrap();
        assert_eq!(summary.lines.len(), 3);
        assert_eq!(summary.totals.work_amount, price("23000"));
        assert_eq!(summary.totals.material_amount, price("47500"));
        assert_eq!(summary.totals.total_amount, price("70500"));
        assert_eq!(summary.lines[0].line_total, price("15000"));
    }

    #[test]
    fn test_update_item() {
        let (_temp_dir, storage) = create_test_storage();
        let project_id = setup_project(&storage);
        let service = QuoteService::new(&storage);

        let quote = service.create(project_id, "Estimate").unwrap();
        let item = service
            .add_item(
                quote.id,
                "Tile",
                ItemKind::Material,
                "m²",
                Quantity::parse("10").unwrap(),
                Money::parse("50.00").unwrap(),
            )
            .unwrap();

        let updated = service
            .update_item(
                quote.id,
                item.id,
                None,
                Some(Quantity::parse("12").unwrap()),
                None,
            )
            .unwrap();
        assert_eq!(updated.quantity, Quantity::parse("12").unwrap());

        let summary = service.summary(quote.id).unwrap();
        assert_eq!(summary.totals.total_amount, Money::parse("600.00").unwrap());
    }

    #[test]
    fn test_remove_item() {
        let (_temp_dir, storage) = create_test_storage();
        let project_id = setup_project(&storage);
        let service = QuoteService::new(&storage);

        let quote = service.create(project_id, "Estimate").unwrap();
        let item = service
            .add_item(
                quote.id,
                "Tile",
                ItemKind::Material,
                "m²",
                Quantity::parse("10").unwrap(),
                Money::parse("50.00").unwrap(),
            )
            .unwrap();

        service.remove_item(quote.id, item.id).unwrap();

        let summary = service.summary(quote.id).unwrap();
        assert!(summary.lines.is_empty());
        assert!(summary.totals.total_amount.is_zero());

        let err = service.remove_item(quote.id, item.id).unwrap_err();
        assert!(err.is_not_found());
    }
}
