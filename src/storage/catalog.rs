//! Catalog repository for JSON storage
//!
//! Manages loading and saving reusable line-item templates to catalog.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SiteKickError;
use crate::models::{CatalogItem, CatalogItemId, ItemKind};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CatalogData {
    items: Vec<CatalogItem>,
}

/// Repository for catalog persistence
pub struct CatalogRepository {
    path: PathBuf,
    data: RwLock<HashMap<CatalogItemId, CatalogItem>>,
}

impl CatalogRepository {
    /// Create a new catalog repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load catalog items from disk
    pub fn load(&self) -> Result<(), SiteKickError> {
        let file_data: CatalogData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for item in file_data.items {
            data.insert(item.id, item);
        }

        Ok(())
    }

    /// Save catalog items to disk
    pub fn save(&self) -> Result<(), SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = CatalogData {
            items: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a catalog item by ID
    pub fn get(&self, id: CatalogItemId) -> Result<Option<CatalogItem>, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all catalog items, most used first
    pub fn get_all(&self) -> Result<Vec<CatalogItem>, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut items: Vec<_> = data.values().cloned().collect();
        items.sort_by(|a, b| b.usage_count.cmp(&a.usage_count).then(a.name.cmp(&b.name)));
        Ok(items)
    }

    /// Find an item by name and kind (case-insensitive exact match)
    pub fn get_by_name(
        &self,
        name: &str,
        kind: ItemKind,
    ) -> Result<Option<CatalogItem>, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|i| i.kind == kind && i.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Search by name substring, optionally restricted to one kind
    pub fn search(
        &self,
        query: &str,
        kind: Option<ItemKind>,
    ) -> Result<Vec<CatalogItem>, SiteKickError> {
        let needle = query.to_lowercase();
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|i| {
                i.name.to_lowercase().contains(&needle) && kind.map_or(true, |k| i.kind == k)
            })
            .collect())
    }

    /// Insert or update a catalog item
    pub fn upsert(&self, item: CatalogItem) -> Result<(), SiteKickError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(item.id, item);
        Ok(())
    }

    /// Delete a catalog item
    pub fn delete(&self, id: CatalogItemId) -> Result<bool, SiteKickError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count catalog items
    pub fn count(&self) -> Result<usize, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CatalogRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        let repo = CatalogRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_get_by_name_respects_kind() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(CatalogItem::new("Tile", ItemKind::Material, "m²"))
            .unwrap();

        assert!(repo.get_by_name("tile", ItemKind::Material).unwrap().is_some());
        assert!(repo.get_by_name("tile", ItemKind::Work).unwrap().is_none());
    }

    #[test]
    fn test_get_all_most_used_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut popular = CatalogItem::new("Tile laying", ItemKind::Work, "m²");
        popular.record_usage(Money::from_cents(60_000));
        popular.record_usage(Money::from_cents(60_000));
        let rare = CatalogItem::new("Chimney sweep", ItemKind::Work, "job");

        repo.upsert(rare).unwrap();
        repo.upsert(popular).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].name, "Tile laying");
    }

    #[test]
    fn test_search_with_kind_filter() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(CatalogItem::new("Tile", ItemKind::Material, "m²"))
            .unwrap();
        repo.upsert(CatalogItem::new("Tile laying", ItemKind::Work, "m²"))
            .unwrap();

        assert_eq!(repo.search("tile", None).unwrap().len(), 2);
        assert_eq!(repo.search("tile", Some(ItemKind::Work)).unwrap().len(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let item = CatalogItem::new("Primer", ItemKind::Material, "l");
        let id = item.id;
        repo.upsert(item).unwrap();
        repo.save().unwrap();

        let repo2 = CatalogRepository::new(temp_dir.path().join("catalog.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(id).unwrap().unwrap().name, "Primer");
    }
}
