//! Quote repository for JSON storage
//!
//! Manages loading and saving quotes (with their embedded line items) to
//! quotes.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SiteKickError;
use crate::models::{ProjectId, Quote, QuoteId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct QuoteData {
    quotes: Vec<Quote>,
}

/// Repository for quote persistence
pub struct QuoteRepository {
    path: PathBuf,
    data: RwLock<HashMap<QuoteId, Quote>>,
}

impl QuoteRepository {
    /// Create a new quote repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load quotes from disk
    pub fn load(&self) -> Result<(), SiteKickError> {
        let file_data: QuoteData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for quote in file_data.quotes {
            data.insert(quote.id, quote);
        }

        Ok(())
    }

    /// Save quotes to disk
    pub fn save(&self) -> Result<(), SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = QuoteData {
            quotes: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a quote by ID
    pub fn get(&self, id: QuoteId) -> Result<Option<Quote>, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get a quote by its shareable public ID
    pub fn get_by_public_id(&self, public_id: &str) -> Result<Option<Quote>, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().find(|q| q.public_id == public_id).cloned())
    }

    /// Get all quotes for a project, oldest first
    pub fn get_by_project(&self, project_id: ProjectId) -> Result<Vec<Quote>, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut quotes: Vec<_> = data
            .values()
            .filter(|q| q.project_id == project_id)
            .cloned()
            .collect();
        quotes.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(quotes)
    }

    /// Insert or update a quote
    pub fn upsert(&self, quote: Quote) -> Result<(), SiteKickError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(quote.id, quote);
        Ok(())
    }

    /// Delete a quote
    pub fn delete(&self, id: QuoteId) -> Result<bool, SiteKickError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Delete all quotes for a project; returns how many were removed
    pub fn delete_by_project(&self, project_id: ProjectId) -> Result<usize, SiteKickError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|_, q| q.project_id != project_id);
        Ok(before - data.len())
    }

    /// Count quotes
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
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, QuoteRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quotes.json");
        let repo = QuoteRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_get_by_project() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let project_a = ProjectId::new();
        let project_b = ProjectId::new();

        repo.upsert(Quote::new(project_a, "Phase 1")).unwrap();
        repo.upsert(Quote::new(project_a, "Phase 2")).unwrap();
        repo.upsert(Quote::new(project_b, "Other")).unwrap();

        let quotes = repo.get_by_project(project_a).unwrap();
        assert_eq!(quotes.len(), 2);
    }

    #[test]
    fn test_get_by_public_id() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let quote = Quote::new(ProjectId::new(), "Estimate");
        let public_id = quote.public_id.clone();
        repo.upsert(quote).unwrap();

        let found = repo.get_by_public_id(&public_id).unwrap();
        assert!(found.is_some());
        assert!(repo.get_by_public_id("missing").unwrap().is_none());
    }

    #[test]
    fn test_delete_by_project() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let project = ProjectId::new();
        repo.upsert(Quote::new(project, "Phase 1")).unwrap();
        repo.upsert(Quote::new(project, "Phase 2")).unwrap();
        repo.upsert(Quote::new(ProjectId::new(), "Other")).unwrap();

        assert_eq!(repo.delete_by_project(project).unwrap(), 2);
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_save_and_reload_keeps_items() {
        use crate::models::{ItemKind, Money, Quantity, QuoteItem};

        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut quote = Quote::new(ProjectId::new(), "Estimate");
        quote.add_item(QuoteItem::new(
            "Demolition",
            ItemKind::Work,
            Quantity::from_whole(3),
            Money::from_cents(25_000),
        ));
        let id = quote.id;

        repo.upsert(quote).unwrap();
        repo.save().unwrap();

        let repo2 = QuoteRepository::new(temp_dir.path().join("quotes.json"));
        repo2.load().unwrap();
        let loaded = repo2.get(id).unwrap().unwrap();
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(loaded.items[0].name, "Demolition");
    }
}
