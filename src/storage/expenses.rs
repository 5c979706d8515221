//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SiteKickError;
use crate::models::{Expense, ExpenseId, ProjectId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), SiteKickError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = ExpenseData {
            expenses: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all expenses for a project, by expense date then creation time
    pub fn get_by_project(&self, project_id: ProjectId) -> Result<Vec<Expense>, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data
            .values()
            .filter(|e| e.project_id == project_id)
            .cloned()
            .collect();
        expenses.sort_by(|a, b| {
            a.expense_date
                .cmp(&b.expense_date)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(expenses)
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), SiteKickError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> Result<bool, SiteKickError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Delete all expenses for a project; returns how many were removed
    pub fn delete_by_project(&self, project_id: ProjectId) -> Result<usize, SiteKickError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|_, e| e.project_id != project_id);
        Ok(before - data.len())
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
