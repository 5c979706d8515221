//! Expense service
//!
//! Business logic for expense tracking: recording, listing, deletion and
//! bulk import from CSV files.

use std::path::Path;

use chrono::NaiveDate;

use crate::error::{SiteKickError, SiteKickResult};
use crate::models::{Expense, ExpenseId, Money, ProjectId};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Outcome of a CSV import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Expenses successfully recorded
    pub imported: usize,
    /// Rows that could not be parsed, with the 1-based row number and reason
    pub skipped: Vec<(usize, String)>,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an expense against a project
    pub fn add(
        &self,
        project_id: ProjectId,
        amount: Money,
        description: &str,
        expense_date: NaiveDate,
    ) -> SiteKickResult<Expense> {
        if !self.storage.projects.exists(project_id)? {
            return Err(SiteKickError::project_not_found(project_id.to_string()));
        }

        if amount.is_negative() {
            return Err(SiteKickError::InvalidAmount(format!(
                "Expense amount cannot be negative: {}",
                amount
            )));
        }

        let expense = Expense::new(project_id, amount, description, expense_date);

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// Get all expenses for a project, oldest first
    pub fn list(&self, project_id: ProjectId) -> SiteKickResult<Vec<Expense>> {
        self.storage.expenses.get_by_project(project_id)
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> SiteKickResult<()> {
        if !self.storage.expenses.delete(id)? {
            return Err(SiteKickError::expense_not_found(id.to_string()));
        }
        self.storage.expenses.save()?;
        Ok(())
    }

    /// Import expenses for a project from a CSV file
    ///
    /// Expected columns: `date,amount,description` with a header row.
    /// Dates use `YYYY-MM-DD`. Bad rows are skipped and reported, not fatal;
    /// nothing is written to disk if every row fails.
    pub fn import_csv(&self, project_id: ProjectId, path: &Path) -> SiteKickResult<ImportResult> {
        if !self.storage.projects.exists(project_id)? {
            return Err(SiteKickError::project_not_found(project_id.to_string()));
        }

        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| SiteKickError::Import(format!("Failed to open {}: {}", path.display(), e)))?;

        let mut result = ImportResult::default();

        for (index, record) in reader.records().enumerate() {
            let row = index + 2; // 1-based, after the header
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    result.skipped.push((row, format!("Malformed row: {}", e)));
                    continue;
                }
            };

            match parse_csv_row(&record) {
                Ok((date, amount, description)) => {
                    let expense = Expense::new(project_id, amount, description, date);
                    self.storage.expenses.upsert(expense)?;
                    result.imported += 1;
                }
                Err(reason) => {
                    result.skipped.push((row, reason));
                }
            }
        }

        if result.imported > 0 {
            self.storage.expenses.save()?;
        }

        Ok(result)
    }
}

fn parse_csv_row(record: &csv::StringRecord) -> Result<(NaiveDate, Money, String), String> {
    let date_field = record.get(0).ok_or("Missing date column")?.trim();
    let amount_field = record.get(1).ok_or("Missing amount column")?.trim();
    let description = record.get(2).unwrap_or("").trim().to_string();

    let date = NaiveDate::parse_from_str(date_field, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", date_field))?;

    let amount = Money::parse(amount_field)
        .map_err(|e| format!("Invalid amount '{}': {}", amount_field, e))?;
    if amount.is_negative() {
        return Err(format!("Amount cannot be negative: {}", amount_field));
    }

    Ok((date, amount, description))
}
