//! Payment repository for JSON storage
//!
//! Manages loading and saving client payments to payments.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SiteKickError;
use crate::models::{Payment, PaymentId, ProjectId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct PaymentData {
    payments: Vec<Payment>,
}

/// Repository for payment persistence
pub struct PaymentRepository {
    path: PathBuf,
    data: RwLock<HashMap<PaymentId, Payment>>,
}

impl PaymentRepository {
    /// Create a new payment repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load payments from disk
    pub fn load(&self) -> Result<(), SiteKickError> {
        let file_data: PaymentData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for payment in file_data.payments {
            data.insert(payment.id, payment);
        }

        Ok(())
    }

    /// Save payments to disk
    pub fn save(&self) -> Result<(), SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = PaymentData {
            payments: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a payment by ID
    pub fn get(&self, id: PaymentId) -> Result<Option<Payment>, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all payments for a project, by payment date then creation time
    pub fn get_by_project(&self, project_id: ProjectId) -> Result<Vec<Payment>, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut payments: Vec<_> = data
            .values()
            .filter(|p| p.project_id == project_id)
            .cloned()
            .collect();
        payments.sort_by(|a, b| {
            a.payment_date
                .cmp(&b.payment_date)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(payments)
    }

    /// Insert or update a payment
    pub fn upsert(&self, payment: Payment) -> Result<(), SiteKickError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(payment.id, payment);
        Ok(())
    }

    /// Delete a payment
    pub fn delete(&self, id: PaymentId) -> Result<bool, SiteKickError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Delete all payments for a project; returns how many were removed
    pub fn delete_by_project(&self, project_id: ProjectId) -> Result<usize, SiteKickError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|_, p| p.project_id != project_id);
        Ok(before - data.len())
    }

    /// Count payments
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
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, PaymentRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("payments.json");
        let repo = PaymentRepository::new(path);
        (temp_dir, repo)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    #[test]
    fn test_get_by_project_sorted_by_date() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let project = ProjectId::new();
        repo.upsert(Payment::new(
            project,
            Money::from_cents(10_000),
            "final",
            date(28),
        ))
        .unwrap();
        repo.upsert(Payment::new(
            project,
            Money::from_cents(50_000),
            "advance",
            date(1),
        ))
        .unwrap();

        let payments = repo.get_by_project(project).unwrap();
        assert_eq!(payments.len(), 2);
        assert_eq!(payments[0].description, "advance");
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let payment = Payment::new(ProjectId::new(), Money::from_cents(100), "x", date(1));
        let id = payment.id;
        repo.upsert(payment).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let payment = Payment::new(ProjectId::new(), Money::from_cents(5000), "advance", date(2));
        let id = payment.id;
        repo.upsert(payment).unwrap();
        repo.save().unwrap();

        let repo2 = PaymentRepository::new(temp_dir.path().join("payments.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(id).unwrap().unwrap().amount.cents(), 5000);
    }
}
