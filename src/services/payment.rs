//! Payment service
//!
//! Business logic for payments received from clients.

use chrono::NaiveDate;

use crate::error::{SiteKickError, SiteKickResult};
use crate::models::{Money, Payment, PaymentId, ProjectId};
use crate::storage::Storage;

/// Service for payment management
pub struct PaymentService<'a> {
    storage: &'a Storage,
}

impl<'a> PaymentService<'a> {
    /// Create a new payment service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a payment received on a project
    pub fn add(
        &self,
        project_id: ProjectId,
        amount: Money,
        description: &str,
        payment_date: NaiveDate,
    ) -> SiteKickResult<Payment> {
        if !self.storage.projects.exists(project_id)? {
            return Err(SiteKickError::project_not_found(project_id.to_string()));
        }

        if amount.is_negative() {
            return Err(SiteKickError::InvalidAmount(format!(
                "Payment amount cannot be negative: {}",
                amount
            )));
        }

        let payment = Payment::new(project_id, amount, description, payment_date);

        self.storage.payments.upsert(payment.clone())?;
        self.storage.payments.save()?;

        Ok(payment)
    }

    /// Get all payments for a project, oldest first
    pub fn list(&self, project_id: ProjectId) -> SiteKickResult<Vec<Payment>> {
        self.storage.payments.get_by_project(project_id)
    }

    /// Delete a payment
    pub fn delete(&self, id: PaymentId) -> SiteKickResult<()> {
        if !self.storage.payments.delete(id)? {
            return Err(SiteKickError::payment_not_found(id.to_string()));
        }
        self.storage.payments.save()?;
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

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let (_temp_dir, storage) = create_test_storage();
        let project_id = setup_project(&storage);
        let service = PaymentService::new(&storage);

        service
            .add(
                project_id,
                Money::parse("20000.00").unwrap(),
                "Advance",
                date(1),
            )
            .unwrap();
        service
            .add(
                project_id,
                Money::parse("30000.00").unwrap(),
                "Milestone",
                date(15),
            )
            .unwrap();

        let payments = service.list(project_id).unwrap();
        assert_eq!(payments.len(), 2);
        assert_eq!(payments[0].description, "Advance");
    }

    #[test]
    fn test_add_rejects_negative() {
        let (_temp_dir, storage) = create_test_storage();
        let project_id = setup_project(&storage);
        let service = PaymentService::new(&storage);

        let err = service
            .add(project_id, Money::from_cents(-1), "Chargeback", date(1))
            .unwrap_err();
        assert!(err.is_invalid_amount());
    }

    #[test]
    fn test_add_requires_project() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PaymentService::new(&storage);

        let err = service
            .add(ProjectId::new(), Money::from_cents(100), "x", date(1))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let project_id = setup_project(&storage);
        let service = PaymentService::new(&storage);

        let payment = service
            .add(project_id, Money::from_cents(100), "x", date(1))
            .unwrap();
        service.delete(payment.id).unwrap();

        let err = service.delete(payment.id).unwrap_err();
        assert!(err.is_not_found());
    }
}
