//! Project service
//!
//! Business logic for project management: CRUD, status transitions,
//! cascading deletion, and the engine-backed financial summary.

use crate::engine::{self, ProjectTotals};
use crate::error::{SiteKickError, SiteKickResult};
use crate::models::{Client, ClientId, Project, ProjectId, ProjectStatus};
use crate::storage::Storage;

/// Service for project management
pub struct ProjectService<'a> {
    storage: &'a Storage,
}

/// A project with its recomputed financial aggregates
#[derive(Debug, Clone)]
pub struct ProjectSummary {
    pub project: Project,
    /// The client, if one is attached
    pub client: Option<Client>,
    /// Derived totals, recomputed from current quotes/expenses/payments
    pub totals: ProjectTotals,
    /// Number of quotes on the project
    pub quote_count: usize,
    /// Number of recorded expenses
    pub expense_count: usize,
    /// Number of recorded payments
    pub payment_count: usize,
}

impl<'a> ProjectService<'a> {
    /// Create a new project service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new project
    pub fn create(
        &self,
        title: &str,
        address: &str,
        client_id: Option<ClientId>,
    ) -> SiteKickResult<Project> {
        let title = title.trim();
        if title.is_empty() {
            return Err(SiteKickError::Validation(
                "Project title cannot be empty".into(),
            ));
        }

        if self.storage.projects.title_exists(title, None)? {
            return Err(SiteKickError::Duplicate {
                entity_type: "Project",
                identifier: title.to_string(),
            });
        }

        if let Some(client_id) = client_id {
            if self.storage.clients.get(client_id)?.is_none() {
                return Err(SiteKickError::client_not_found(client_id.to_string()));
            }
        }

        let project = Project::with_details(title, address, client_id);

        project
            .validate()
            .map_err(SiteKickError::Validation)?;

        self.storage.projects.upsert(project.clone())?;
        self.storage.projects.save()?;

        Ok(project)
    }

    /// Get a project by ID
    pub fn get(&self, id: ProjectId) -> SiteKickResult<Option<Project>> {
        self.storage.projects.get(id)
    }

    /// Find a project by title or ID string
    pub fn find(&self, identifier: &str) -> SiteKickResult<Option<Project>> {
        if let Some(project) = self.storage.projects.get_by_title(identifier)? {
            return Ok(Some(project));
        }

        if let Ok(id) = identifier.parse::<ProjectId>() {
            return self.storage.projects.get(id);
        }

        Ok(None)
    }

    /// List projects, optionally filtered by status and search query
    pub fn list(
        &self,
        status: Option<ProjectStatus>,
        search: Option<&str>,
    ) -> SiteKickResult<Vec<Project>> {
        let mut projects = match search {
            Some(query) => self.storage.projects.search(query)?,
            None => self.storage.projects.get_all()?,
        };

        if let Some(status) = status {
            projects.retain(|p| p.status == status);
        }

        Ok(projects)
    }

    /// Update a project's fields; `None` leaves a field unchanged
    pub fn update(
        &self,
        id: ProjectId,
        title: Option<&str>,
        address: Option<&str>,
        notes: Option<&str>,
        client_id: Option<Option<ClientId>>,
    ) -> SiteKickResult<Project> {
        let mut project = self
            .storage
            .projects
            .get(id)?
            .ok_or_else(|| SiteKickError::project_not_found(id.to_string()))?;

        if let Some(title) = title {
            let title = title.trim();
            if title.is_empty() {
                return Err(SiteKickError::Validation(
                    "Project title cannot be empty".into(),
                ));
            }
            if self.storage.projects.title_exists(title, Some(id))? {
                return Err(SiteKickError::Duplicate {
                    entity_type: "Project",
                    identifier: title.to_string(),
                });
            }
            project.title = title.to_string();
        }
        if let Some(address) = address {
            project.address = address.to_string();
        }
        if let Some(notes) = notes {
            project.notes = notes.to_string();
        }
        if let Some(client_id) = client_id {
            if let Some(client_id) = client_id {
                if self.storage.clients.get(client_id)?.is_none() {
                    return Err(SiteKickError::client_not_found(client_id.to_string()));
                }
            }
            project.client_id = client_id;
        }
        project.touch();

        self.storage.projects.upsert(project.clone())?;
        self.storage.projects.save()?;

        Ok(project)
    }

    /// Set a project's status
    pub fn set_status(&self, id: ProjectId, status: ProjectStatus) -> SiteKickResult<Project> {
        let mut project = self
            .storage
            .projects
            .get(id)?
            .ok_or_else(|| SiteKickError::project_not_found(id.to_string()))?;

        project.set_status(status);

        self.storage.projects.upsert(project.clone())?;
        self.storage.projects.save()?;

        Ok(project)
    }

    /// Delete a project and everything recorded against it
    pub fn delete(&self, id: ProjectId) -> SiteKickResult<()> {
        if !self.storage.projects.delete(id)? {
            return Err(SiteKickError::project_not_found(id.to_string()));
        }

        self.storage.quotes.delete_by_project(id)?;
        self.storage.expenses.delete_by_project(id)?;
        self.storage.payments.delete_by_project(id)?;

        self.storage.projects.save()?;
        self.storage.quotes.save()?;
        self.storage.expenses.save()?;
        self.storage.payments.save()?;

        Ok(())
    }

    /// Build the financial summary for a project
    ///
    /// Aggregates are recomputed from the current quotes, expenses and
    /// payments on every call; nothing is cached.
    pub fn summary(&self, id: ProjectId) -> SiteKickResult<ProjectSummary> {
        let project = self
            .storage
            .projects
            .get(id)?
            .ok_or_else(|| SiteKickError::project_not_found(id.to_string()))?;

        let quotes = self.storage.quotes.get_by_project(id)?;
        let expenses = self.storage.expenses.get_by_project(id)?;
        let payments = self.storage.payments.get_by_project(id)?;

        let totals = engine::project_totals(&quotes, &expenses, &payments)?;

        let client = match project.client_id {
            Some(client_id) => self.storage.clients.get(client_id)?,
            None => None,
        };

        Ok(ProjectSummary {
            project,
            client,
            totals,
            quote_count: quotes.len(),
            expense_count: expenses.len(),
            payment_count: payments.len(),
        })
    }

    /// Build summaries for all projects matching the filter
    pub fn list_summaries(
        &self,
        status: Option<ProjectStatus>,
    ) -> SiteKickResult<Vec<ProjectSummary>> {
        let projects = self.list(status, None)?;
        let mut summaries = Vec::with_capacity(projects.len());
        for project in projects {
            summaries.push(self.summary(project.id)?);
        }
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SiteKickPaths;
    use crate::models::{Expense, ItemKind, Money, Payment, Quantity, Quote, QuoteItem};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SiteKickPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    #[test]
    fn test_create_and_find() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProjectService::new(&storage);

        let project = service.create("Kitchen remodel", "12 Oak St", None).unwrap();

        let found = service.find("kitchen remodel").unwrap().unwrap();
        assert_eq!(found.id, project.id);
        assert_eq!(found.address, "12 Oak St");
    }

    #[test]
    fn test_create_rejects_unknown_client() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProjectService::new(&storage);

        let err = service
            .create("Kitchen", "", Some(ClientId::new()))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_with_status_filter() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProjectService::new(&storage);

        let p1 = service.create("Active one", "", None).unwrap();
        let p2 = service.create("Finished one", "", None).unwrap();
        service.set_status(p2.id, ProjectStatus::Completed).unwrap();

        let active = service.list(Some(ProjectStatus::Active), None).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, p1.id);

        let all = service.list(None, None).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_delete_cascades() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProjectService::new(&storage);

        let project = service.create("Doomed", "", None).unwrap();
        storage
            .quotes
            .upsert(Quote::new(project.id, "Estimate"))
            .unwrap();
        storage
            .expenses
            .upsert(Expense::new(
                project.id,
                Money::from_cents(1000),
                "nails",
                date(),
            ))
            .unwrap();
        storage
            .payments
            .upsert(Payment::new(
                project.id,
                Money::from_cents(2000),
                "advance",
                date(),
            ))
            .unwrap();

        service.delete(project.id).unwrap();

        assert_eq!(storage.quotes.count().unwrap(), 0);
        assert_eq!(storage.expenses.count().unwrap(), 0);
        assert_eq!(storage.payments.count().unwrap(), 0);
    }

    #[test]
    fn test_summary_reflects_current_records() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProjectService::new(&storage);

        let project = service.create("Bathroom", "", None).unwrap();

        let mut quote = Quote::new(project.id, "Main estimate");
        quote.add_item(QuoteItem::new(
            "Tiling",
            ItemKind::Work,
            Quantity::parse("25").unwrap(),
            Money::parse("600.00").unwrap(),
        ));
        storage.quotes.upsert(quote).unwrap();
        storage
            .expenses
            .upsert(Expense::new(
                project.id,
                Money::parse("5000.00").unwrap(),
                "tile",
                date(),
            ))
            .unwrap();

        let summary = service.summary(project.id).unwrap();
        assert_eq!(summary.quote_count, 1);
        assert_eq!(
            summary.totals.total_quote_amount,
            Money::parse("15000.00").unwrap()
        );
        assert_eq!(
            summary.totals.expected_profit,
            Money::parse("10000.00").unwrap()
        );
        assert_eq!(
            summary.totals.balance_due,
            Money::parse("15000.00").unwrap()
        );
    }

    #[test]
    fn test_summary_missing_project() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProjectService::new(&storage);

        let err = service.summary(ProjectId::new()).unwrap_err();
        assert!(err.is_not_found());
    }
}
