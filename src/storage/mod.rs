//! Storage layer for SiteKick
//!
//! JSON file storage with atomic writes and automatic directory creation.
//! One repository per entity, coordinated by `Storage`.

pub mod catalog;
pub mod clients;
pub mod expenses;
pub mod file_io;
pub mod init;
pub mod payments;
pub mod projects;
pub mod quotes;

pub use catalog::CatalogRepository;
pub use clients::ClientRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use payments::PaymentRepository;
pub use projects::ProjectRepository;
pub use quotes::QuoteRepository;

use crate::config::paths::SiteKickPaths;
use crate::error::SiteKickError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SiteKickPaths,
    pub clients: ClientRepository,
    pub projects: ProjectRepository,
    pub quotes: QuoteRepository,
    pub expenses: ExpenseRepository,
    pub payments: PaymentRepository,
    pub catalog: CatalogRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SiteKickPaths) -> Result<Self, SiteKickError> {
        paths.ensure_directories()?;

        Ok(Self {
            clients: ClientRepository::new(paths.clients_file()),
            projects: ProjectRepository::new(paths.projects_file()),
            quotes: QuoteRepository::new(paths.quotes_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            payments: PaymentRepository::new(paths.payments_file()),
            catalog: CatalogRepository::new(paths.catalog_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SiteKickPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), SiteKickError> {
        self.clients.load()?;
        self.projects.load()?;
        self.quotes.load()?;
        self.expenses.load()?;
        self.payments.load()?;
        self.catalog.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), SiteKickError> {
        self.clients.save()?;
        self.projects.save()?;
        self.quotes.save()?;
        self.expenses.save()?;
        self.payments.save()?;
        self.catalog.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}
