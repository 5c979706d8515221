//! Client service
//!
//! Business logic for client management: CRUD, lookup by name or ID, and
//! detaching projects when a client is removed.

use crate::error::{SiteKickError, SiteKickResult};
use crate::models::{Client, ClientId};
use crate::storage::Storage;

/// Service for client management
pub struct ClientService<'a> {
    storage: &'a Storage,
}

impl<'a> ClientService<'a> {
    /// Create a new client service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new client
    pub fn create(&self, name: &str, phone: &str, email: &str) -> SiteKickResult<Client> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SiteKickError::Validation(
                "Client name cannot be empty".into(),
            ));
        }

        if self.storage.clients.name_exists(name, None)? {
            return Err(SiteKickError::Duplicate {
                entity_type: "Client",
                identifier: name.to_string(),
            });
        }

        let client = Client::with_contact(name, phone, email);

        client
            .validate()
            .map_err(SiteKickError::Validation)?;

        self.storage.clients.upsert(client.clone())?;
        self.storage.clients.save()?;

        Ok(client)
    }

    /// Get a client by ID
    pub fn get(&self, id: ClientId) -> SiteKickResult<Option<Client>> {
        self.storage.clients.get(id)
    }

    /// Find a client by name or ID string
    pub fn find(&self, identifier: &str) -> SiteKickResult<Option<Client>> {
        if let Some(client) = self.storage.clients.get_by_name(identifier)? {
            return Ok(Some(client));
        }

        if let Ok(id) = identifier.parse::<ClientId>() {
            return self.storage.clients.get(id);
        }

        Ok(None)
    }

    /// Get all clients
    pub fn list(&self) -> SiteKickResult<Vec<Client>> {
        self.storage.clients.get_all()
    }

    /// Search clients by name, phone or email substring
    pub fn search(&self, query: &str) -> SiteKickResult<Vec<Client>> {
        self.storage.clients.search(query)
    }

    /// Update a client's fields; `None` leaves a field unchanged
    pub fn update(
        &self,
        id: ClientId,
        name: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
        notes: Option<&str>,
    ) -> SiteKickResult<Client> {
        let mut client = self
            .storage
            .clients
            .get(id)?
            .ok_or_else(|| SiteKickError::client_not_found(id.to_string()))?;

        if let Some(name) = name {
            let name = name.trim();
            if name.is_empty() {
                return Err(SiteKickError::Validation(
                    "Client name cannot be empty".into(),
                ));
            }
            if self.storage.clients.name_exists(name, Some(id))? {
                return Err(SiteKickError::Duplicate {
                    entity_type: "Client",
                    identifier: name.to_string(),
                });
            }
            client.name = name.to_string();
        }
        if let Some(phone) = phone {
            client.phone = phone.to_string();
        }
        if let Some(email) = email {
            client.email = email.to_string();
        }
        if let Some(notes) = notes {
            client.notes = notes.to_string();
        }
        client.touch();

        self.storage.clients.upsert(client.clone())?;
        self.storage.clients.save()?;

        Ok(client)
    }

    /// Delete a client, detaching any projects that referenced them
    ///
    /// Returns how many projects were detached.
    pub fn delete(&self, id: ClientId) -> SiteKickResult<usize> {
        if !self.storage.clients.delete(id)? {
            return Err(SiteKickError::client_not_found(id.to_string()));
        }

        let mut detached = 0;
        for mut project in self.storage.projects.get_all()? {
            if project.client_id == Some(id) {
                project.client_id = None;
                project.touch();
                self.storage.projects.upsert(project)?;
                detached += 1;
            }
        }

        self.storage.clients.save()?;
        if detached > 0 {
            self.storage.projects.save()?;
        }

        Ok(detached)
    }
}
