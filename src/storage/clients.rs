//! Client repository for JSON storage
//!
//! Manages loading and saving clients to clients.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SiteKickError;
use crate::models::{Client, ClientId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ClientData {
    clients: Vec<Client>,
}

/// Repository for client persistence
pub struct ClientRepository {
    path: PathBuf,
    data: RwLock<HashMap<ClientId, Client>>,
}

impl ClientRepository {
    /// Create a new client repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load clients from disk
    pub fn load(&self) -> Result<(), SiteKickError> {
        let file_data: ClientData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for client in file_data.clients {
            data.insert(client.id, client);
        }

        Ok(())
    }

    /// Save clients to disk
    pub fn save(&self) -> Result<(), SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = ClientData {
            clients: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a client by ID
    pub fn get(&self, id: ClientId) -> Result<Option<Client>, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all clients sorted by name
    pub fn get_all(&self) -> Result<Vec<Client>, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut clients: Vec<_> = data.values().cloned().collect();
        clients.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clients)
    }

    /// Get a client by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Client>, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|c| c.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Search by substring of name, phone or email (case-insensitive)
    pub fn search(&self, query: &str) -> Result<Vec<Client>, SiteKickError> {
        let needle = query.to_lowercase();
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.phone.to_lowercase().contains(&needle)
                    || c.email.to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// Insert or update a client
    pub fn upsert(&self, client: Client) -> Result<(), SiteKickError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(client.id, client);
        Ok(())
    }

    /// Delete a client
    pub fn delete(&self, id: ClientId) -> Result<bool, SiteKickError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Check if a client name is already taken
    pub fn name_exists(
        &self,
        name: &str,
        exclude_id: Option<ClientId>,
    ) -> Result<bool, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .any(|c| c.name.to_lowercase() == name_lower && Some(c.id) != exclude_id))
    }

    /// Count clients
    pub fn count(&self) -> Result<usize, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
