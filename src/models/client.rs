//! Client model
//!
//! A client is the customer a project is carried out for. Contact details
//! only; financial state lives on the project side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ClientId;

/// A customer of the contractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier
    pub id: ClientId,

    /// Client name (person or company)
    pub name: String,

    /// Phone number
    #[serde(default)]
    pub phone: String,

    /// Email address
    #[serde(default)]
    pub email: String,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// When the client was created
    pub created_at: DateTime<Utc>,

    /// When the client was last modified
    pub updated_at: DateTime<Utc>,
}

impl Client {
    /// Create a new client
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ClientId::new(),
            name: name.into(),
            phone: String::new(),
            email: String::new(),
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a client with contact details
    pub fn with_contact(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let mut client = Self::new(name);
        client.phone = phone.into();
        client.email = email.into();
        client
    }

    /// Mark the client as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the client
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Client name cannot be empty".into());
        }
        Ok(())
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client() {
        let client = Client::new("Smith Family");
        assert_eq!(client.name, "Smith Family");
        assert!(client.phone.is_empty());
        assert!(client.validate().is_ok());
    }

    #[test]
    fn test_with_contact() {
        let client = Client::with_contact("Acme LLC", "555-0101", "office@acme.test");
        assert_eq!(client.phone, "555-0101");
        assert_eq!(client.email, "office@acme.test");
    }

    #[test]
    fn test_validate_empty_name() {
        let client = Client::new("   ");
        assert!(client.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let client = Client::with_contact("Smith Family", "555-0101", "smith@example.test");
        let json = serde_json::to_string(&client).unwrap();
        let back: Client = serde_json::from_str(&json).unwrap();
        assert_eq!(client.id, back.id);
        assert_eq!(client.name, back.name);
    }
}
