//! Project model
//!
//! A construction project with an optional client. Financial aggregates
//! (quoted amount, expenses, payments, profit, balance) are never stored on
//! the project; they are recomputed from the current quotes, expenses and
//! payments on every read so stored state can never drift.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ClientId, ProjectId};

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Work is ongoing
    #[default]
    Active,
    /// Work is finished
    Completed,
    /// Hidden from normal listings
    Archived,
}

impl ProjectStatus {
    /// Parse a status from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "completed" | "done" => Some(Self::Completed),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Completed => write!(f, "Completed"),
            Self::Archived => write!(f, "Archived"),
        }
    }
}

/// A construction project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: ProjectId,

    /// Project title
    pub title: String,

    /// Site address
    #[serde(default)]
    pub address: String,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// Lifecycle status
    #[serde(default)]
    pub status: ProjectStatus,

    /// The client this project is for (optional)
    pub client_id: Option<ClientId>,

    /// When the project was created
    pub created_at: DateTime<Utc>,

    /// When the project was last modified
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new active project
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::new(),
            title: title.into(),
            address: String::new(),
            notes: String::new(),
            status: ProjectStatus::Active,
            client_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a project with an address and client
    pub fn with_details(
        title: impl Into<String>,
        address: impl Into<String>,
        client_id: Option<ClientId>,
    ) -> Self {
        let mut project = Self::new(title);
        project.address = address.into();
        project.client_id = client_id;
        project
    }

    /// Check if the project is archived
    pub fn is_archived(&self) -> bool {
        self.status == ProjectStatus::Archived
    }

    /// Set the status
    pub fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Mark the project as completed
    pub fn complete(&mut self) {
        self.set_status(ProjectStatus::Completed);
    }

    /// Archive the project
    pub fn archive(&mut self) {
        self.set_status(ProjectStatus::Archived);
    }

    /// Return the project to active status
    pub fn reactivate(&mut self) {
        self.set_status(ProjectStatus::Active);
    }

    /// Mark the project as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the project
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Project title cannot be empty".into());
        }
        Ok(())
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project() {
        let project = Project::new("Kitchen remodel");
        assert_eq!(project.title, "Kitchen remodel");
        assert_eq!(project.status, ProjectStatus::Active);
        assert!(project.client_id.is_none());
        assert!(project.validate().is_ok());
    }

    #[test]
    fn test_status_transitions() {
        let mut project = Project::new("Garage");

        project.complete();
        assert_eq!(project.status, ProjectStatus::Completed);

        project.archive();
        assert!(project.is_archived());

        project.reactivate();
        assert_eq!(project.status, ProjectStatus::Active);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(ProjectStatus::parse("active"), Some(ProjectStatus::Active));
        assert_eq!(ProjectStatus::parse("Done"), Some(ProjectStatus::Completed));
        assert_eq!(
            ProjectStatus::parse("ARCHIVED"),
            Some(ProjectStatus::Archived)
        );
        assert_eq!(ProjectStatus::parse("bogus"), None);
    }

    #[test]
    fn test_validate_empty_title() {
        let project = Project::new("  ");
        assert!(project.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let project = Project::with_details("Deck", "12 Oak St", Some(ClientId::new()));
        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(project.id, back.id);
        assert_eq!(project.client_id, back.client_id);
        assert_eq!(back.status, ProjectStatus::Active);
    }
}
