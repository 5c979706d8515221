//! Project repository for JSON storage
//!
//! Manages loading and saving projects to projects.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SiteKickError;
use crate::models::{Project, ProjectId, ProjectStatus};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ProjectData {
    projects: Vec<Project>,
}

/// Repository for project persistence
pub struct ProjectRepository {
    path: PathBuf,
    data: RwLock<HashMap<ProjectId, Project>>,
}

impl ProjectRepository {
    /// Create a new project repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load projects from disk
    pub fn load(&self) -> Result<(), SiteKickError> {
        let file_data: ProjectData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for project in file_data.projects {
            data.insert(project.id, project);
        }

        Ok(())
    }

    /// Save projects to disk
    pub fn save(&self) -> Result<(), SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = ProjectData {
            projects: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a project by ID
    pub fn get(&self, id: ProjectId) -> Result<Option<Project>, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all projects, newest first
    pub fn get_all(&self) -> Result<Vec<Project>, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut projects: Vec<_> = data.values().cloned().collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.title.cmp(&b.title)));
        Ok(projects)
    }

    /// Get all projects with a given status
    pub fn get_by_status(&self, status: ProjectStatus) -> Result<Vec<Project>, SiteKickError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|p| p.status == status).collect())
    }

    /// Get a project by title (case-insensitive)
    pub fn get_by_title(&self, title: &str) -> Result<Option<Project>, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let title_lower = title.to_lowercase();
        Ok(data
            .values()
            .find(|p| p.title.to_lowercase() == title_lower)
            .cloned())
    }

    /// Search by substring of title or address (case-insensitive)
    pub fn search(&self, query: &str) -> Result<Vec<Project>, SiteKickError> {
        let needle = query.to_lowercase();
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.address.to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// Insert or update a project
    pub fn upsert(&self, project: Project) -> Result<(), SiteKickError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(project.id, project);
        Ok(())
    }

    /// Delete a project
    pub fn delete(&self, id: ProjectId) -> Result<bool, SiteKickError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Check if a project exists
    pub fn exists(&self, id: ProjectId) -> Result<bool, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(&id))
    }

    /// Check if a project title is already taken
    pub fn title_exists(
        &self,
        title: &str,
        exclude_id: Option<ProjectId>,
    ) -> Result<bool, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let title_lower = title.to_lowercase();
        Ok(data
            .values()
            .any(|p| p.title.to_lowercase() == title_lower && Some(p.id) != exclude_id))
    }

    /// Count projects
    pub fn count(&self) -> Result<usize, SiteKickError> {
        let data = self
            .data
            .read()
            .map_err(|e| SiteKickError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
