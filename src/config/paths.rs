//! Path management for SiteKick
//!
//! Resolves where configuration and data files live.
//!
//! ## Path Resolution Order
//!
//! 1. `SITEKICK_DATA_DIR` environment variable (if set)
//! 2. Platform config directory via `directories` (e.g. `~/.config/sitekick`
//!    on Linux, `%APPDATA%\sitekick` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SiteKickError;

/// Manages all paths used by SiteKick
#[derive(Debug, Clone)]
pub struct SiteKickPaths {
    /// Base directory for all SiteKick data
    base_dir: PathBuf,
}

impl SiteKickPaths {
    /// Create a new SiteKickPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SiteKickError> {
        let base_dir = if let Ok(custom) = std::env::var("SITEKICK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "sitekick").ok_or_else(|| {
                SiteKickError::Config("Could not determine a home directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create SiteKickPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to clients.json
    pub fn clients_file(&self) -> PathBuf {
        self.data_dir().join("clients.json")
    }

    /// Get the path to projects.json
    pub fn projects_file(&self) -> PathBuf {
        self.data_dir().join("projects.json")
    }

    /// Get the path to quotes.json
    pub fn quotes_file(&self) -> PathBuf {
        self.data_dir().join("quotes.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Get the path to payments.json
    pub fn payments_file(&self) -> PathBuf {
        self.data_dir().join("payments.json")
    }

    /// Get the path to catalog.json
    pub fn catalog_file(&self) -> PathBuf {
        self.data_dir().join("catalog.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SiteKickError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SiteKickError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SiteKickError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if SiteKick has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SiteKickPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SiteKickPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.projects_file(),
            temp_dir.path().join("data").join("projects.json")
        );
        assert_eq!(
            paths.catalog_file(),
            temp_dir.path().join("data").join("catalog.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SiteKickPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }
}
