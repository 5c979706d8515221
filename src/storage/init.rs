//! Storage initialization
//!
//! Handles first-run setup: creates the data directories and a small set of
//! starter catalog items so the first quote doesn't begin from nothing.

use crate::config::paths::SiteKickPaths;
use crate::error::SiteKickError;
use crate::models::{CatalogItem, ItemKind};

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
pub fn initialize_storage(paths: &SiteKickPaths) -> Result<(), SiteKickError> {
    paths.ensure_directories()?;

    if !paths.catalog_file().exists() {
        create_default_catalog(paths)?;
    }

    Ok(())
}

/// Create a starter catalog of common Work and Material lines
fn create_default_catalog(paths: &SiteKickPaths) -> Result<(), SiteKickError> {
    let work = [
        ("Demolition", "m²"),
        ("Tile laying", "m²"),
        ("Painting", "m²"),
        ("Plumbing installation", "point"),
        ("Electrical wiring", "point"),
    ];
    let materials = [
        ("Tile", "m²"),
        ("Paint", "l"),
        ("Cement", "bag"),
        ("Drywall sheet", "pcs"),
    ];

    let mut items = Vec::new();
    for (name, unit) in work {
        items.push(CatalogItem::new(name, ItemKind::Work, unit));
    }
    for (name, unit) in materials {
        items.push(CatalogItem::new(name, ItemKind::Material, unit));
    }

    #[derive(serde::Serialize)]
    struct CatalogData {
        items: Vec<CatalogItem>,
    }

    write_json_atomic(paths.catalog_file(), &CatalogData { items })?;

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &SiteKickPaths) -> bool {
    !paths.catalog_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::CatalogRepository;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SiteKickPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));

        initialize_storage(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.catalog_file().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_default_catalog_created() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SiteKickPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        let repo = CatalogRepository::new(paths.catalog_file());
        repo.load().unwrap();
        assert!(repo.count().unwrap() > 0);
        assert!(repo
            .get_by_name("Tile laying", ItemKind::Work)
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SiteKickPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();
        initialize_storage(&paths).unwrap();

        let repo = CatalogRepository::new(paths.catalog_file());
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 9);
    }
}
