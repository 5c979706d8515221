//! Configuration module for SiteKick
//!
//! Provides configuration management including:
//! - Platform path resolution
//! - User settings persistence
//! - The business profile printed on quotes

pub mod paths;
pub mod settings;

pub use paths::SiteKickPaths;
pub use settings::{BusinessProfile, Settings};
