//! SiteKick - Business management for contractors, from the terminal
//!
//! SiteKick keeps a contractor's projects, clients, quotes, expenses and
//! payments in local JSON files and derives every financial figure on demand.
//! Quotes are built from Work and Material line items; project profit and
//! balance due are recomputed from the raw records on every read, so stored
//! state can never drift from the numbers shown.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (projects, clients, quotes, expenses, payments)
//! - `engine`: Pure aggregation of quote and project totals
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Terminal and CSV reports
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use sitekick::config::{paths::SiteKickPaths, settings::Settings};
//!
//! let paths = SiteKickPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::SiteKickError;
