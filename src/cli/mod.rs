//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod catalog;
pub mod client;
pub mod expense;
pub mod payment;
pub mod project;
pub mod quote;
pub mod report;

pub use catalog::{handle_catalog_command, CatalogCommands};
pub use client::{handle_client_command, ClientCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use payment::{handle_payment_command, PaymentCommands};
pub use project::{handle_project_command, ProjectCommands};
pub use quote::{handle_quote_command, QuoteCommands};
pub use report::{handle_report_command, ReportCommands};
