//! Service layer for SiteKick
//!
//! Services hold the business rules: validation, cross-entity checks and
//! cascades. Each borrows the shared `Storage` and persists through it.

pub mod catalog;
pub mod client;
pub mod expense;
pub mod payment;
pub mod project;
pub mod quote;

pub use catalog::CatalogService;
pub use client::ClientService;
pub use expense::{ExpenseService, ImportResult};
pub use payment::PaymentService;
pub use project::{ProjectService, ProjectSummary};
pub use quote::{QuoteLine, QuoteService, QuoteSummary};
