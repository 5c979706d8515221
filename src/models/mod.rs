//! Core data models for SiteKick
//!
//! The data structures that represent the contractor domain: clients,
//! projects, quotes with Work/Material line items, expenses, payments, and
//! the reusable item catalog.

pub mod catalog;
pub mod client;
pub mod expense;
pub mod ids;
pub mod money;
pub mod payment;
pub mod project;
pub mod quantity;
pub mod quote;

pub use catalog::CatalogItem;
pub use client::Client;
pub use expense::Expense;
pub use ids::{
    CatalogItemId, ClientId, ExpenseId, PaymentId, ProjectId, QuoteId, QuoteItemId,
};
pub use money::{Money, MoneyParseError};
pub use payment::Payment;
pub use project::{Project, ProjectStatus};
pub use quantity::Quantity;
pub use quote::{ItemKind, Quote, QuoteItem};
