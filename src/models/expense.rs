//! Expense model
//!
//! Money spent on a project: materials bought, subcontractors paid, fuel.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseId, ProjectId};
use super::money::Money;

/// A cost recorded against a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// The project this expense belongs to
    pub project_id: ProjectId,

    /// Amount spent (non-negative)
    pub amount: Money,

    /// What the money went on
    #[serde(default)]
    pub description: String,

    /// When the expense occurred
    pub expense_date: NaiveDate,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        project_id: ProjectId,
        amount: Money,
        description: impl Into<String>,
        expense_date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            project_id,
            amount,
            description: description.into(),
            expense_date,
            created_at: Utc::now(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), String> {
        if self.amount.is_negative() {
            return Err("Expense amount cannot be negative".into());
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.expense_date.format("%Y-%m-%d"),
            self.amount,
            self.description
        )
    }
}
