//! Payment model
//!
//! Money received from the client against a project.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{PaymentId, ProjectId};
use super::money::Money;

/// A payment received from the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,

    /// The project this payment belongs to
    pub project_id: ProjectId,

    /// Amount received (non-negative)
    pub amount: Money,

    /// What the payment covers ("advance", "final settlement")
    #[serde(default)]
    pub description: String,

    /// When the payment was received
    pub payment_date: NaiveDate,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Create a new payment
    pub fn new(
        project_id: ProjectId,
        amount: Money,
        description: impl Into<String>,
        payment_date: NaiveDate,
    ) -> Self {
        Self {
            id: PaymentId::new(),
            project_id,
            amount,
            description: description.into(),
            payment_date,
            created_at: Utc::now(),
        }
    }

    /// Validate the payment
    pub fn validate(&self) -> Result<(), String> {
        if self.amount.is_negative() {
            return Err("Payment amount cannot be negative".into());
        }
        Ok(())
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.payment_date.format("%Y-%m-%d"),
            self.amount,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_payment() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let payment = Payment::new(
            ProjectId::new(),
            Money::from_cents(5_000_000),
            "advance",
            date,
        );

        assert_eq!(payment.amount.cents(), 5_000_000);
        assert!(payment.validate().is_ok());
    }

    #[test]
    fn test_validate_negative_amount() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let payment = Payment::new(ProjectId::new(), Money::from_cents(-500), "oops", date);
        assert!(payment.validate().is_err());
    }
}
