//! Financial aggregation
//!
//! Pure functions that derive quote and project totals from line items,
//! expenses and payments. Nothing here touches storage or holds state; each
//! call takes a snapshot and returns derived values, so calls are safe to
//! repeat and to run concurrently on independent inputs.
//!
//! Rounding policy: each line total is `quantity × unit_price` rounded
//! half-up to whole cents, and all higher-level figures are exact integer
//! sums of those rounded lines. Work and Material subtotals therefore always
//! reconcile with the grand total to the cent, and summation order cannot
//! affect any result.

use crate::error::{SiteKickError, SiteKickResult};
use crate::models::{Expense, ItemKind, Money, Payment, Quote, QuoteItem};

/// Derived totals for a single quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteTotals {
    /// Sum of line totals where kind is Work
    pub work_amount: Money,
    /// Sum of line totals where kind is Material
    pub material_amount: Money,
    /// work_amount + material_amount, exactly
    pub total_amount: Money,
}

impl QuoteTotals {
    /// Totals of an empty quote
    pub fn zero() -> Self {
        Self {
            work_amount: Money::zero(),
            material_amount: Money::zero(),
            total_amount: Money::zero(),
        }
    }
}

/// Derived totals for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectTotals {
    /// Sum of total_amount over all quotes
    pub total_quote_amount: Money,
    /// Sum of expense amounts
    pub total_expenses: Money,
    /// Sum of payment amounts
    pub total_payments_received: Money,
    /// total_quote_amount - total_expenses (signed)
    pub expected_profit: Money,
    /// total_quote_amount - total_payments_received (signed)
    pub balance_due: Money,
}

impl ProjectTotals {
    /// Totals of a project with no quotes, expenses or payments
    pub fn zero() -> Self {
        Self {
            total_quote_amount: Money::zero(),
            total_expenses: Money::zero(),
            total_payments_received: Money::zero(),
            expected_profit: Money::zero(),
            balance_due: Money::zero(),
        }
    }
}

/// Compute the rounded total for one line item.
///
/// Fails with `InvalidAmount` if the quantity or unit price is negative;
/// invalid input is surfaced, never clamped.
pub fn line_total(item: &QuoteItem) -> SiteKickResult<Money> {
    if item.quantity.is_negative() {
        return Err(SiteKickError::InvalidAmount(format!(
            "quantity of item '{}' is negative",
            item.name
        )));
    }
    if item.unit_price.is_negative() {
        return Err(SiteKickError::InvalidAmount(format!(
            "unit price of item '{}' is negative",
            item.name
        )));
    }
    Ok(item.quantity.times(item.unit_price))
}

/// Compute Work/Material subtotals and the grand total for a quote's items.
///
/// The grand total is the sum of the two already-rounded subtotals, never a
/// re-rounding of the raw sum, so `total_amount == work_amount +
/// material_amount` holds bit-exactly.
pub fn quote_totals(items: &[QuoteItem]) -> SiteKickResult<QuoteTotals> {
    let mut work_amount = Money::zero();
    let mut material_amount = Money::zero();

    for item in items {
        let total = line_total(item)?;
        match item.kind {
            ItemKind::Work => work_amount += total,
            ItemKind::Material => material_amount += total,
        }
    }

    Ok(QuoteTotals {
        work_amount,
        material_amount,
        total_amount: work_amount + material_amount,
    })
}

/// Compute a project's financial summary from its quotes, expenses and
/// payments.
///
/// Expected profit and balance due are signed and may be negative; all other
/// outputs are non-negative for well-formed input.
pub fn project_totals(
    quotes: &[Quote],
    expenses: &[Expense],
    payments: &[Payment],
) -> SiteKickResult<ProjectTotals> {
    let mut total_quote_amount = Money::zero();
    for quote in quotes {
        total_quote_amount += quote_totals(&quote.items)?.total_amount;
    }

    let mut total_expenses = Money::zero();
    for expense in expenses {
        if expense.amount.is_negative() {
            return Err(SiteKickError::InvalidAmount(format!(
                "expense '{}' has a negative amount",
                expense.description
            )));
        }
        total_expenses += expense.amount;
    }

    let mut total_payments_received = Money::zero();
    for payment in payments {
        if payment.amount.is_negative() {
            return Err(SiteKickError::InvalidAmount(format!(
                "payment '{}' has a negative amount",
                payment.description
            )));
        }
        total_payments_received += payment.amount;
    }

    Ok(ProjectTotals {
        total_quote_amount,
        total_expenses,
        total_payments_received,
        expected_profit: total_quote_amount - total_expenses,
        balance_due: total_quote_amount - total_payments_received,
    })
}
