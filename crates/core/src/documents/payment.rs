//! Payments embedded in invoices and expenses.
//!
//! Payments are append-only; amounts due are always recomputed from the
//! payment list, never stored.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use minibooks_shared::types::PaymentId;

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash payment.
    Cash,
    /// Bank transfer.
    BankTransfer,
    /// Card payment.
    Card,
    /// Cheque.
    Cheque,
    /// Anything else.
    Other,
}

/// A single payment against an invoice or expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier.
    pub id: PaymentId,
    /// Amount paid.
    pub amount: Decimal,
    /// Date of payment.
    pub date: NaiveDate,
    /// Payment method.
    pub method: PaymentMethod,
    /// Optional external reference (bank line, receipt number).
    pub reference: Option<String>,
}

/// Sums a payment list.
#[must_use]
pub fn total_paid(payments: &[Payment]) -> Decimal {
    payments.iter().map(|p| p.amount).sum()
}
