//! Invoices, credit notes and their derived lifecycle status.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use minibooks_shared::types::{money, CompanyId, InvoiceId};
use minibooks_shared::AppError;

use super::payment::{total_paid, Payment};

/// Invoice kind. A credit note is a same-shaped record with negative
/// economic effect, linked to its parent invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceKind {
    /// A sales invoice.
    Invoice,
    /// A credit note against an invoice.
    CreditNote,
}

/// Derived invoice lifecycle status.
///
/// Never persisted; recomputed fresh on every read from the payment list,
/// linked credit notes, and the due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// No payments received.
    Unpaid,
    /// Partially paid, not yet due.
    PartlyPaid,
    /// Fully settled (or a credit note, which is always inert).
    Paid,
    /// Past due with an outstanding amount.
    Overdue,
}

/// One line of an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique identifier.
    pub id: Uuid,
    /// What was sold.
    pub description: String,
    /// Quantity sold.
    pub quantity: Decimal,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Line amount (quantity x unit price).
    pub amount: Decimal,
}

/// A sales invoice or credit note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier.
    pub id: InvoiceId,
    /// Company (tenant) this invoice belongs to.
    pub company_id: CompanyId,
    /// Human-readable invoice number; credit notes use `CN-<parent number>`.
    pub number: String,
    /// Invoice or credit note.
    pub kind: InvoiceKind,
    /// Customer name.
    pub customer: String,
    /// Invoice lines.
    pub line_items: Vec<LineItem>,
    /// Sum of line amounts before discount and tax.
    pub subtotal: Decimal,
    /// Tax charged on the invoice.
    pub tax_amount: Decimal,
    /// Discount applied to the subtotal.
    pub discount: Decimal,
    /// Grand total: `subtotal - discount + tax_amount`.
    pub total: Decimal,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Due date.
    pub due_date: NaiveDate,
    /// Payments received, append-only.
    pub payments: Vec<Payment>,
    /// Credit notes issued against this invoice.
    pub credit_notes: Vec<InvoiceId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Builds the conventional credit note number for an invoice number.
#[must_use]
pub fn credit_note_number(invoice_number: &str) -> String {
    format!("CN-{invoice_number}")
}

impl Invoice {
    /// Validates the save-time total identity
    /// `total == subtotal - discount + tax_amount` (one cent tolerance).
    ///
    /// Checked at save time only, never re-validated later.
    pub fn validate_totals(&self) -> Result<(), AppError> {
        let expected = self.subtotal - self.discount + self.tax_amount;
        if (expected - self.total).abs() >= money::BALANCE_TOLERANCE {
            return Err(AppError::Validation(format!(
                "invoice {} total {} does not match subtotal - discount + tax = {}",
                self.number, self.total, expected
            )));
        }
        Ok(())
    }

    /// Returns true if this record is a credit note.
    #[must_use]
    pub fn is_credit_note(&self) -> bool {
        self.kind == InvoiceKind::CreditNote
    }

    /// Credit notes from `candidates` linked to this invoice, either through
    /// the `credit_notes` id list or the `CN-<number>` naming convention.
    #[must_use]
    pub fn linked_credit_notes<'a>(&self, candidates: &'a [Invoice]) -> Vec<&'a Invoice> {
        let cn_number = credit_note_number(&self.number);
        candidates
            .iter()
            .filter(|c| {
                c.is_credit_note()
                    && (self.credit_notes.contains(&c.id) || c.number == cn_number)
            })
            .collect()
    }

    /// Remaining amount due: `total - payments - linked credit note totals`.
    ///
    /// Always recomputed, never stored.
    #[must_use]
    pub fn amount_due(&self, candidates: &[Invoice]) -> Decimal {
        let credited: Decimal = self
            .linked_credit_notes(candidates)
            .iter()
            .map(|c| c.total)
            .sum();
        self.total - total_paid(&self.payments) - credited
    }

    /// Derives the invoice status as of `today`.
    ///
    /// Credit notes are always `Paid` (inert). Otherwise: paid when nothing
    /// is due; overdue when past due (overdue takes precedence over
    /// partly-paid even if partially paid); partly-paid when some but not
    /// all is due; unpaid otherwise.
    #[must_use]
    pub fn status(&self, candidates: &[Invoice], today: NaiveDate) -> InvoiceStatus {
        if self.is_credit_note() {
            return InvoiceStatus::Paid;
        }
        let due = self.amount_due(candidates);
        if due <= Decimal::ZERO {
            InvoiceStatus::Paid
        } else if self.due_date < today {
            InvoiceStatus::Overdue
        } else if due < self.total {
            InvoiceStatus::PartlyPaid
        } else {
            InvoiceStatus::Unpaid
        }
    }
}
