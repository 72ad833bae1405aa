//! Source documents: invoices, credit notes, expenses, payments.
//!
//! Statuses are computed properties derived from the payment lists, never
//! persisted, so they cannot drift from the payments.

pub mod expense;
pub mod invoice;
pub mod payment;

pub use expense::{vat_breakdown, Expense, ExpenseStatus};
pub use invoice::{credit_note_number, Invoice, InvoiceKind, InvoiceStatus, LineItem};
pub use payment::{total_paid, Payment, PaymentMethod};
