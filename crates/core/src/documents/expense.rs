//! Expense records and their derived lifecycle status.
//!
//! Expenses are not journal entries, but the balance aggregator treats them
//! as an implicit debit against their category account (VAT-exclusive) and
//! an implicit credit against trade creditors.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use minibooks_shared::types::money::round_cents;
use minibooks_shared::types::{CompanyId, ExpenseId};

use super::payment::{total_paid, Payment, PaymentMethod};

/// Expense lifecycle status.
///
/// `Approved` and `Rejected` are manual markers and sticky; the payment
/// states are always derived from the payment list and due date, never
/// stored, so they cannot drift from the payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    /// Awaiting review.
    Pending,
    /// Manually approved.
    Approved,
    /// Manually rejected; terminal.
    Rejected,
    /// Fully settled.
    Paid,
    /// Partially settled.
    PartlyPaid,
    /// Past due with an outstanding amount.
    Overdue,
}

/// An ad-hoc expense record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier.
    pub id: ExpenseId,
    /// Company (tenant) this expense belongs to.
    pub company_id: CompanyId,
    /// Expense date.
    pub date: NaiveDate,
    /// Who was paid.
    pub vendor: String,
    /// Category as an account label ("code - name" or bare name), not a
    /// foreign key.
    pub category: String,
    /// Amount; VAT-inclusive when `includes_vat` is set.
    pub amount: Decimal,
    /// Intended payment method.
    pub payment_method: PaymentMethod,
    /// Manual review marker (`Pending` / `Approved` / `Rejected`).
    pub review_status: ExpenseStatus,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Payments made, append-only.
    pub payments: Vec<Payment>,
    /// Whether `amount` includes VAT.
    pub includes_vat: bool,
    /// VAT rate in percent, when applicable.
    pub vat_rate: Option<Decimal>,
    /// VAT portion of `amount`, when applicable.
    pub vat_amount: Option<Decimal>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Splits a VAT-inclusive gross amount into `(net, vat)` for a rate given
/// in percent.
#[must_use]
pub fn vat_breakdown(gross: Decimal, rate_percent: Decimal) -> (Decimal, Decimal) {
    let divisor = Decimal::ONE + rate_percent / Decimal::ONE_HUNDRED;
    let net = round_cents(gross / divisor);
    (net, gross - net)
}

impl Expense {
    /// The VAT-exclusive amount that feeds ledger aggregation.
    #[must_use]
    pub fn net_amount(&self) -> Decimal {
        if self.includes_vat {
            self.amount - self.vat_amount.unwrap_or(Decimal::ZERO)
        } else {
            self.amount
        }
    }

    /// Sum of payments made against this expense.
    #[must_use]
    pub fn amount_paid(&self) -> Decimal {
        total_paid(&self.payments)
    }

    /// Remaining amount due. Always recomputed.
    #[must_use]
    pub fn amount_due(&self) -> Decimal {
        self.amount - self.amount_paid()
    }

    /// Derives the expense status as of `today`.
    ///
    /// `Rejected` is terminal. Payment states are derived from the payment
    /// list: paid when nothing is due, overdue when past due (overriding
    /// partly-paid), partly-paid when some is paid. Otherwise the manual
    /// review marker (`Pending` / `Approved`) is retained.
    #[must_use]
    pub fn status(&self, today: NaiveDate) -> ExpenseStatus {
        if self.review_status == ExpenseStatus::Rejected {
            return ExpenseStatus::Rejected;
        }
        let due = self.amount_due();
        if due <= Decimal::ZERO {
            return ExpenseStatus::Paid;
        }
        if self.due_date.is_some_and(|d| d < today) {
            return ExpenseStatus::Overdue;
        }
        if due < self.amount {
            return ExpenseStatus::PartlyPaid;
        }
        self.review_status
    }
}
