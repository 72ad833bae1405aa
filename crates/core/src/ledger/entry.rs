//! Journal entry domain types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use minibooks_shared::types::{
    AccountId, CompanyId, DocumentId, JournalEntryId, JournalLineId,
};

use crate::chart::AccountType;

/// A single debit/credit line within a journal entry.
///
/// The account is referenced both by id (when the line was posted against a
/// real chart account) and by a free-text label (`"code - name"` or a bare
/// name). The id is authoritative when present; the label is a display cache
/// and the matching key for legacy free-text lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLine {
    /// Unique identifier.
    pub id: JournalLineId,
    /// The chart account this line posts to, when known.
    pub account_id: Option<AccountId>,
    /// Account label: `"code - name"` or a bare name.
    pub account: String,
    /// Account type at posting time.
    pub account_type: AccountType,
    /// Debit amount (zero when this is a credit line).
    pub debit: Decimal,
    /// Credit amount (zero when this is a debit line).
    pub credit: Decimal,
    /// Optional line description.
    pub description: Option<String>,
}

impl JournalLine {
    /// Returns the signed amount in the debit-minus-credit convention.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// A balanced set of debit/credit lines recording one business event.
///
/// Immutable once posted, except for superseding upsert-by-reference (used
/// to avoid duplicate entries when a source document is saved twice).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier.
    pub id: JournalEntryId,
    /// Company (tenant) this entry belongs to.
    pub company_id: CompanyId,
    /// Transaction date.
    pub date: NaiveDate,
    /// Reference, unique per company and stable across re-saves of the same
    /// real-world transaction.
    pub reference: String,
    /// The source document that produced this entry, when any.
    pub source_document_id: Option<DocumentId>,
    /// What this entry records.
    pub description: String,
    /// The debit/credit lines.
    pub lines: Vec<JournalLine>,
    /// Sum of line debits.
    pub total_debit: Decimal,
    /// Sum of line credits.
    pub total_credit: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp (bumped by superseding upserts).
    pub updated_at: DateTime<Utc>,
}
