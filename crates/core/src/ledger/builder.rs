//! Journal entry construction and balance validation.
//!
//! `build` is the single gateway through which every money-moving operation
//! posts an entry. An entry that does not balance is rejected here and never
//! persisted; balance is enforced at construction time and never repaired
//! after the fact.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use minibooks_shared::types::money::{is_balanced, round_cents};
use minibooks_shared::types::{
    AccountId, CompanyId, DocumentId, JournalEntryId, JournalLineId,
};

use crate::chart::AccountType;

use super::entry::{JournalEntry, JournalLine};
use super::error::LedgerError;

/// Input for a single line of a new journal entry.
#[derive(Debug, Clone)]
pub struct NewJournalLine {
    /// The chart account this line posts to, when known.
    pub account_id: Option<AccountId>,
    /// Account label: `"code - name"` or a bare name.
    pub account: String,
    /// Account type at posting time.
    pub account_type: AccountType,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Optional line description.
    pub description: Option<String>,
}

impl NewJournalLine {
    /// Convenience constructor for a debit line.
    #[must_use]
    pub fn debit(
        account_id: Option<AccountId>,
        account: impl Into<String>,
        account_type: AccountType,
        amount: Decimal,
    ) -> Self {
        Self {
            account_id,
            account: account.into(),
            account_type,
            debit: amount,
            credit: Decimal::ZERO,
            description: None,
        }
    }

    /// Convenience constructor for a credit line.
    #[must_use]
    pub fn credit(
        account_id: Option<AccountId>,
        account: impl Into<String>,
        account_type: AccountType,
        amount: Decimal,
    ) -> Self {
        Self {
            account_id,
            account: account.into(),
            account_type,
            debit: Decimal::ZERO,
            credit: amount,
            description: None,
        }
    }
}

/// Input for constructing a new journal entry.
#[derive(Debug, Clone)]
pub struct NewJournalEntry {
    /// Company (tenant) the entry belongs to.
    pub company_id: CompanyId,
    /// Transaction date.
    pub date: NaiveDate,
    /// Reference, unique per real-world transaction and stable across
    /// re-saves of it.
    pub reference: String,
    /// The source document producing this entry, when any.
    pub source_document_id: Option<DocumentId>,
    /// What this entry records.
    pub description: String,
    /// The debit/credit lines.
    pub lines: Vec<NewJournalLine>,
}

/// Constructs a journal entry from a set of lines.
///
/// Amounts are rounded to cents. Fails with [`LedgerError::Unbalanced`]
/// when `|sum(debit) - sum(credit)| >= 0.01`, with [`LedgerError::NoLines`]
/// when the line set is empty, and with [`LedgerError::NegativeAmount`] for
/// negative line amounts.
pub fn build(input: NewJournalEntry) -> Result<JournalEntry, LedgerError> {
    if input.lines.is_empty() {
        return Err(LedgerError::NoLines);
    }

    let mut lines = Vec::with_capacity(input.lines.len());
    let mut total_debit = Decimal::ZERO;
    let mut total_credit = Decimal::ZERO;

    for line in input.lines {
        if line.debit < Decimal::ZERO || line.credit < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount);
        }
        let debit = round_cents(line.debit);
        let credit = round_cents(line.credit);
        total_debit += debit;
        total_credit += credit;
        lines.push(JournalLine {
            id: JournalLineId::new(),
            account_id: line.account_id,
            account: line.account,
            account_type: line.account_type,
            debit,
            credit,
            description: line.description,
        });
    }

    if !is_balanced(total_debit, total_credit) {
        return Err(LedgerError::Unbalanced {
            debits: total_debit,
            credits: total_credit,
        });
    }

    let now = Utc::now();
    Ok(JournalEntry {
        id: JournalEntryId::new(),
        company_id: input.company_id,
        date: input.date,
        reference: input.reference,
        source_document_id: input.source_document_id,
        description: input.description,
        lines,
        total_debit,
        total_credit,
        created_at: now,
        updated_at: now,
    })
}
