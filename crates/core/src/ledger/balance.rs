//! Account balance aggregation.
//!
//! Replays journal lines and ad-hoc expense records against an account
//! within a set of entries, nets debit - credit, and flips the sign for
//! credit-normal accounts. Called once per account per statement, which is
//! O(accounts x lines); fine at small-business volumes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::chart::ChartAccount;
use crate::documents::Expense;

use super::entry::{JournalEntry, JournalLine};

/// Raw debit/credit sums for an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSums {
    /// Total debits.
    pub debit: Decimal,
    /// Total credits.
    pub credit: Decimal,
}

impl AccountSums {
    /// Net in the debit-minus-credit convention.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// Returns true if a free-text label refers to the account.
///
/// Matching is exact against the code, the name, or the composite
/// `"code - name"` label; a transaction line must resolve to exactly one
/// account even when entered informally.
#[must_use]
pub fn label_matches(account: &ChartAccount, label: &str) -> bool {
    let label = label.trim();
    label == account.number || label == account.name || label == account.label()
}

/// Returns true if a journal line posts to the account.
///
/// The line's account id is authoritative when present; free-text labels
/// fall back to the three-tier exact match.
#[must_use]
pub fn line_matches(account: &ChartAccount, line: &JournalLine) -> bool {
    match line.account_id {
        Some(id) => id == account.id,
        None => label_matches(account, &line.account),
    }
}

/// Accumulates raw debit/credit sums for an account over journal entries
/// and expense records.
///
/// Expense records are not journal entries; they contribute an implicit
/// debit of their VAT-exclusive amount against their category account.
#[must_use]
pub fn sums_for_account(
    account: &ChartAccount,
    entries: &[JournalEntry],
    expenses: &[Expense],
) -> AccountSums {
    let mut sums = AccountSums::default();

    for entry in entries {
        for line in &entry.lines {
            if line_matches(account, line) {
                sums.debit += line.debit;
                sums.credit += line.credit;
            }
        }
    }

    for expense in expenses {
        if label_matches(account, &expense.category) {
            sums.debit += expense.net_amount();
        }
    }

    sums
}

/// Net balance of an account over the given entries and expenses.
///
/// Debit-normal accounts (assets, expenses) net debit - credit;
/// credit-normal accounts (liabilities, equity, revenue) net credit - debit.
#[must_use]
pub fn balance_of(
    account: &ChartAccount,
    entries: &[JournalEntry],
    expenses: &[Expense],
) -> Decimal {
    let sums = sums_for_account(account, entries, expenses);
    account
        .account_type
        .normal_balance()
        .net(sums.debit, sums.credit)
}
