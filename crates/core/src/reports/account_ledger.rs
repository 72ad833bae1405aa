//! Per-account ledger view with running balance.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::chart::ChartAccount;
use crate::documents::Expense;
use crate::ledger::{label_matches, line_matches, JournalEntry};

/// One transaction row in an account's ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Transaction date.
    pub date: NaiveDate,
    /// Source reference.
    pub reference: String,
    /// What the transaction records.
    pub description: String,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Running balance after this row, in the account's normal convention.
    pub balance: Decimal,
}

/// Chronological ledger for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountLedger {
    /// Account label.
    pub account: String,
    /// Transaction rows, oldest first.
    pub rows: Vec<LedgerRow>,
    /// Balance after the last row.
    pub closing_balance: Decimal,
}

struct RawRow {
    date: NaiveDate,
    reference: String,
    description: String,
    debit: Decimal,
    credit: Decimal,
}

/// Generates the ledger view for one account.
///
/// Rows sharing the same `(reference, date, debit, credit)` are collapsed
/// to one; the same source event can reach the books through both a journal
/// posting and an expense record, and must not count twice.
#[must_use]
pub fn account_ledger(
    account: &ChartAccount,
    entries: &[JournalEntry],
    expenses: &[Expense],
) -> AccountLedger {
    let mut raw: Vec<RawRow> = Vec::new();

    for entry in entries {
        for line in &entry.lines {
            if line_matches(account, line) {
                raw.push(RawRow {
                    date: entry.date,
                    reference: entry.reference.clone(),
                    description: line
                        .description
                        .clone()
                        .unwrap_or_else(|| entry.description.clone()),
                    debit: line.debit,
                    credit: line.credit,
                });
            }
        }
    }

    for expense in expenses {
        if label_matches(account, &expense.category) {
            raw.push(RawRow {
                date: expense.date,
                reference: format!("EXP-{}", expense.id),
                description: format!("Expense - {}", expense.vendor),
                debit: expense.net_amount(),
                credit: Decimal::ZERO,
            });
        }
    }

    raw.sort_by(|a, b| (a.date, &a.reference).cmp(&(b.date, &b.reference)));

    let normal = account.account_type.normal_balance();
    let mut seen: HashSet<(String, NaiveDate, Decimal, Decimal)> = HashSet::new();
    let mut rows = Vec::with_capacity(raw.len());
    let mut balance = Decimal::ZERO;

    for row in raw {
        let key = (row.reference.clone(), row.date, row.debit, row.credit);
        if !seen.insert(key) {
            continue;
        }
        balance += normal.net(row.debit, row.credit);
        rows.push(LedgerRow {
            date: row.date,
            reference: row.reference,
            description: row.description,
            debit: row.debit,
            credit: row.credit,
            balance,
        });
    }

    AccountLedger {
        account: account.label(),
        rows,
        closing_balance: balance,
    }
}
