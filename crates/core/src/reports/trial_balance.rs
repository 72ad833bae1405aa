//! Trial balance generation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use minibooks_shared::types::ReportingPeriod;

use crate::chart::ChartAccount;
use crate::documents::Expense;
use crate::ledger::{line_matches, sums_for_account, JournalEntry};

/// One account row on the trial balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// Account label.
    pub account: String,
    /// Net balance in the debit-minus-credit convention: debit-normal
    /// accounts positive, credit-normal accounts negative.
    pub balance: Decimal,
    /// Whether the row came from journal lines with no chart account.
    pub synthetic: bool,
}

/// Trial balance over one reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalance {
    /// Period the rows cover.
    pub period: ReportingPeriod,
    /// Non-zero account rows, chart accounts first.
    pub rows: Vec<TrialBalanceRow>,
    /// Grand total of the row balances; zero when the books balance.
    pub total: Decimal,
}

/// Generates the trial balance over a period's entries and expenses.
///
/// One row per account with a non-zero net balance. Journal lines posting
/// to labels the chart doesn't know are gathered into synthetic rows so
/// the total still reflects every line.
#[must_use]
pub fn trial_balance(
    chart: &[ChartAccount],
    period: ReportingPeriod,
    entries: &[JournalEntry],
    expenses: &[Expense],
) -> TrialBalance {
    let mut rows: Vec<TrialBalanceRow> = chart
        .iter()
        .filter_map(|account| {
            let net = sums_for_account(account, entries, expenses).net();
            if net.is_zero() {
                None
            } else {
                Some(TrialBalanceRow {
                    account: account.label(),
                    balance: net,
                    synthetic: false,
                })
            }
        })
        .collect();

    let mut orphans: BTreeMap<String, Decimal> = BTreeMap::new();
    for entry in entries {
        for line in &entry.lines {
            if chart.iter().any(|account| line_matches(account, line)) {
                continue;
            }
            *orphans.entry(line.account.clone()).or_default() += line.debit - line.credit;
        }
    }
    rows.extend(
        orphans
            .into_iter()
            .filter(|(_, balance)| !balance.is_zero())
            .map(|(account, balance)| TrialBalanceRow {
                account,
                balance,
                synthetic: true,
            }),
    );

    let total = rows.iter().map(|r| r.balance).sum();
    TrialBalance {
        period,
        rows,
        total,
    }
}
