//! Balance sheet generation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use minibooks_shared::types::ReportingPeriod;

use crate::chart::{classify, ChartAccount, StatementBucket, StatementCategory};
use crate::documents::Expense;
use crate::ledger::{balance_of, JournalEntry};

use super::types::Section;

/// Balance sheet as of the end of a reporting period.
///
/// The accounting identity (assets = liabilities + equity) is reported,
/// not enforced; the sheet is only as balanced as the underlying postings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Period the sheet covers.
    pub period: ReportingPeriod,
    /// Current assets.
    pub current_assets: Section,
    /// Non-current assets.
    pub non_current_assets: Section,
    /// Sum of all asset sections.
    pub total_assets: Decimal,
    /// Current liabilities.
    pub current_liabilities: Section,
    /// Non-current liabilities.
    pub non_current_liabilities: Section,
    /// Sum of all liability sections.
    pub total_liabilities: Decimal,
    /// Equity accounts.
    pub equity: Section,
    /// Total equity.
    pub total_equity: Decimal,
}

#[derive(Default)]
struct Buckets {
    current_assets: BTreeMap<String, Decimal>,
    non_current_assets: BTreeMap<String, Decimal>,
    current_liabilities: BTreeMap<String, Decimal>,
    non_current_liabilities: BTreeMap<String, Decimal>,
    equity: BTreeMap<String, Decimal>,
}

impl Buckets {
    fn bucket_mut(&mut self, bucket: StatementBucket) -> Option<&mut BTreeMap<String, Decimal>> {
        match bucket {
            StatementBucket::CurrentAsset => Some(&mut self.current_assets),
            StatementBucket::NonCurrentAsset => Some(&mut self.non_current_assets),
            StatementBucket::CurrentLiability => Some(&mut self.current_liabilities),
            StatementBucket::NonCurrentLiability => Some(&mut self.non_current_liabilities),
            StatementBucket::Equity => Some(&mut self.equity),
            _ => None,
        }
    }

    fn add(&mut self, bucket: StatementBucket, account: &str, amount: Decimal) {
        if let Some(map) = self.bucket_mut(bucket) {
            *map.entry(account.to_string()).or_default() += amount;
        }
    }

    fn is_all_zero(&self) -> bool {
        self.current_assets.values().all(Decimal::is_zero)
            && self.non_current_assets.values().all(Decimal::is_zero)
            && self.current_liabilities.values().all(Decimal::is_zero)
            && self.non_current_liabilities.values().all(Decimal::is_zero)
            && self.equity.values().all(Decimal::is_zero)
    }
}

fn from_chart(chart: &[ChartAccount], entries: &[JournalEntry], expenses: &[Expense]) -> Buckets {
    let mut buckets = Buckets::default();
    for account in chart {
        let label = account.label();
        let bucket = classify(&label).bucket;
        if buckets.bucket_mut(bucket).is_none() {
            continue;
        }
        let balance = balance_of(account, entries, expenses);
        if !balance.is_zero() {
            buckets.add(bucket, &label, balance);
        }
    }
    buckets
}

/// Reclassifies raw journal lines when no chart account matched anything.
fn from_raw_lines(entries: &[JournalEntry]) -> Buckets {
    let mut buckets = Buckets::default();
    for entry in entries {
        for line in &entry.lines {
            let classification = classify(&line.account);
            let amount = match classification.category {
                StatementCategory::Asset => line.debit - line.credit,
                StatementCategory::Liability | StatementCategory::Equity => {
                    line.credit - line.debit
                }
                StatementCategory::Revenue | StatementCategory::Expense => continue,
            };
            buckets.add(classification.bucket, &line.account, amount);
        }
    }
    buckets
}

/// Generates a balance sheet over a period's entries and expenses.
#[must_use]
pub fn balance_sheet(
    chart: &[ChartAccount],
    period: ReportingPeriod,
    entries: &[JournalEntry],
    expenses: &[Expense],
) -> BalanceSheet {
    let mut buckets = from_chart(chart, entries, expenses);
    if buckets.is_all_zero() {
        buckets = from_raw_lines(entries);
    }

    let current_assets = Section::from_amounts(buckets.current_assets);
    let non_current_assets = Section::from_amounts(buckets.non_current_assets);
    let current_liabilities = Section::from_amounts(buckets.current_liabilities);
    let non_current_liabilities = Section::from_amounts(buckets.non_current_liabilities);
    let equity = Section::from_amounts(buckets.equity);

    let total_assets = current_assets.total + non_current_assets.total;
    let total_liabilities = current_liabilities.total + non_current_liabilities.total;
    let total_equity = equity.total;

    BalanceSheet {
        period,
        current_assets,
        non_current_assets,
        total_assets,
        current_liabilities,
        non_current_liabilities,
        total_liabilities,
        equity,
        total_equity,
    }
}
