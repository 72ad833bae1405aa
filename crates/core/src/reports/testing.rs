//! Builders shared by the statement generator tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use minibooks_shared::types::{CompanyId, ReportingPeriod};

use crate::chart::classify;
use crate::ledger::{build, JournalEntry, NewJournalEntry, NewJournalLine};

pub(crate) fn march() -> ReportingPeriod {
    ReportingPeriod::new(
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
    )
}

/// A balanced two-line entry; account types come from the classifier.
pub(crate) fn period_entry(
    company_id: CompanyId,
    reference: &str,
    debit_account: &str,
    credit_account: &str,
    amount: Decimal,
    day: u32,
) -> JournalEntry {
    build(NewJournalEntry {
        company_id,
        date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
        reference: reference.to_string(),
        source_document_id: None,
        description: format!("Test {reference}"),
        lines: vec![
            NewJournalLine::debit(
                None,
                debit_account,
                classify(debit_account).bucket.account_type(),
                amount,
            ),
            NewJournalLine::credit(
                None,
                credit_account,
                classify(credit_account).bucket.account_type(),
                amount,
            ),
        ],
    })
    .unwrap()
}

pub(crate) fn entry(
    company_id: CompanyId,
    reference: &str,
    debit_account: &str,
    credit_account: &str,
    amount: Decimal,
) -> JournalEntry {
    period_entry(company_id, reference, debit_account, credit_account, amount, 10)
}
