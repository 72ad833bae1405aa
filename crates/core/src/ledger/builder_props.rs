//! Property-based tests for the entry builder's balance invariant.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use minibooks_shared::types::money::{round_cents, BALANCE_TOLERANCE};
use minibooks_shared::types::CompanyId;

use crate::chart::AccountType;

use super::builder::{build, NewJournalEntry, NewJournalLine};
use super::error::LedgerError;

fn cents(raw: i64) -> Decimal {
    Decimal::new(raw, 2)
}

prop_compose! {
    fn arb_line()(debit_cents in 0i64..1_000_000, credit_cents in 0i64..1_000_000) -> NewJournalLine {
        NewJournalLine {
            account_id: None,
            account: "1120 - Cash on Hand".to_string(),
            account_type: AccountType::CurrentAsset,
            debit: cents(debit_cents),
            credit: cents(credit_cents),
            description: None,
        }
    }
}

fn entry_with(lines: Vec<NewJournalLine>) -> NewJournalEntry {
    NewJournalEntry {
        company_id: CompanyId::new(),
        date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        reference: "PROP-1".to_string(),
        source_document_id: None,
        description: "generated".to_string(),
        lines,
    }
}

proptest! {
    /// Accepted entries always balance within the cent tolerance, and
    /// rejection happens exactly when the rounded totals differ by a cent
    /// or more.
    #[test]
    fn build_accepts_iff_totals_balance(lines in prop::collection::vec(arb_line(), 1..8)) {
        let total_debit: Decimal = lines.iter().map(|l| round_cents(l.debit)).sum();
        let total_credit: Decimal = lines.iter().map(|l| round_cents(l.credit)).sum();
        let balanced = (total_debit - total_credit).abs() < BALANCE_TOLERANCE;

        match build(entry_with(lines)) {
            Ok(entry) => {
                prop_assert!(balanced);
                prop_assert!((entry.total_debit - entry.total_credit).abs() < BALANCE_TOLERANCE);
                prop_assert_eq!(entry.total_debit, total_debit);
                prop_assert_eq!(entry.total_credit, total_credit);
            }
            Err(LedgerError::Unbalanced { debits, credits }) => {
                prop_assert!(!balanced);
                prop_assert_eq!(debits, total_debit);
                prop_assert_eq!(credits, total_credit);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// Doubling each line on the opposite side always balances.
    #[test]
    fn mirrored_lines_always_build(amount_cents in 1i64..1_000_000, count in 1usize..6) {
        let amount = cents(amount_cents);
        let mut lines = Vec::with_capacity(count * 2);
        for _ in 0..count {
            lines.push(NewJournalLine::debit(
                None,
                "1200 - Trade Debtors",
                AccountType::CurrentAsset,
                amount,
            ));
            lines.push(NewJournalLine::credit(
                None,
                "6000 - Sales Revenue",
                AccountType::Revenue,
                amount,
            ));
        }
        let entry = build(entry_with(lines)).unwrap();
        prop_assert_eq!(entry.total_debit, entry.total_credit);
    }
}
