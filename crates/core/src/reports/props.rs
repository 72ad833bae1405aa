//! Property-based tests across the statement generators.

use proptest::prelude::*;
use rust_decimal::Decimal;

use chrono::Utc;
use minibooks_shared::types::{AccountId, CompanyId};

use crate::chart::{standard_chart, AccountType, ChartAccount};
use crate::ledger::JournalEntry;

use super::equity::closing_balance;
use super::income::income_statement;
use super::testing::{entry, march};
use super::trial_balance::trial_balance;

fn cents(raw: i64) -> Decimal {
    Decimal::new(raw, 2)
}

/// The standard chart plus a 9xxx account so the other-comprehensive-income
/// bucket has somewhere to land.
fn chart_with_oci(company: CompanyId) -> Vec<ChartAccount> {
    let mut chart = standard_chart(company);
    chart.push(ChartAccount {
        id: AccountId::new(),
        company_id: company,
        number: "9100".to_string(),
        name: "Revaluation Loss".to_string(),
        account_type: AccountType::Expense,
        opening_balance: Decimal::ZERO,
        is_default: false,
        created_at: Utc::now(),
    });
    chart
}

/// One balanced entry per income-statement bucket, any of which may be zero.
fn bucket_entries(
    company: CompanyId,
    revenue: Decimal,
    cost_of_sales: Decimal,
    operating: Decimal,
    other: Decimal,
) -> Vec<JournalEntry> {
    let mut entries = Vec::new();
    if !revenue.is_zero() {
        entries.push(entry(company, "INV-1", "1200 - Trade Debtors", "6000 - Sales Revenue", revenue));
    }
    if !cost_of_sales.is_zero() {
        entries.push(entry(company, "COGS-1", "7100 - Cost of Goods Sold", "3100 - Trade Creditors", cost_of_sales));
    }
    if !operating.is_zero() {
        entries.push(entry(company, "RENT-1", "8100 - Rent Expense", "3100 - Trade Creditors", operating));
    }
    if !other.is_zero() {
        entries.push(entry(company, "OCI-1", "9100 - Revaluation Loss", "3100 - Trade Creditors", other));
    }
    entries
}

proptest! {
    /// `netIncome == (R - C) - O - E` for any combination of zero and
    /// non-zero buckets.
    #[test]
    fn net_income_identity(
        r in 0i64..10_000_000,
        c in 0i64..10_000_000,
        o in 0i64..10_000_000,
        e in 0i64..10_000_000,
    ) {
        let company = CompanyId::new();
        let chart = chart_with_oci(company);
        let (r, c, o, e) = (cents(r), cents(c), cents(o), cents(e));
        let entries = bucket_entries(company, r, c, o, e);

        let statement = income_statement(&chart, march(), &entries, &[]);
        prop_assert_eq!(statement.gross_profit, r - c);
        prop_assert_eq!(statement.net_income, (r - c) - o - e);
    }

    /// `closing == opening + netIncome - drawings` including negatives.
    #[test]
    fn equity_roll_forward_identity(
        opening in -10_000_000i64..10_000_000,
        net_income in -10_000_000i64..10_000_000,
        drawings in -10_000_000i64..10_000_000,
    ) {
        let (opening, net_income, drawings) =
            (cents(opening), cents(net_income), cents(drawings));
        prop_assert_eq!(
            closing_balance(opening, net_income, drawings),
            opening + net_income - drawings
        );
    }

    /// Trial balance of balanced entries always totals zero, however the
    /// amounts land across the buckets.
    #[test]
    fn trial_balance_of_balanced_books_is_zero(
        r in 1i64..10_000_000,
        c in 1i64..10_000_000,
        o in 1i64..10_000_000,
        e in 1i64..10_000_000,
    ) {
        let company = CompanyId::new();
        let chart = chart_with_oci(company);
        let entries = bucket_entries(company, cents(r), cents(c), cents(o), cents(e));

        let tb = trial_balance(&chart, march(), &entries, &[]);
        prop_assert_eq!(tb.total, Decimal::ZERO);
    }
}
