//! Statement of changes in equity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use minibooks_shared::types::ReportingPeriod;

use crate::chart::{AccountType, ChartAccount};
use crate::documents::Expense;
use crate::ledger::{balance_of, sums_for_account, JournalEntry};

use super::income::income_statement;

/// Equity roll-forward for one reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityStatement {
    /// Period the statement covers.
    pub period: ReportingPeriod,
    /// Equity balance at the start of the period, from the prior period's
    /// movements.
    pub opening_balance: Decimal,
    /// Net income for the period.
    pub net_income: Decimal,
    /// Owner drawings for the period, as a positive withdrawal amount.
    pub drawings: Decimal,
    /// `opening + net income - drawings`.
    pub closing_balance: Decimal,
}

/// The equity roll-forward identity.
#[must_use]
pub fn closing_balance(opening: Decimal, net_income: Decimal, drawings: Decimal) -> Decimal {
    opening + net_income - drawings
}

fn is_drawings(account: &ChartAccount) -> bool {
    account.account_type == AccountType::Equity && account.name.to_lowercase().contains("drawing")
}

/// Generates the equity statement for a period, with the prior period's
/// entries supplying the opening balance.
#[must_use]
pub fn equity_statement(
    chart: &[ChartAccount],
    period: ReportingPeriod,
    entries: &[JournalEntry],
    expenses: &[Expense],
    prior_entries: &[JournalEntry],
    prior_expenses: &[Expense],
) -> EquityStatement {
    let opening_balance: Decimal = chart
        .iter()
        .filter(|a| a.account_type == AccountType::Equity)
        .map(|a| balance_of(a, prior_entries, prior_expenses))
        .sum();

    let net_income = income_statement(chart, period, entries, expenses).net_income;

    // Drawings reduce equity; report the withdrawal as a positive figure,
    // which is the account's debit-minus-credit net.
    let drawings: Decimal = chart
        .iter()
        .filter(|a| is_drawings(a))
        .map(|a| sums_for_account(a, entries, expenses).net())
        .sum();

    EquityStatement {
        period,
        opening_balance,
        net_income,
        drawings,
        closing_balance: closing_balance(opening_balance, net_income, drawings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::standard_chart;
    use crate::reports::testing::{entry, march};
    use minibooks_shared::types::CompanyId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_roll_forward() {
        let company = CompanyId::new();
        let chart = standard_chart(company);

        // Prior period: owner put in capital.
        let prior = vec![entry(
            company,
            "CAP-1",
            "1110 - Business Bank Account",
            "5000 - Owner's Capital",
            dec!(10000),
        )];
        // Current period: a sale and a drawing.
        let current = vec![
            entry(company, "INV-1", "1200 - Trade Debtors", "6000 - Sales Revenue", dec!(2000)),
            entry(company, "DRW-1", "5100 - Owner's Drawings", "1110 - Business Bank Account", dec!(750)),
        ];

        let statement = equity_statement(&chart, march(), &current, &[], &prior, &[]);
        assert_eq!(statement.opening_balance, dec!(10000));
        assert_eq!(statement.net_income, dec!(2000));
        assert_eq!(statement.drawings, dec!(750));
        assert_eq!(statement.closing_balance, dec!(11250));
    }

    #[test]
    fn test_prior_drawings_reduce_opening() {
        let company = CompanyId::new();
        let chart = standard_chart(company);
        let prior = vec![
            entry(company, "CAP-1", "1110 - Business Bank Account", "5000 - Owner's Capital", dec!(5000)),
            entry(company, "DRW-0", "5100 - Owner's Drawings", "1110 - Business Bank Account", dec!(1000)),
        ];

        let statement = equity_statement(&chart, march(), &[], &[], &prior, &[]);
        assert_eq!(statement.opening_balance, dec!(4000));
        assert_eq!(statement.closing_balance, dec!(4000));
    }

    #[test]
    fn test_negative_net_income() {
        let company = CompanyId::new();
        let chart = standard_chart(company);
        let current = vec![entry(
            company,
            "EXP-1",
            "8100 - Rent Expense",
            "1110 - Business Bank Account",
            dec!(300),
        )];

        let statement = equity_statement(&chart, march(), &current, &[], &[], &[]);
        assert_eq!(statement.net_income, dec!(-300));
        assert_eq!(statement.closing_balance, dec!(-300));
    }

    #[test]
    fn test_closing_identity_with_negatives() {
        assert_eq!(closing_balance(dec!(-100), dec!(-50), dec!(-25)), dec!(-125));
        assert_eq!(closing_balance(dec!(0), dec!(0), dec!(0)), dec!(0));
    }
}
