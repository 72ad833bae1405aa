//! Income statement generation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use minibooks_shared::types::ReportingPeriod;

use crate::chart::{classify, ChartAccount, StatementBucket};
use crate::documents::Expense;
use crate::ledger::{balance_of, JournalEntry};

use super::types::Section;

/// Income statement for one reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// Period the statement covers.
    pub period: ReportingPeriod,
    /// Revenue accounts.
    pub revenue: Section,
    /// Cost-of-sales accounts.
    pub cost_of_sales: Section,
    /// Operating expense accounts.
    pub operating_expenses: Section,
    /// Other comprehensive income accounts.
    pub other_comprehensive_income: Section,
    /// Revenue minus cost of sales.
    pub gross_profit: Decimal,
    /// Gross profit minus operating expenses and other comprehensive income.
    pub net_income: Decimal,
}

/// Per-bucket accumulators for the income-statement side of the chart.
#[derive(Default)]
struct Buckets {
    revenue: BTreeMap<String, Decimal>,
    cost_of_sales: BTreeMap<String, Decimal>,
    operating_expenses: BTreeMap<String, Decimal>,
    other_comprehensive_income: BTreeMap<String, Decimal>,
}

impl Buckets {
    fn bucket_mut(&mut self, bucket: StatementBucket) -> Option<&mut BTreeMap<String, Decimal>> {
        match bucket {
            StatementBucket::Revenue => Some(&mut self.revenue),
            StatementBucket::CostOfSales => Some(&mut self.cost_of_sales),
            StatementBucket::OperatingExpense => Some(&mut self.operating_expenses),
            StatementBucket::OtherComprehensiveIncome => {
                Some(&mut self.other_comprehensive_income)
            }
            _ => None,
        }
    }

    fn add(&mut self, bucket: StatementBucket, account: &str, amount: Decimal) {
        if let Some(map) = self.bucket_mut(bucket) {
            *map.entry(account.to_string()).or_default() += amount;
        }
    }
}

/// Accumulates income-statement buckets from chart account balances.
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

/// Rebuilds the buckets directly from raw journal lines and expense records,
/// classifying each free-text label. Used when the chart matched nothing.
fn from_raw_lines(entries: &[JournalEntry], expenses: &[Expense]) -> Buckets {
    let mut buckets = Buckets::default();

    for entry in entries {
        for line in &entry.lines {
            let bucket = classify(&line.account).bucket;
            let amount = match bucket {
                // Revenue is credit-normal; the expense-side buckets are
                // debit-normal.
                StatementBucket::Revenue => line.credit - line.debit,
                StatementBucket::CostOfSales
                | StatementBucket::OperatingExpense
                | StatementBucket::OtherComprehensiveIncome => line.debit - line.credit,
                _ => continue,
            };
            buckets.add(bucket, &line.account, amount);
        }
    }

    for expense in expenses {
        let bucket = classify(&expense.category).bucket;
        // Expense records contribute a debit of the VAT-exclusive amount.
        let amount = match bucket {
            StatementBucket::Revenue => -expense.net_amount(),
            StatementBucket::CostOfSales
            | StatementBucket::OperatingExpense
            | StatementBucket::OtherComprehensiveIncome => expense.net_amount(),
            _ => continue,
        };
        buckets.add(bucket, &expense.category, amount);
    }

    buckets
}

/// Generates an income statement over a period's entries and expenses.
///
/// Balances come from the chart accounts; when all three expense-side
/// totals come out zero the chart matched nothing, and the statement is
/// recomputed from raw journal lines via the classifier so free-text data
/// still produces figures.
#[must_use]
pub fn income_statement(
    chart: &[ChartAccount],
    period: ReportingPeriod,
    entries: &[JournalEntry],
    expenses: &[Expense],
) -> IncomeStatement {
    let mut buckets = from_chart(chart, entries, expenses);

    let expense_side_empty = buckets.cost_of_sales.values().all(Decimal::is_zero)
        && buckets.operating_expenses.values().all(Decimal::is_zero)
        && buckets
            .other_comprehensive_income
            .values()
            .all(Decimal::is_zero);
    if expense_side_empty {
        buckets = from_raw_lines(entries, expenses);
    }

    let revenue = Section::from_amounts(buckets.revenue);
    let cost_of_sales = Section::from_amounts(buckets.cost_of_sales);
    let operating_expenses = Section::from_amounts(buckets.operating_expenses);
    let other_comprehensive_income = Section::from_amounts(buckets.other_comprehensive_income);

    let gross_profit = revenue.total - cost_of_sales.total;
    let net_income = gross_profit - operating_expenses.total - other_comprehensive_income.total;

    IncomeStatement {
        period,
        revenue,
        cost_of_sales,
        operating_expenses,
        other_comprehensive_income,
        gross_profit,
        net_income,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::standard_chart;
    use crate::reports::testing::{entry, march, period_entry};
    use minibooks_shared::types::CompanyId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_income_statement_from_chart() {
        let company = CompanyId::new();
        let chart = standard_chart(company);
        let entries = vec![
            entry(company, "INV-1", "1200 - Trade Debtors", "6000 - Sales Revenue", dec!(1000)),
            entry(company, "COGS-1", "7100 - Cost of Goods Sold", "3100 - Trade Creditors", dec!(400)),
            entry(company, "RENT-1", "8100 - Rent Expense", "3100 - Trade Creditors", dec!(150)),
        ];

        let statement = income_statement(&chart, march(), &entries, &[]);
        assert_eq!(statement.revenue.total, dec!(1000));
        assert_eq!(statement.cost_of_sales.total, dec!(400));
        assert_eq!(statement.operating_expenses.total, dec!(150));
        assert_eq!(statement.gross_profit, dec!(600));
        assert_eq!(statement.net_income, dec!(450));
    }

    #[test]
    fn test_net_income_identity_with_zero_buckets() {
        let company = CompanyId::new();
        let chart = standard_chart(company);
        // Revenue only; every expense-side bucket is zero.
        let entries = vec![entry(
            company,
            "INV-1",
            "1200 - Trade Debtors",
            "6000 - Sales Revenue",
            dec!(500),
        )];

        let statement = income_statement(&chart, march(), &entries, &[]);
        assert_eq!(statement.gross_profit, dec!(500));
        assert_eq!(statement.net_income, dec!(500));
    }

    #[test]
    fn test_fallback_to_raw_lines_for_free_text_accounts() {
        let company = CompanyId::new();
        // The chart doesn't know these labels; classification carries the day.
        // "Customer Receivables" hits the receivable keyword and stays off
        // the income statement.
        let chart = standard_chart(company);
        let entries = vec![
            entry(company, "S-1", "Customer Receivables", "Consulting Income", dec!(800)),
            entry(company, "E-1", "Software Subscriptions", "Accounts Payable", dec!(120)),
        ];

        let statement = income_statement(&chart, march(), &entries, &[]);
        assert_eq!(statement.revenue.total, dec!(800));
        assert_eq!(statement.operating_expenses.total, dec!(120));
        assert_eq!(statement.net_income, dec!(680));
    }

    #[test]
    fn test_fallback_books_unrecognized_debits_as_operating_expense() {
        let company = CompanyId::new();
        let chart = standard_chart(company);
        // No digits, no keyword: the debit fails open to operating expense.
        let entries = vec![entry(
            company,
            "S-1",
            "Customer Balances",
            "Consulting Income",
            dec!(800),
        )];

        let statement = income_statement(&chart, march(), &entries, &[]);
        assert_eq!(statement.revenue.total, dec!(800));
        assert_eq!(statement.operating_expenses.total, dec!(800));
        assert_eq!(statement.net_income, Decimal::ZERO);
    }

    #[test]
    fn test_empty_period_is_all_zero() {
        let company = CompanyId::new();
        let chart = standard_chart(company);
        let statement = income_statement(&chart, march(), &[], &[]);
        assert!(statement.revenue.is_empty());
        assert_eq!(statement.net_income, Decimal::ZERO);
    }

    #[test]
    fn test_statement_serializes() {
        let company = CompanyId::new();
        let chart = standard_chart(company);
        let entries = vec![entry(
            company,
            "INV-1",
            "1200 - Trade Debtors",
            "6000 - Sales Revenue",
            dec!(100),
        )];

        let statement = income_statement(&chart, march(), &entries, &[]);
        let json = serde_json::to_value(&statement).unwrap();
        assert_eq!(json["net_income"], serde_json::json!("100"));
        assert_eq!(json["revenue"]["lines"][0]["account"], "6000 - Sales Revenue");
    }

    #[test]
    fn test_period_is_echoed() {
        let company = CompanyId::new();
        let chart = standard_chart(company);
        let entries = vec![period_entry(
            company,
            "INV-1",
            "1200 - Trade Debtors",
            "6000 - Sales Revenue",
            dec!(10),
            15,
        )];
        let statement = income_statement(&chart, march(), &entries, &[]);
        assert_eq!(statement.period, march());
    }
}
