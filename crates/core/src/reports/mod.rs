//! Financial statement generators.
//!
//! All generators take a chart of accounts plus period data pre-filtered by
//! the caller (entries and expenses already limited to the period's dates)
//! and are pure over their inputs.

pub mod account_ledger;
pub mod balance_sheet;
pub mod cash_flow;
pub mod equity;
pub mod income;
pub mod trial_balance;
pub mod types;

#[cfg(test)]
mod props;
#[cfg(test)]
pub(crate) mod testing;

pub use account_ledger::{account_ledger, AccountLedger, LedgerRow};
pub use balance_sheet::{balance_sheet, BalanceSheet};
pub use cash_flow::{cash_flow_statement, CashFlowStatement};
pub use equity::{equity_statement, EquityStatement};
pub use income::{income_statement, IncomeStatement};
pub use trial_balance::{trial_balance, TrialBalance, TrialBalanceRow};
pub use types::{Section, StatementLine};
