//! Account number allocation and chart mutation rules.

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::{AccountType, ChartAccount};

/// Errors raised by chart mutations.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The numeric range for an account type is fully allocated.
    #[error("No free account number left in range for {0:?}")]
    RangeExhausted(AccountType),

    /// The account number is already taken within the chart.
    #[error("Account number {0} is already in use")]
    DuplicateNumber(String),

    /// The account still carries a balance and cannot be deleted.
    #[error("Account {number} has a non-zero balance ({balance}) and cannot be deleted")]
    AccountHasBalance {
        /// The account's numeric code.
        number: String,
        /// The balance blocking deletion.
        balance: Decimal,
    },
}

/// Allocates the next account number for a type within a chart.
///
/// Numbers are handed out in increments of 10 inside the type's numeric
/// range, filling gaps left by deleted accounts first.
pub fn next_account_number(
    chart: &[ChartAccount],
    account_type: AccountType,
) -> Result<String, ChartError> {
    let (lo, hi) = account_type.number_range();
    let used: Vec<u32> = chart
        .iter()
        .filter_map(|a| a.number.parse().ok())
        .collect();

    let mut candidate = lo;
    while candidate <= hi {
        if !used.contains(&candidate) {
            return Ok(candidate.to_string());
        }
        candidate += 10;
    }
    Err(ChartError::RangeExhausted(account_type))
}

/// Validates that a number is free within the chart.
pub fn validate_number_unique(chart: &[ChartAccount], number: &str) -> Result<(), ChartError> {
    if chart.iter().any(|a| a.number == number) {
        return Err(ChartError::DuplicateNumber(number.to_string()));
    }
    Ok(())
}

/// Validates that an account may be deleted.
///
/// Deletion is blocked while the account carries a non-zero balance.
pub fn validate_delete(account: &ChartAccount, balance: Decimal) -> Result<(), ChartError> {
    if !balance.is_zero() {
        return Err(ChartError::AccountHasBalance {
            number: account.number.clone(),
            balance,
        });
    }
    Ok(())
}
