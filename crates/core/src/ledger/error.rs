//! Ledger error types.

use rust_decimal::Decimal;
use thiserror::Error;

use minibooks_shared::AppError;

/// Errors that can occur during ledger operations.
///
/// The entry builder is the only component permitted to fail for
/// business-invariant violations; classification and resolution are total
/// functions that degrade instead.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Journal entry debits and credits do not balance.
    #[error("Unbalanced transaction: debits ({debits}) != credits ({credits})")]
    Unbalanced {
        /// Total debit amount.
        debits: Decimal,
        /// Total credit amount.
        credits: Decimal,
    },

    /// Journal entry has no lines.
    #[error("Journal entry must have at least one line")]
    NoLines,

    /// A line carries a negative debit or credit amount.
    #[error("Line amounts cannot be negative")]
    NegativeAmount,

    /// The backing store failed.
    #[error(transparent)]
    Storage(#[from] AppError),
}

impl LedgerError {
    /// Returns the error code for UI/API surfaces.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unbalanced { .. } => "UNBALANCED_TRANSACTION",
            Self::NoLines => "NO_LINES",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }
}
