//! Money helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`, rounded to cents with
//! Banker's Rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Tolerance under which a journal entry's debit/credit difference is
/// considered balanced (one cent).
pub const BALANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Rounds a monetary amount to two decimal places using Banker's Rounding.
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Returns true if debits and credits agree within [`BALANCE_TOLERANCE`].
#[must_use]
pub fn is_balanced(total_debit: Decimal, total_credit: Decimal) -> bool {
    (total_debit - total_credit).abs() < BALANCE_TOLERANCE
}
