//! Shared statement building blocks.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One account line on a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Account label, `"code - name"` or a bare name.
    pub account: String,
    /// Amount in the section's own sign convention.
    pub amount: Decimal,
}

/// A statement section: its lines and their total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Per-account lines, ordered by label.
    pub lines: Vec<StatementLine>,
    /// Sum of the line amounts.
    pub total: Decimal,
}

impl Section {
    /// Builds a section from accumulated per-account amounts, dropping
    /// zero lines.
    #[must_use]
    pub(crate) fn from_amounts(amounts: BTreeMap<String, Decimal>) -> Self {
        let lines: Vec<StatementLine> = amounts
            .into_iter()
            .filter(|(_, amount)| !amount.is_zero())
            .map(|(account, amount)| StatementLine { account, amount })
            .collect();
        let total = lines.iter().map(|l| l.amount).sum();
        Self { lines, total }
    }

    /// Returns true if the section has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
