//! Account classification for statement placement.
//!
//! Maps an account identifier (a leading numeric code, a full
//! `"code - name"` string, or a bare name) to a statement category and
//! sub-bucket. Classification is a total function: unclassifiable input
//! defaults to an operating expense so statements stay generable even with
//! free-text accounts entered upstream.

use serde::{Deserialize, Serialize};

/// Top-level statement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementCategory {
    /// Balance sheet: assets.
    Asset,
    /// Balance sheet: liabilities.
    Liability,
    /// Balance sheet: equity.
    Equity,
    /// Income statement: revenue.
    Revenue,
    /// Income statement: expenses.
    Expense,
}

/// Statement sub-bucket within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementBucket {
    /// Current assets (leading digit 1).
    CurrentAsset,
    /// Non-current assets (leading digit 2).
    NonCurrentAsset,
    /// Current liabilities (leading digit 3).
    CurrentLiability,
    /// Non-current liabilities (leading digit 4).
    NonCurrentLiability,
    /// Equity (leading digit 5).
    Equity,
    /// Revenue (leading digit 6).
    Revenue,
    /// Cost of sales (leading digit 7).
    CostOfSales,
    /// Operating expenses (leading digit 8).
    OperatingExpense,
    /// Other comprehensive income (leading digit 9).
    OtherComprehensiveIncome,
}

/// Result of classifying an account label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Top-level statement category.
    pub category: StatementCategory,
    /// Sub-bucket within the category.
    pub bucket: StatementBucket,
}

impl Classification {
    const fn new(category: StatementCategory, bucket: StatementBucket) -> Self {
        Self { category, bucket }
    }
}

impl StatementBucket {
    /// The chart account type this bucket belongs to.
    #[must_use]
    pub const fn account_type(self) -> super::types::AccountType {
        use super::types::AccountType as T;
        match self {
            Self::CurrentAsset => T::CurrentAsset,
            Self::NonCurrentAsset => T::NonCurrentAsset,
            Self::CurrentLiability => T::CurrentLiability,
            Self::NonCurrentLiability => T::NonCurrentLiability,
            Self::Equity => T::Equity,
            Self::Revenue => T::Revenue,
            Self::CostOfSales | Self::OperatingExpense | Self::OtherComprehensiveIncome => {
                T::Expense
            }
        }
    }
}

/// Extracts the leading run of ASCII digits from an account label.
///
/// Handles both `"7105 - Office Supplies"` and bare `"7105"`.
#[must_use]
pub fn leading_code(label: &str) -> Option<u32> {
    let digits: String = label
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Classifies an account label into a statement category and sub-bucket.
///
/// Tries the leading-digit convention first, then keyword matching on the
/// label text. Never fails: anything unrecognized is treated as an
/// operating expense ("fail open").
#[must_use]
pub fn classify(label: &str) -> Classification {
    if let Some(c) = label.trim_start().chars().next().and_then(classify_digit) {
        return c;
    }
    classify_keywords(label)
}

/// Classification from a code's first digit character.
///
/// The digit is taken as written, not from the parsed number: `"0001"`
/// must not collapse to `1`. A leading `0` is outside the 1-9 convention
/// and falls through to the keyword rules.
fn classify_digit(leading: char) -> Option<Classification> {
    use StatementBucket as B;
    use StatementCategory as C;

    match leading {
        '1' => Some(Classification::new(C::Asset, B::CurrentAsset)),
        '2' => Some(Classification::new(C::Asset, B::NonCurrentAsset)),
        '3' => Some(Classification::new(C::Liability, B::CurrentLiability)),
        '4' => Some(Classification::new(C::Liability, B::NonCurrentLiability)),
        '5' => Some(Classification::new(C::Equity, B::Equity)),
        '6' => Some(Classification::new(C::Revenue, B::Revenue)),
        '7' => Some(Classification::new(C::Expense, B::CostOfSales)),
        '8' => Some(Classification::new(C::Expense, B::OperatingExpense)),
        '9' => Some(Classification::new(C::Expense, B::OtherComprehensiveIncome)),
        _ => None,
    }
}

/// Free-text fallback for labels with no usable numeric code.
fn classify_keywords(label: &str) -> Classification {
    use StatementBucket as B;
    use StatementCategory as C;

    let lower = label.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if contains_any(&["revenue", "sales", "income"]) {
        Classification::new(C::Revenue, B::Revenue)
    } else if contains_any(&["cogs", "cost of goods", "cost of sales"]) {
        Classification::new(C::Expense, B::CostOfSales)
    } else if contains_any(&["payable", "creditors"]) {
        Classification::new(C::Liability, B::CurrentLiability)
    } else if contains_any(&["receivable", "debtors"]) {
        Classification::new(C::Asset, B::CurrentAsset)
    } else if contains_any(&["inventory", "stock"]) {
        Classification::new(C::Asset, B::CurrentAsset)
    } else {
        // "expense" keyword and everything else lands here.
        Classification::new(C::Expense, B::OperatingExpense)
    }
}
