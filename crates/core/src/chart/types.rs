//! Chart of accounts domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use minibooks_shared::types::{AccountId, CompanyId};

/// Account type determining statement placement and normal balance side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Cash, bank, debtors, inventory, VAT input.
    CurrentAsset,
    /// Equipment, vehicles, long-term investments.
    NonCurrentAsset,
    /// Creditors, VAT payable, short-term loans.
    CurrentLiability,
    /// Long-term loans and other obligations.
    NonCurrentLiability,
    /// Owner's capital, drawings, retained earnings.
    Equity,
    /// Sales and other income.
    Revenue,
    /// Cost of sales, operating expenses, other comprehensive income.
    Expense,
}

impl AccountType {
    /// The numeric code range allocated to this account type.
    ///
    /// Leading digit convention: 1 current asset, 2 non-current asset,
    /// 3 current liability, 4 non-current liability, 5 equity, 6 revenue,
    /// 7-9 expense (cost of sales / operating / other comprehensive income).
    #[must_use]
    pub const fn number_range(self) -> (u32, u32) {
        match self {
            Self::CurrentAsset => (1000, 1999),
            Self::NonCurrentAsset => (2000, 2999),
            Self::CurrentLiability => (3000, 3999),
            Self::NonCurrentLiability => (4000, 4999),
            Self::Equity => (5000, 5999),
            Self::Revenue => (6000, 6999),
            Self::Expense => (7000, 9999),
        }
    }

    /// Returns the account type owning a numeric code, if any.
    #[must_use]
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1000..=1999 => Some(Self::CurrentAsset),
            2000..=2999 => Some(Self::NonCurrentAsset),
            3000..=3999 => Some(Self::CurrentLiability),
            4000..=4999 => Some(Self::NonCurrentLiability),
            5000..=5999 => Some(Self::Equity),
            6000..=6999 => Some(Self::Revenue),
            7000..=9999 => Some(Self::Expense),
            _ => None,
        }
    }

    /// Which side increases this account's balance.
    #[must_use]
    pub const fn normal_balance(self) -> NormalBalance {
        match self {
            Self::CurrentAsset | Self::NonCurrentAsset | Self::Expense => {
                NormalBalance::DebitNormal
            }
            Self::CurrentLiability
            | Self::NonCurrentLiability
            | Self::Equity
            | Self::Revenue => NormalBalance::CreditNormal,
        }
    }
}

/// Normal balance side for balance calculation rules.
///
/// - Asset/Expense: balance = debit - credit (debit-normal)
/// - Liability/Equity/Revenue: balance = credit - debit (credit-normal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalBalance {
    /// Debit-normal accounts (assets, expenses).
    DebitNormal,
    /// Credit-normal accounts (liabilities, equity, revenue).
    CreditNormal,
}

impl NormalBalance {
    /// Nets a debit/credit pair into a signed balance change.
    #[must_use]
    pub fn net(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::DebitNormal => debit - credit,
            Self::CreditNormal => credit - debit,
        }
    }
}

/// A single account in a company's chart of accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartAccount {
    /// Unique identifier.
    pub id: AccountId,
    /// Company (tenant) this account belongs to.
    pub company_id: CompanyId,
    /// Numeric code, unique within the company's chart.
    pub number: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Opening balance carried into the books.
    pub opening_balance: Decimal,
    /// Whether this account came from the standard seed template.
    pub is_default: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl ChartAccount {
    /// Returns the stable display label, `"code - name"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.number, self.name)
    }
}
