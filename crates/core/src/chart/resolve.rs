//! Role-based account resolution.
//!
//! Posting functions do not know which concrete account a company uses for
//! a semantic role ("trade debtors", "VAT payable", ...). The resolver finds
//! the best match in the chart: first by name keyword, then by known default
//! code, then by numeric type range. Resolution is total: when the chart is
//! empty or nothing matches, a hardcoded default label is returned (tagged,
//! and logged) so callers never need to handle "no account" as a case.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::classify::leading_code;
use super::types::ChartAccount;

/// Semantic roles an account can play in posting and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    /// Petty cash / cash on hand.
    Cash,
    /// The company's main bank account.
    DefaultBank,
    /// Accounts receivable control account.
    TradeDebtors,
    /// Accounts payable control account.
    TradeCreditors,
    /// VAT collected on sales.
    VatPayable,
    /// VAT paid on purchases.
    VatInput,
    /// Primary sales revenue account.
    SalesRevenue,
    /// Any bank/cash account found by ledger code range.
    BankByLedgerCode,
    /// Loans owed to lenders.
    LoanPayable,
    /// Interest charged on loans.
    InterestExpense,
    /// Owner's capital contributions.
    OwnerCapital,
    /// Owner's drawings.
    OwnerDrawings,
    /// Inventory / stock on hand.
    Inventory,
}

impl AccountRole {
    /// Case-insensitive name keywords tried first, in order.
    const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Cash => &["cash"],
            Self::DefaultBank => &["bank"],
            Self::TradeDebtors => &["debtors", "receivable"],
            Self::TradeCreditors => &["creditors", "payable"],
            Self::VatPayable => &["vat payable", "vat output", "tax payable"],
            Self::VatInput => &["vat input", "vat receivable"],
            Self::SalesRevenue => &["sales", "revenue"],
            Self::BankByLedgerCode => &[],
            Self::LoanPayable => &["loan"],
            Self::InterestExpense => &["interest"],
            Self::OwnerCapital => &["capital"],
            Self::OwnerDrawings => &["drawings"],
            Self::Inventory => &["inventory", "stock"],
        }
    }

    /// Known default codes tried after keywords.
    const fn default_codes(self) -> &'static [u32] {
        match self {
            Self::Cash => &[1120],
            Self::DefaultBank => &[1110],
            Self::TradeDebtors => &[1200],
            Self::TradeCreditors => &[3100],
            Self::VatPayable => &[3200],
            Self::VatInput => &[1300],
            Self::SalesRevenue => &[6000],
            Self::BankByLedgerCode => &[1110, 1120],
            Self::LoanPayable => &[4100],
            Self::InterestExpense => &[8200],
            Self::OwnerCapital => &[5000],
            Self::OwnerDrawings => &[5100],
            Self::Inventory => &[1400],
        }
    }

    /// Numeric code range tried last.
    const fn code_range(self) -> (u32, u32) {
        match self {
            Self::Cash | Self::DefaultBank | Self::BankByLedgerCode => (1100, 1199),
            Self::TradeDebtors => (1200, 1299),
            Self::VatInput => (1300, 1399),
            Self::Inventory => (1400, 1499),
            Self::TradeCreditors => (3100, 3199),
            Self::VatPayable => (3200, 3299),
            Self::LoanPayable => (4100, 4199),
            Self::OwnerCapital => (5000, 5099),
            Self::OwnerDrawings => (5100, 5199),
            Self::SalesRevenue => (6000, 6099),
            Self::InterestExpense => (8200, 8299),
        }
    }

    /// Hardcoded fallback label when the chart yields nothing.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::Cash => "1120 - Cash on Hand",
            Self::DefaultBank | Self::BankByLedgerCode => "1110 - Business Bank Account",
            Self::TradeDebtors => "1200 - Trade Debtors",
            Self::TradeCreditors => "3100 - Trade Creditors",
            Self::VatPayable => "3200 - VAT Payable",
            Self::VatInput => "1300 - VAT Input",
            Self::SalesRevenue => "6000 - Sales Revenue",
            Self::LoanPayable => "4100 - Loan Payable",
            Self::InterestExpense => "8200 - Interest Expense",
            Self::OwnerCapital => "5000 - Owner's Capital",
            Self::OwnerDrawings => "5100 - Owner's Drawings",
            Self::Inventory => "1400 - Inventory",
        }
    }
}

/// Why a resolution fell back to the default label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultReason {
    /// The company has no chart of accounts yet.
    EmptyChart,
    /// The chart exists but no account matched the role.
    NoMatch,
}

/// Outcome of resolving a role against a chart.
///
/// Tagged so callers can log or block on defaulted resolutions instead of
/// silently accepting a possibly wrong account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// A chart account matched the role.
    Found {
        /// The matched account's `"code - name"` label.
        label: String,
    },
    /// Nothing matched; the hardcoded default label is used.
    Defaulted {
        /// The fallback `"code - name"` label.
        label: String,
        /// Why the fallback was taken.
        reason: DefaultReason,
    },
}

impl Resolution {
    /// The resolved `"code - name"` label, whichever way it was obtained.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Found { label } | Self::Defaulted { label, .. } => label,
        }
    }

    /// Returns true if the resolution fell back to a default.
    #[must_use]
    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted { .. })
    }
}

/// Resolves a semantic role to an account label against a chart.
///
/// Matching order: (a) case-insensitive substring match on account name
/// against the role's keyword list, (b) exact match on known default codes,
/// (c) numeric range match. The first hit wins. Falls back to the role's
/// hardcoded default label, emitting a warning, so posting is never blocked.
#[must_use]
pub fn resolve(role: AccountRole, chart: &[ChartAccount]) -> Resolution {
    if chart.is_empty() {
        warn!(?role, "no chart of accounts; using default label");
        return Resolution::Defaulted {
            label: role.default_label().to_string(),
            reason: DefaultReason::EmptyChart,
        };
    }

    for keyword in role.keywords() {
        if let Some(account) = chart
            .iter()
            .find(|a| a.name.to_lowercase().contains(keyword))
        {
            return Resolution::Found {
                label: account.label(),
            };
        }
    }

    for code in role.default_codes() {
        if let Some(account) = chart.iter().find(|a| leading_code(&a.number) == Some(*code)) {
            return Resolution::Found {
                label: account.label(),
            };
        }
    }

    let (lo, hi) = role.code_range();
    if let Some(account) = chart
        .iter()
        .find(|a| leading_code(&a.number).is_some_and(|c| c >= lo && c <= hi))
    {
        return Resolution::Found {
            label: account.label(),
        };
    }

    warn!(?role, "no account matched role; using default label");
    Resolution::Defaulted {
        label: role.default_label().to_string(),
        reason: DefaultReason::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::seed::standard_chart;
    use crate::chart::types::AccountType;
    use chrono::Utc;
    use minibooks_shared::types::{AccountId, CompanyId};
    use rust_decimal::Decimal;

    fn account(number: &str, name: &str, account_type: AccountType) -> ChartAccount {
        ChartAccount {
            id: AccountId::new(),
            company_id: CompanyId::new(),
            number: number.to_string(),
            name: name.to_string(),
            account_type,
            opening_balance: Decimal::ZERO,
            is_default: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_chart_defaults() {
        let r = resolve(AccountRole::Cash, &[]);
        assert_eq!(
            r,
            Resolution::Defaulted {
                label: "1120 - Cash on Hand".to_string(),
                reason: DefaultReason::EmptyChart,
            }
        );
        assert_eq!(r.label(), "1120 - Cash on Hand");
    }

    #[test]
    fn test_keyword_match_wins_over_code() {
        // A renamed debtors account with a non-standard code still matches
        // by keyword before anything else.
        let chart = vec![
            account("1950", "Customer Receivables", AccountType::CurrentAsset),
            account("1200", "Sundry Items", AccountType::CurrentAsset),
        ];
        let r = resolve(AccountRole::TradeDebtors, &chart);
        assert_eq!(
            r,
            Resolution::Found {
                label: "1950 - Customer Receivables".to_string()
            }
        );
    }

    #[test]
    fn test_code_match_when_no_keyword() {
        let chart = vec![account("3100", "Sundry Obligations", AccountType::CurrentLiability)];
        let r = resolve(AccountRole::TradeCreditors, &chart);
        assert_eq!(
            r,
            Resolution::Found {
                label: "3100 - Sundry Obligations".to_string()
            }
        );
    }

    #[test]
    fn test_range_match_as_last_resort() {
        let chart = vec![account("1150", "Till Float", AccountType::CurrentAsset)];
        let r = resolve(AccountRole::BankByLedgerCode, &chart);
        assert_eq!(
            r,
            Resolution::Found {
                label: "1150 - Till Float".to_string()
            }
        );
    }

    #[test]
    fn test_no_match_defaults_with_reason() {
        let chart = vec![account("6000", "Consulting Fees", AccountType::Revenue)];
        let r = resolve(AccountRole::LoanPayable, &chart);
        assert!(r.is_defaulted());
        assert_eq!(r.label(), "4100 - Loan Payable");
        assert!(matches!(
            r,
            Resolution::Defaulted {
                reason: DefaultReason::NoMatch,
                ..
            }
        ));
    }

    #[test]
    fn test_all_roles_resolve_against_standard_chart() {
        let chart = standard_chart(CompanyId::new());
        for role in [
            AccountRole::Cash,
            AccountRole::DefaultBank,
            AccountRole::TradeDebtors,
            AccountRole::TradeCreditors,
            AccountRole::VatPayable,
            AccountRole::VatInput,
            AccountRole::SalesRevenue,
            AccountRole::BankByLedgerCode,
            AccountRole::LoanPayable,
            AccountRole::InterestExpense,
            AccountRole::OwnerCapital,
            AccountRole::OwnerDrawings,
            AccountRole::Inventory,
        ] {
            let r = resolve(role, &chart);
            assert!(!r.is_defaulted(), "role {role:?} defaulted: {r:?}");
        }
    }
}
