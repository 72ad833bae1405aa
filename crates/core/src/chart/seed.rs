//! Standard chart-of-accounts template.
//!
//! Seeded on first use for each company; every account is marked
//! `is_default` so it can be told apart from user-created accounts.

use chrono::Utc;
use rust_decimal::Decimal;

use minibooks_shared::types::{AccountId, CompanyId};

use super::types::{AccountType, ChartAccount};

/// The standard template: `(number, name, type)` ordered by code.
const STANDARD_ACCOUNTS: &[(&str, &str, AccountType)] = &[
    ("1110", "Business Bank Account", AccountType::CurrentAsset),
    ("1120", "Cash on Hand", AccountType::CurrentAsset),
    ("1200", "Trade Debtors", AccountType::CurrentAsset),
    ("1300", "VAT Input", AccountType::CurrentAsset),
    ("1400", "Inventory", AccountType::CurrentAsset),
    ("2100", "Equipment", AccountType::NonCurrentAsset),
    ("2200", "Vehicles", AccountType::NonCurrentAsset),
    ("2300", "Accumulated Depreciation", AccountType::NonCurrentAsset),
    ("3100", "Trade Creditors", AccountType::CurrentLiability),
    ("3200", "VAT Payable", AccountType::CurrentLiability),
    ("3300", "Payroll Liabilities", AccountType::CurrentLiability),
    ("4100", "Loan Payable", AccountType::NonCurrentLiability),
    ("5000", "Owner's Capital", AccountType::Equity),
    ("5100", "Owner's Drawings", AccountType::Equity),
    ("5200", "Retained Earnings", AccountType::Equity),
    ("6000", "Sales Revenue", AccountType::Revenue),
    ("6100", "Other Income", AccountType::Revenue),
    ("7100", "Cost of Goods Sold", AccountType::Expense),
    ("8100", "Rent Expense", AccountType::Expense),
    ("8110", "Utilities Expense", AccountType::Expense),
    ("8120", "Wages Expense", AccountType::Expense),
    ("8200", "Interest Expense", AccountType::Expense),
    ("8300", "Depreciation Expense", AccountType::Expense),
    ("8400", "Bank Fees", AccountType::Expense),
];

/// Builds the standard chart of accounts for a company.
#[must_use]
pub fn standard_chart(company_id: CompanyId) -> Vec<ChartAccount> {
    let now = Utc::now();
    STANDARD_ACCOUNTS
        .iter()
        .map(|(number, name, account_type)| ChartAccount {
            id: AccountId::new(),
            company_id,
            number: (*number).to_string(),
            name: (*name).to_string(),
            account_type: *account_type,
            opening_balance: Decimal::ZERO,
            is_default: true,
            created_at: now,
        })
        .collect()
}
