//! Chart of accounts.
//!
//! This module implements everything account-shaped:
//! - Domain types (accounts, account types, normal balance sides)
//! - Statement classification by numeric code with keyword fallback
//! - Role-based account resolution with default fallbacks
//! - Cached chart reads with explicit invalidation
//! - Account number allocation and mutation rules
//! - The standard seed template

pub mod cache;
pub mod classify;
pub mod numbering;
pub mod resolve;
pub mod seed;
pub mod types;

pub use cache::{CachedChartProvider, ChartProvider};
pub use classify::{classify, leading_code, Classification, StatementBucket, StatementCategory};
pub use numbering::{next_account_number, validate_delete, validate_number_unique, ChartError};
pub use resolve::{resolve, AccountRole, DefaultReason, Resolution};
pub use seed::standard_chart;
pub use types::{AccountType, ChartAccount, NormalBalance};
