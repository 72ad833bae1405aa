//! Core business logic for Minibooks.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `chart` - Chart of accounts: classification, role resolution, numbering
//! - `ledger` - Double-entry bookkeeping: entry builder, postings, balances
//! - `documents` - Invoices, expenses, payments and their derived statuses
//! - `reports` - Financial statement generators

pub mod chart;
pub mod documents;
pub mod ledger;
pub mod reports;
