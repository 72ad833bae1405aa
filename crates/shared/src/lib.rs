//! Shared types and errors for Minibooks.
//!
//! This crate provides common types used across all other crates:
//! - Money rounding helpers with decimal precision
//! - Typed IDs for type-safe entity references
//! - Reporting period type for date-range filtering
//! - Application-wide error types

pub mod error;
pub mod types;

pub use error::{AppError, AppResult};
