//! Common types used across the application.

pub mod id;
pub mod money;
pub mod period;

pub use id::*;
pub use money::{round_cents, BALANCE_TOLERANCE};
pub use period::ReportingPeriod;
