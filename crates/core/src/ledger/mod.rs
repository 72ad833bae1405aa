//! Double-entry journal: entry construction, storage, posting, aggregation.

pub mod balance;
pub mod builder;
pub mod entry;
pub mod error;
pub mod posting;
pub mod store;

#[cfg(test)]
mod builder_props;

pub use balance::{balance_of, label_matches, line_matches, sums_for_account, AccountSums};
pub use builder::{build, NewJournalEntry, NewJournalLine};
pub use entry::{JournalEntry, JournalLine};
pub use error::LedgerError;
pub use posting::PostingService;
pub use store::{InMemoryJournalStore, JournalStore};
