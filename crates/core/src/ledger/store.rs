//! Journal entry storage.
//!
//! The core only needs a narrow interface to the entry store; persistence
//! lives outside this crate. An in-memory implementation backs tests and
//! small deployments.

use dashmap::DashMap;
use tracing::debug;

use minibooks_shared::types::{CompanyId, DocumentId, ReportingPeriod};
use minibooks_shared::AppResult;

use super::entry::JournalEntry;

/// Storage interface for journal entries.
///
/// Entries are keyed by `(company, reference)`: upserting an entry with an
/// existing reference supersedes the prior lines, which is what keeps
/// re-saving a source document from posting twice. Concurrent upserts to the
/// same reference resolve last-write-wins; no locking.
pub trait JournalStore {
    /// Inserts or supersedes the entry stored under its reference.
    fn upsert(&self, entry: JournalEntry) -> AppResult<JournalEntry>;

    /// Deletes all entries produced by a source document.
    ///
    /// Returns how many entries were removed.
    fn delete_by_document(&self, company_id: CompanyId, document_id: DocumentId)
        -> AppResult<usize>;

    /// Deletes the entry stored under a reference, if any.
    ///
    /// Retained as a migration aid for entries posted before source-document
    /// ids were recorded.
    fn delete_by_reference(&self, company_id: CompanyId, reference: &str) -> AppResult<usize>;

    /// Lists a company's entries within a period, ordered by date.
    fn list_by_date_range(
        &self,
        company_id: CompanyId,
        period: ReportingPeriod,
    ) -> AppResult<Vec<JournalEntry>>;
}

/// In-memory journal store keyed by `(company, reference)`.
#[derive(Debug, Default)]
pub struct InMemoryJournalStore {
    entries: DashMap<(CompanyId, String), JournalEntry>,
}

impl InMemoryJournalStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, across all companies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl JournalStore for InMemoryJournalStore {
    fn upsert(&self, mut entry: JournalEntry) -> AppResult<JournalEntry> {
        let key = (entry.company_id, entry.reference.clone());
        if let Some(prev) = self.entries.get(&key) {
            // Superseding upsert: identity and creation time survive.
            entry.id = prev.id;
            entry.created_at = prev.created_at;
            debug!(reference = %entry.reference, "superseding journal entry");
        } else {
            debug!(reference = %entry.reference, "storing journal entry");
        }
        self.entries.insert(key, entry.clone());
        Ok(entry)
    }

    fn delete_by_document(
        &self,
        company_id: CompanyId,
        document_id: DocumentId,
    ) -> AppResult<usize> {
        let before = self.entries.len();
        self.entries.retain(|(company, _), entry| {
            *company != company_id || entry.source_document_id != Some(document_id)
        });
        Ok(before - self.entries.len())
    }

    fn delete_by_reference(&self, company_id: CompanyId, reference: &str) -> AppResult<usize> {
        let removed = self
            .entries
            .remove(&(company_id, reference.to_string()))
            .is_some();
        Ok(usize::from(removed))
    }

    fn list_by_date_range(
        &self,
        company_id: CompanyId,
        period: ReportingPeriod,
    ) -> AppResult<Vec<JournalEntry>> {
        let mut entries: Vec<JournalEntry> = self
            .entries
            .iter()
            .filter(|kv| kv.key().0 == company_id && period.contains(kv.value().date))
            .map(|kv| kv.value().clone())
            .collect();
        entries.sort_by(|a, b| (a.date, &a.reference).cmp(&(b.date, &b.reference)));
        Ok(entries)
    }
}
