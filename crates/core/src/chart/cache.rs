//! Cached chart-of-accounts reads.
//!
//! The resolver and report generators read the chart synchronously while the
//! chart itself lives in an external store. Reads go through a per-company
//! cache that the owner must explicitly invalidate after chart mutations;
//! staleness between mutation and `refresh` is an accepted tradeoff.

use std::sync::Arc;

use moka::sync::Cache;
use tracing::warn;

use minibooks_shared::{types::CompanyId, AppResult};

use super::types::ChartAccount;

/// External provider of a company's chart of accounts.
pub trait ChartProvider {
    /// Lists all accounts in the company's chart.
    fn list(&self, company_id: CompanyId) -> AppResult<Vec<ChartAccount>>;
}

/// A [`ChartProvider`] wrapper that caches per-company charts.
pub struct CachedChartProvider<P> {
    provider: P,
    cache: Cache<CompanyId, Arc<Vec<ChartAccount>>>,
}

impl<P: ChartProvider> CachedChartProvider<P> {
    /// Wraps a provider with a cache holding up to `capacity` company charts.
    #[must_use]
    pub fn new(provider: P, capacity: u64) -> Self {
        Self {
            provider,
            cache: Cache::new(capacity),
        }
    }

    /// Returns the company's chart, loading it on a cache miss.
    ///
    /// A provider failure degrades to an empty chart (resolution then falls
    /// back to default labels); the failure is not cached, so the next read
    /// retries the provider.
    #[must_use]
    pub fn chart(&self, company_id: CompanyId) -> Arc<Vec<ChartAccount>> {
        if let Some(chart) = self.cache.get(&company_id) {
            return chart;
        }
        match self.provider.list(company_id) {
            Ok(accounts) => {
                let chart = Arc::new(accounts);
                self.cache.insert(company_id, Arc::clone(&chart));
                chart
            }
            Err(err) => {
                warn!(%company_id, %err, "chart load failed; degrading to empty chart");
                Arc::new(Vec::new())
            }
        }
    }

    /// Invalidates the cached chart for a company.
    ///
    /// Must be called after any chart mutation (add/update/delete).
    pub fn refresh(&self, company_id: CompanyId) {
        self.cache.invalidate(&company_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::seed::standard_chart;
    use minibooks_shared::AppError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        calls: AtomicUsize,
        fail: bool,
    }

    impl ChartProvider for CountingProvider {
        fn list(&self, company_id: CompanyId) -> AppResult<Vec<ChartAccount>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(AppError::Storage("unreachable".to_string()))
            } else {
                Ok(standard_chart(company_id))
            }
        }
    }

    #[test]
    fn test_chart_is_cached_until_refresh() {
        let provider = CountingProvider {
            calls: AtomicUsize::new(0),
            fail: false,
        };
        let cached = CachedChartProvider::new(provider, 16);
        let company = CompanyId::new();

        let first = cached.chart(company);
        let second = cached.chart(company);
        assert!(!first.is_empty());
        assert_eq!(first.len(), second.len());
        assert_eq!(cached.provider.calls.load(Ordering::SeqCst), 1);

        cached.refresh(company);
        let _ = cached.chart(company);
        assert_eq!(cached.provider.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_provider_failure_degrades_to_empty_and_retries() {
        let provider = CountingProvider {
            calls: AtomicUsize::new(0),
            fail: true,
        };
        let cached = CachedChartProvider::new(provider, 16);
        let company = CompanyId::new();

        assert!(cached.chart(company).is_empty());
        assert!(cached.chart(company).is_empty());
        // Failures are not cached.
        assert_eq!(cached.provider.calls.load(Ordering::SeqCst), 2);
    }
}
