use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::join_all;
use moka::future::Cache;
use tokio::spawn;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::models::Transaction;
use crate::source::{FetchConfig, SourceError, TransactionSource};
use crate::types::{build_monthly_windows, AccountId, MonthlyWindow, Year};

type WindowKey = (AccountId, NaiveDate);
type WindowResult = Result<Arc<Vec<Transaction>>, SourceError>;

/// Fetches a full year of transactions as twelve concurrent month-window requests.
pub struct YearFetcher<S> {
    source: Arc<S>,
    config: Arc<FetchConfig>,
    cache: Cache<WindowKey, Arc<Vec<Transaction>>>
}

impl<S: TransactionSource> YearFetcher<S> {
    pub fn new(source: Arc<S>, config: FetchConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            source,
            config: Arc::new(config),
            cache
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Returns every transaction of `year`, concatenated in window order.
    ///
    /// Windows are fetched concurrently but merged January first regardless
    /// of completion order, so the output is deterministic for a given source.
    /// Duplicates reported by the source are kept; see [`dedup_transactions`].
    ///
    /// # Errors
    /// Returns the error of the earliest failing window.
    pub async fn fetch_year(&self, year: Year) -> Result<Vec<Transaction>, SourceError> {
        let handles: Vec<JoinHandle<WindowResult>> = build_monthly_windows(year).into_iter()
            .map(|window| self.spawn_window_fetch(window))
            .collect();

        let mut transactions = Vec::new();

        for result in join_all(handles).await {
            let window_transactions = result??;
            transactions.extend(window_transactions.iter().cloned());
        }

        info!("Fetched {} transactions for account [{}] in {year}", transactions.len(), self.config.account_id);

        Ok(transactions)
    }

    /// Drops every cached window result.
    pub fn clear_cache(&self) {
        self.cache.invalidate_all();
    }

    fn spawn_window_fetch(&self, window: MonthlyWindow) -> JoinHandle<WindowResult> {
        let source = self.source.clone();
        let config = self.config.clone();
        let cache = self.cache.clone();

        spawn(async move {
            let key = (config.account_id.clone(), window.start);

            //NOTE: Concurrent loads of the same window share one source request; failures are not cached
            let loaded = cache.try_get_with(key, async {
                let fetched = source.fetch(&config.account_id, &window, &config.transaction_types).await?;

                debug!("Window [{}]..[{}] for account [{}] returned {} transactions", window.start, window.end, config.account_id, fetched.len());

                Ok::<_, SourceError>(Arc::new(fetched))
            }).await;

            loaded.map_err(SourceError::from_shared)
        })
    }
}

/// Removes repeated activity ids, keeping the first occurrence and the input order.
///
/// Records without an activity id cannot be compared and are always kept.
pub fn dedup_transactions(transactions: Vec<Transaction>) -> Vec<Transaction> {
    let mut seen = HashSet::new();

    transactions.into_iter()
        .filter(|transaction| match transaction.activity_id {
            Some(activity_id) => seen.insert(activity_id),
            None => true
        })
        .collect()
}
