mod config;
mod errors;
mod fetcher;
mod json_source;

use async_trait::async_trait;

use crate::models::{Transaction, TransactionType};
use crate::types::MonthlyWindow;

pub use config::FetchConfig;
pub use errors::{ConfigError, SourceError};
pub use fetcher::{dedup_transactions, YearFetcher};
pub use json_source::JsonFileSource;

/// Supplies transactions for one account and one month window.
///
/// Implementations own authentication, pagination and rate limiting; callers
/// receive a complete list for the window or an error.
#[async_trait]
pub trait TransactionSource: Send + Sync + 'static {
    async fn fetch(&self, account_id: &str, window: &MonthlyWindow, transaction_types: &[TransactionType]) -> Result<Vec<Transaction>, SourceError>;
}
