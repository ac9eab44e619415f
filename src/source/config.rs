use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::models::TransactionType;
use crate::source::errors::ConfigError;
use crate::types::AccountId;

const DEFAULT_CACHE_CAPACITY: u64 = 64;
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

/// Explicit settings handed to a [`YearFetcher`](crate::source::YearFetcher).
///
/// Nothing here is read from the process environment; callers build it in
/// code or load it from a JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Brokerage account identifier passed to the source.
    pub account_id: AccountId,
    /// Transaction types to request. Empty means every type.
    #[serde(default)]
    pub transaction_types: Vec<TransactionType>,
    /// Maximum number of cached window results.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    /// How long a cached window result stays valid.
    #[serde(rename = "cache_ttl_secs", default = "default_cache_ttl", deserialize_with = "deserialize_seconds")]
    pub cache_ttl: Duration
}

impl FetchConfig {
    pub fn new(account_id: impl Into<AccountId>) -> Self {
        Self {
            account_id: account_id.into(),
            transaction_types: Vec::new(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_ttl: DEFAULT_CACHE_TTL
        }
    }

    pub fn with_transaction_types(mut self, transaction_types: impl IntoIterator<Item = TransactionType>) -> Self {
        self.transaction_types = transaction_types.into_iter().collect();
        self
    }

    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Loads the config from a JSON file; omitted optional fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;

        Ok(serde_json::from_str(&contents)?)
    }
}

fn default_cache_capacity() -> u64 {
    DEFAULT_CACHE_CAPACITY
}

fn default_cache_ttl() -> Duration {
    DEFAULT_CACHE_TTL
}

fn deserialize_seconds<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}
