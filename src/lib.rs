//! Trading ledger toolkit.
//!
//! Fetches a year of brokerage transactions window by window, aggregates a
//! selected amount per trade month, and computes gamma exposure analytics
//! over option chain snapshots.

pub mod aggregator;
pub mod gamma;
pub mod logging;
pub mod models;
pub mod source;
pub mod types;

pub use aggregator::{
    aggregate_by_month, aggregate_net_by_month, matches_symbol_prefix, MonthlySummary
};
pub use models::{
    AssetType, Instrument, Transaction, TransactionError, TransactionType, TransferItem
};
pub use source::{
    dedup_transactions, FetchConfig, JsonFileSource, SourceError, TransactionSource, YearFetcher
};
pub use types::{build_monthly_windows, MonthlyWindow};
