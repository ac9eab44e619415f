use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::task::spawn_blocking;
use tracing::debug;

use crate::models::{Transaction, TransactionType};
use crate::source::{SourceError, TransactionSource};
use crate::types::MonthlyWindow;

/// Offline source backed by a JSON array of brokerage transactions.
///
/// The file is read once; window requests filter the loaded records by their
/// own trade date and by transaction type. The account id is not checked,
/// the file is assumed to hold a single account.
pub struct JsonFileSource {
    transactions: Vec<Transaction>
}

impl JsonFileSource {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let path = path.into();

        let transactions = spawn_blocking(move || -> Result<Vec<Transaction>, SourceError> {
            let file = File::open(&path)?;
            let transactions: Vec<Transaction> = serde_json::from_reader(BufReader::new(file))?;

            debug!("Loaded {} transactions from {}", transactions.len(), path.display());

            Ok(transactions)
        }).await??;

        Ok(Self::from_transactions(transactions))
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

#[async_trait]
impl TransactionSource for JsonFileSource {
    /// # Errors
    /// Fails with `SourceError::UndatedRecord` if any loaded record has an
    /// unparseable trade date, so it cannot drop out of every window unnoticed.
    async fn fetch(&self, _account_id: &str, window: &MonthlyWindow, transaction_types: &[TransactionType]) -> Result<Vec<Transaction>, SourceError> {
        let mut matched = Vec::new();

        for transaction in &self.transactions {
            let trade_date = transaction.parsed_trade_date()
                .map_err(|_| SourceError::undated_record(transaction))?;

            let type_requested = transaction_types.is_empty() || transaction_types.contains(&transaction.transaction_type);

            if type_requested && window.contains(trade_date) {
                matched.push(transaction.clone());
            }
        }

        Ok(matched)
    }
}
