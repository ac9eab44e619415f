use crate::models::Transaction;
use crate::types::TransactionId;
use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum TransactionError {
    #[error("Malformed trade date [{trade_date}] for transaction [{activity_id:?}]")]
    MalformedDate {
        activity_id: Option<TransactionId>,
        trade_date: String
    },
    #[error("Field [{field}] is missing for transaction [{activity_id:?}]")]
    MissingField {
        activity_id: Option<TransactionId>,
        field: &'static str
    }
}

impl TransactionError {
    pub fn malformed_date(tx: &Transaction) -> Self {
        Self::MalformedDate {
            activity_id: tx.activity_id,
            trade_date: tx.trade_date.clone()
        }
    }

    pub fn missing_field(tx: &Transaction, field: &'static str) -> Self {
        Self::MissingField {
            activity_id: tx.activity_id,
            field
        }
    }
}
