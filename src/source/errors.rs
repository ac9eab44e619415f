use std::io;
use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tokio::task::JoinError;

use crate::models::Transaction;
use crate::types::{MonthlyWindow, TransactionId};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source error: {0}")]
    Io(#[from] io::Error),
    #[error("Source error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Record [{activity_id:?}] has an unparseable trade date [{trade_date}]")]
    UndatedRecord {
        activity_id: Option<TransactionId>,
        trade_date: String
    },
    #[error("Request for window [{start}]..[{end}] failed: {message}")]
    Request {
        start: NaiveDate,
        end: NaiveDate,
        message: String
    },
    #[error("Window fetch task failed: {0}")]
    TaskFailed(#[from] JoinError),
    /// A window failure reported to several concurrent callers at once.
    #[error(transparent)]
    Shared(Arc<SourceError>)
}

impl SourceError {
    pub fn undated_record(tx: &Transaction) -> Self {
        Self::UndatedRecord {
            activity_id: tx.activity_id,
            trade_date: tx.trade_date.clone()
        }
    }

    /// Takes back sole ownership of a cache-loader error when no other caller holds it.
    pub fn from_shared(error: Arc<SourceError>) -> Self {
        Arc::try_unwrap(error).unwrap_or_else(Self::Shared)
    }

    /// The underlying error, looking through any `Shared` wrapping.
    pub fn root(&self) -> &SourceError {
        match self {
            Self::Shared(inner) => inner.root(),
            other => other
        }
    }

    pub fn request(window: &MonthlyWindow, message: impl Into<String>) -> Self {
        Self::Request {
            start: window.start,
            end: window.end,
            message: message.into()
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Io(#[from] io::Error),
    #[error("Config error: {0}")]
    Json(#[from] serde_json::Error)
}
