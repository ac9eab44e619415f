use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::errors::TransactionError;
use crate::models::{AssetType, TransactionType};
use crate::types::{Month, TransactionId};

const TRADE_DATE_FORMAT: &str = "%Y-%m-%d";
const TRADE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";
const TRADE_LOCAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A single brokerage activity record as handed over by a transaction source.
///
/// The trade date is kept exactly as reported (e.g. `2025-03-05` or
/// `2025-03-05T14:30:00+0000`) and only parsed when it is needed, so a bad
/// value surfaces as an error at aggregation time instead of at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Brokerage activity id, used to drop duplicates across fetch windows.
    #[serde(default)]
    pub activity_id: Option<TransactionId>,
    #[serde(rename = "type", default)]
    pub transaction_type: TransactionType,
    /// Raw trade date; only its calendar day is significant.
    pub trade_date: String,
    /// Signed monetary total (debit negative, credit positive).
    #[serde(default)]
    pub net_amount: Option<f64>,
    /// One entry per leg of the transaction.
    #[serde(default)]
    pub transfer_items: Vec<TransferItem>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferItem {
    pub instrument: Instrument,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub asset_type: AssetType,
    #[serde(default)]
    pub symbol: String
}

impl Instrument {
    pub fn is_option(&self) -> bool {
        self.asset_type == AssetType::Option
    }
}

impl Transaction {
    /// Parses the reported trade date down to its calendar day.
    ///
    /// Accepts a bare `YYYY-MM-DD`, a timestamp with offset
    /// (`2025-03-05T14:30:00+0000`, RFC 3339 included) or one without. The
    /// day is taken as reported, without converting between offsets.
    ///
    /// # Errors
    /// Returns `TransactionError::MalformedDate` when the whole value matches
    /// none of those forms.
    pub fn parsed_trade_date(&self) -> Result<NaiveDate, TransactionError> {
        let value = self.trade_date.as_str();

        NaiveDate::parse_from_str(value, TRADE_DATE_FORMAT)
            .or_else(|_| DateTime::parse_from_str(value, TRADE_TIMESTAMP_FORMAT).map(|timestamp| timestamp.date_naive()))
            .or_else(|_| DateTime::parse_from_rfc3339(value).map(|timestamp| timestamp.date_naive()))
            .or_else(|_| NaiveDateTime::parse_from_str(value, TRADE_LOCAL_TIMESTAMP_FORMAT).map(|timestamp| timestamp.date()))
            .map_err(|_| TransactionError::malformed_date(self))
    }

    /// The calendar month (1-12) of the trade date.
    pub fn trade_month(&self) -> Result<Month, TransactionError> {
        self.parsed_trade_date().map(|date| date.month())
    }

    /// Amount selector for the reported net amount.
    ///
    /// # Errors
    /// Returns `TransactionError::MissingField` when the source omitted it.
    pub fn net_amount(&self) -> Result<f64, TransactionError> {
        self.net_amount.ok_or_else(|| TransactionError::missing_field(self, "netAmount"))
    }

    /// Amount selector summing the `cost` of every leg that reports one.
    ///
    /// # Errors
    /// Returns `TransactionError::MissingField` when no leg carries a cost.
    pub fn transfer_cost(&self) -> Result<f64, TransactionError> {
        let mut costs = self.transfer_items.iter().filter_map(|item| item.cost).peekable();

        if costs.peek().is_none() {
            return Err(TransactionError::missing_field(self, "transferItems.cost"));
        }

        Ok(costs.sum())
    }
}
