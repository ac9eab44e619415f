mod errors;
#[cfg(test)]
mod tests;
mod transaction;

use serde::{Deserialize, Serialize};

pub use errors::TransactionError;
pub use transaction::{Instrument, Transaction, TransferItem};

/// Classification tag carried by an instrument.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    Option,
    Equity,
    Index,
    MutualFund,
    CashEquivalent,
    FixedIncome,
    Currency,
    Future,
    #[serde(other)]
    Other
}

/// Brokerage activity category, also used as a fetch filter.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Trade,
    ReceiveAndDeliver,
    DividendOrInterest,
    AchReceipt,
    AchDisbursement,
    CashReceipt,
    CashDisbursement,
    ElectronicFund,
    WireOut,
    WireIn,
    Journal,
    Memorandum,
    MarginCall,
    MoneyMarket,
    SmaAdjustment,
    #[default]
    #[serde(other)]
    Other
}
