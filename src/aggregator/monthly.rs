use crate::aggregator::MonthlySummary;
use crate::models::{Transaction, TransactionError};

/// True if any leg of `transaction` is an option whose symbol starts with `prefix`.
///
/// Matching is case-sensitive and literal.
pub fn matches_symbol_prefix(transaction: &Transaction, prefix: &str) -> bool {
    transaction.transfer_items.iter()
        .any(|item| item.instrument.is_option() && item.instrument.symbol.starts_with(prefix))
}

/// Sums `amount_selector` per trade month over every transaction accepted by `predicate`.
///
/// Transactions are visited in input order, so floating-point totals are
/// reproducible for the same input. No deduplication is performed.
///
/// # Errors
/// Aborts on the first accepted transaction whose trade date cannot be parsed
/// (`TransactionError::MalformedDate`) or whose amount cannot be selected
/// (`TransactionError::MissingField`). No partial summary is returned.
pub fn aggregate_by_month<P, S>(
    transactions: &[Transaction],
    predicate: P,
    amount_selector: S
) -> Result<MonthlySummary, TransactionError>
where
    P: Fn(&Transaction) -> bool,
    S: Fn(&Transaction) -> Result<f64, TransactionError>
{
    let mut summary = MonthlySummary::new();

    for transaction in transactions {
        if !predicate(transaction) {
            continue;
        }

        let month = transaction.trade_month()?;
        let amount = amount_selector(transaction)?;

        summary.add(month, amount);
    }

    Ok(summary)
}

/// [`aggregate_by_month`] using the transaction's net amount.
pub fn aggregate_net_by_month<P>(
    transactions: &[Transaction],
    predicate: P
) -> Result<MonthlySummary, TransactionError>
where
    P: Fn(&Transaction) -> bool
{
    aggregate_by_month(transactions, predicate, Transaction::net_amount)
}
