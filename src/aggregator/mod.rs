mod monthly;
mod summary;

pub use monthly::{aggregate_by_month, aggregate_net_by_month, matches_symbol_prefix};
pub use summary::MonthlySummary;
