mod window;

pub use window::{build_monthly_windows, MonthlyWindow};

pub type AccountId = String;
pub type TransactionId = i64;
pub type Year = u16;
pub type Month = u32;
