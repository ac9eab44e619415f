//! Gamma exposure analytics over option chain snapshots.
//!
//! Positive net exposure means dealers are long gamma and their hedging
//! dampens moves; negative means hedging amplifies them.

mod black_scholes;
mod chain;
mod errors;
mod exposure;
mod imbalance;
mod volume;

pub use black_scholes::{bs_gamma, norm_pdf};
pub use chain::{
    dgi_series, load_latest_option_chain, load_option_chain, net_gex_series, parse_snapshot_timestamp, ContractType,
    OptionChainRow
};
pub use errors::ChainError;
pub use exposure::{
    apply_dealer_sign, find_zero_gamma_level, gex_by_strike, net_gex_near_spot, row_gross_gex, NetGexConfig,
    StrikeExposure, CONTRACT_MULTIPLIER
};
pub use imbalance::{directional_gamma_imbalance, DgiConfig};
pub use volume::{volume_by_strike, StrikeVolume, VolumeQuery};
