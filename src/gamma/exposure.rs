use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::gamma::chain::{ContractType, OptionChainRow};

/// Standard equity index option contract multiplier.
pub const CONTRACT_MULTIPLIER: f64 = 100.0;

/// Dealer-agnostic gamma exposure of one contract line.
pub fn row_gross_gex(gamma: f64, open_interest: f64, spot: f64, multiplier: f64, gamma_scale: f64) -> f64 {
    gamma * open_interest * spot * spot * multiplier * gamma_scale
}

/// Signs a gross figure under an assumed dealer position; short dealers flip it.
pub fn apply_dealer_sign(value: f64, dealer_short: bool) -> f64 {
    if dealer_short { -value } else { value }
}

/// Call, put and net (call minus put) exposure at one strike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrikeExposure {
    pub strike: f64,
    pub call: f64,
    pub put: f64,
    pub net: f64
}

/// Sums `gamma * open_interest * 100 * underlying_price` per strike and
/// contract type, keeping strikes within the optional inclusive bounds.
///
/// The result is ordered by strike.
pub fn gex_by_strike(rows: &[OptionChainRow], min_strike: Option<f64>, max_strike: Option<f64>) -> Vec<StrikeExposure> {
    let mut selected: Vec<&OptionChainRow> = rows.iter()
        .filter(|row| min_strike.is_none_or(|min| row.strike >= min))
        .filter(|row| max_strike.is_none_or(|max| row.strike <= max))
        .collect();
    selected.sort_by(|left, right| left.strike.total_cmp(&right.strike));

    let mut exposures: Vec<StrikeExposure> = Vec::new();

    for row in selected {
        let gex = row.gamma * row.open_interest * CONTRACT_MULTIPLIER * row.underlying_price;

        let starts_new_strike = exposures.last()
            .is_none_or(|last| last.strike.total_cmp(&row.strike) != Ordering::Equal);

        if starts_new_strike {
            exposures.push(StrikeExposure { strike: row.strike, call: 0.0, put: 0.0, net: 0.0 });
        }

        let Some(exposure) = exposures.last_mut() else {
            continue;
        };

        match row.contract_type {
            ContractType::Call => exposure.call += gex,
            ContractType::Put => exposure.put += gex
        }

        exposure.net = exposure.call - exposure.put;
    }

    exposures
}

/// The strike where net exposure first reaches or crosses zero, linearly
/// interpolated between the two bracketing strikes.
pub fn find_zero_gamma_level(exposures: &[StrikeExposure]) -> Option<f64> {
    for pair in exposures.windows(2) {
        let (left, right) = (pair[0], pair[1]);

        if left.net == 0.0 {
            return Some(left.strike);
        }

        if right.net == 0.0 || (left.net < 0.0) != (right.net < 0.0) {
            return Some(left.strike + (0.0 - left.net) * (right.strike - left.strike) / (right.net - left.net));
        }
    }

    None
}

/// Parameters for [`net_gex_near_spot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetGexConfig {
    /// Half-width of the strike band around spot.
    pub strike_width: f64,
    pub multiplier: f64,
    /// Assume dealers are short the options (negates the exposure).
    pub dealer_short: bool,
    /// Gamma unit scaling, 0.01 for exposure per 1% move.
    pub gamma_scale: f64
}

impl Default for NetGexConfig {
    fn default() -> Self {
        Self {
            strike_width: 50.0,
            multiplier: CONTRACT_MULTIPLIER,
            dealer_short: true,
            gamma_scale: 0.01
        }
    }
}

/// Dealer-signed exposure of the contracts struck within `strike_width` of spot.
///
/// Spot is the first row's underlying price; an empty chain yields `0.0`.
pub fn net_gex_near_spot(rows: &[OptionChainRow], config: &NetGexConfig) -> f64 {
    let Some(spot) = rows.first().map(|row| row.underlying_price) else {
        return 0.0;
    };

    let gross: f64 = rows.iter()
        .filter(|row| row.strike >= spot - config.strike_width && row.strike <= spot + config.strike_width)
        .map(|row| row_gross_gex(row.gamma, row.open_interest, spot, config.multiplier, config.gamma_scale))
        .sum();

    apply_dealer_sign(gross, config.dealer_short)
}
