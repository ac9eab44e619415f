use serde::{Deserialize, Serialize};

use crate::gamma::chain::OptionChainRow;

/// Delta band used by [`directional_gamma_imbalance`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DgiConfig {
    pub min_abs_delta: f64,
    pub max_abs_delta: f64
}

impl Default for DgiConfig {
    fn default() -> Self {
        Self {
            min_abs_delta: 0.15,
            max_abs_delta: 0.55
        }
    }
}

/// Balance of dealer-short gamma exposure struck above spot against below
/// spot, in `[-1, 1]`.
///
/// Only contracts whose absolute delta lies within the configured band count;
/// rows without a delta never do. Spot is the first row's underlying price.
/// Negative values mean the upside is fragile, positive the downside. An
/// empty chain, an empty band or a zero total yields `0.0`.
pub fn directional_gamma_imbalance(rows: &[OptionChainRow], config: &DgiConfig) -> f64 {
    let Some(spot) = rows.first().map(|row| row.underlying_price) else {
        return 0.0;
    };

    let mut above = 0.0;
    let mut below = 0.0;

    let in_band = rows.iter()
        .filter(|row| row.delta.map(f64::abs).is_some_and(|delta| delta >= config.min_abs_delta && delta <= config.max_abs_delta));

    for row in in_band {
        let gex = -row.gamma * row.open_interest * spot * spot * 0.01;

        if row.strike > spot {
            above += gex;
        } else if row.strike < spot {
            below += gex;
        }
    }

    let denominator = f64::abs(above) + f64::abs(below);

    if denominator == 0.0 {
        return 0.0;
    }

    ((above - below) / denominator).clamp(-1.0, 1.0)
}
