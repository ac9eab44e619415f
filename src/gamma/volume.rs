use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::gamma::chain::{ContractType, OptionChainRow};

/// Traded call and put volume at one strike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrikeVolume {
    pub strike: f64,
    pub call: f64,
    pub put: f64
}

impl StrikeVolume {
    pub fn total(&self) -> f64 {
        self.call + self.put
    }
}

/// Filters for [`volume_by_strike`]; the default keeps every strike of both types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeQuery {
    pub min_strike: Option<f64>,
    pub max_strike: Option<f64>,
    /// Keep only the N strikes with the most total volume.
    pub top_n: Option<usize>,
    /// Count a single contract type; the other side stays at zero.
    pub contract_type: Option<ContractType>
}

/// Sums `total_volume` per strike and contract type, ordered by strike.
///
/// Missing volume counts as zero. Strike bounds are inclusive. With `top_n`,
/// ties keep the lower strike.
pub fn volume_by_strike(rows: &[OptionChainRow], query: &VolumeQuery) -> Vec<StrikeVolume> {
    let mut selected: Vec<&OptionChainRow> = rows.iter()
        .filter(|row| query.contract_type.is_none_or(|contract_type| row.contract_type == contract_type))
        .filter(|row| query.min_strike.is_none_or(|min| row.strike >= min))
        .filter(|row| query.max_strike.is_none_or(|max| row.strike <= max))
        .collect();
    selected.sort_by(|left, right| left.strike.total_cmp(&right.strike));

    let mut volumes: Vec<StrikeVolume> = Vec::new();

    for row in selected {
        let volume = row.total_volume.unwrap_or(0.0);

        let starts_new_strike = volumes.last()
            .is_none_or(|last| last.strike.total_cmp(&row.strike) != Ordering::Equal);

        if starts_new_strike {
            volumes.push(StrikeVolume { strike: row.strike, call: 0.0, put: 0.0 });
        }

        let Some(strike_volume) = volumes.last_mut() else {
            continue;
        };

        match row.contract_type {
            ContractType::Call => strike_volume.call += volume,
            ContractType::Put => strike_volume.put += volume
        }
    }

    if let Some(top_n) = query.top_n {
        volumes.sort_by(|left, right| right.total().total_cmp(&left.total()));
        volumes.truncate(top_n);
        volumes.sort_by(|left, right| left.strike.total_cmp(&right.strike));
    }

    volumes
}
