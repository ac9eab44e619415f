use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::gamma::errors::ChainError;
use crate::gamma::exposure::{net_gex_near_spot, NetGexConfig};
use crate::gamma::imbalance::{directional_gamma_imbalance, DgiConfig};

const SNAPSHOT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
const SNAPSHOT_EXTENSION: &str = ".csv";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContractType {
    Call,
    Put
}

/// One contract of an option chain snapshot. Extra CSV columns are ignored;
/// `delta` and `total_volume` may be absent or blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChainRow {
    pub strike: f64,
    pub contract_type: ContractType,
    pub gamma: f64,
    pub open_interest: f64,
    pub underlying_price: f64,
    #[serde(default)]
    pub delta: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>
}

/// Reads an option chain snapshot CSV.
///
/// # Errors
/// Returns `ChainError` if the file cannot be opened or any row fails to parse.
pub fn load_option_chain(path: impl AsRef<Path>) -> Result<Vec<OptionChainRow>, ChainError> {
    let file = File::open(path.as_ref())?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(BufReader::new(file));

    reader.deserialize::<OptionChainRow>()
        .map(|result| result.map_err(ChainError::from))
        .collect()
}

/// Extracts the fetch timestamp from a snapshot file stem of the form
/// `{symbol}_exp{YYYY-MM-DD}_{YYYY-MM-DD}_{HH-MM-SS}`.
pub fn parse_snapshot_timestamp(file_stem: &str) -> Option<NaiveDateTime> {
    let parts: Vec<&str> = file_stem.split('_').collect();

    if parts.len() < 4 {
        return None;
    }

    NaiveDateTime::parse_from_str(&format!("{}_{}", parts[2], parts[3]), SNAPSHOT_TIMESTAMP_FORMAT).ok()
}

/// Reads the most recent snapshot of `symbol` expiring on `expiration`, the
/// last matching file in name order.
///
/// # Errors
/// Returns `ChainError::NoSnapshots` when no file matches and
/// `ChainError::EmptySnapshot` when the latest one holds no rows.
pub fn load_latest_option_chain(
    directory: impl AsRef<Path>,
    symbol: &str,
    expiration: &str
) -> Result<Vec<OptionChainRow>, ChainError> {
    let directory = directory.as_ref();
    let prefix = snapshot_prefix(symbol, expiration, None);

    let Some(latest) = snapshot_files(directory, &prefix)?.pop() else {
        return Err(ChainError::no_snapshots(directory, prefix));
    };

    let path = directory.join(latest);
    let rows = load_option_chain(&path)?;

    if rows.is_empty() {
        return Err(ChainError::EmptySnapshot { path });
    }

    debug!("Loaded {} contracts from {}", rows.len(), path.display());

    Ok(rows)
}

/// Near-spot net GEX for every snapshot of `symbol` expiring on `expiration`
/// found in `directory`, ordered by file name (and so by fetch time).
///
/// `sample_date` narrows the snapshots to a single fetch day. Snapshots that
/// cannot be read or carry no timestamp are skipped with a warning.
///
/// # Errors
/// Returns `ChainError::NoSnapshots` when nothing usable was found, or
/// `ChainError::Io` if the directory cannot be listed.
pub fn net_gex_series(
    directory: impl AsRef<Path>,
    symbol: &str,
    expiration: &str,
    sample_date: Option<&str>,
    config: &NetGexConfig
) -> Result<Vec<(NaiveDateTime, f64)>, ChainError> {
    let prefix = snapshot_prefix(symbol, expiration, sample_date);

    snapshot_series(directory.as_ref(), prefix, |rows| net_gex_near_spot(rows, config))
}

/// Directional gamma imbalance per snapshot, walked the same way as [`net_gex_series`].
pub fn dgi_series(
    directory: impl AsRef<Path>,
    symbol: &str,
    expiration: &str,
    sample_date: Option<&str>,
    config: &DgiConfig
) -> Result<Vec<(NaiveDateTime, f64)>, ChainError> {
    let prefix = snapshot_prefix(symbol, expiration, sample_date);

    snapshot_series(directory.as_ref(), prefix, |rows| directional_gamma_imbalance(rows, config))
}

fn snapshot_prefix(symbol: &str, expiration: &str, sample_date: Option<&str>) -> String {
    match sample_date {
        Some(date) => format!("{symbol}_exp{expiration}_{date}_"),
        None => format!("{symbol}_exp{expiration}_")
    }
}

/// Snapshot file names in `directory` starting with `prefix`, sorted.
fn snapshot_files(directory: &Path, prefix: &str) -> Result<Vec<String>, ChainError> {
    let mut file_names: Vec<String> = fs::read_dir(directory)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(prefix) && name.ends_with(SNAPSHOT_EXTENSION))
        .collect();
    file_names.sort();

    Ok(file_names)
}

fn snapshot_series<F>(directory: &Path, prefix: String, metric: F) -> Result<Vec<(NaiveDateTime, f64)>, ChainError>
where
    F: Fn(&[OptionChainRow]) -> f64
{
    let file_names = snapshot_files(directory, &prefix)?;
    let mut series = Vec::with_capacity(file_names.len());

    for file_name in file_names {
        let stem = file_name.trim_end_matches(SNAPSHOT_EXTENSION);

        let Some(timestamp) = parse_snapshot_timestamp(stem) else {
            warn!("Skipping snapshot without a timestamp: {file_name}");
            continue;
        };

        match load_option_chain(directory.join(&file_name)) {
            Ok(rows) => {
                let value = metric(&rows);
                debug!("Snapshot {file_name}: {value}");
                series.push((timestamp, value));
            }
            Err(error) => {
                warn!("Skipping snapshot {file_name}: {error}");
            }
        }
    }

    if series.is_empty() {
        return Err(ChainError::no_snapshots(directory, prefix));
    }

    Ok(series)
}
