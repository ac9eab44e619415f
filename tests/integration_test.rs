use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use trade_ledger::gamma::{
    dgi_series, find_zero_gamma_level, gex_by_strike, load_latest_option_chain, load_option_chain, net_gex_series,
    volume_by_strike, DgiConfig, NetGexConfig, VolumeQuery
};
use trade_ledger::{
    aggregate_by_month, aggregate_net_by_month, dedup_transactions, matches_symbol_prefix, FetchConfig, JsonFileSource,
    Transaction, TransactionError, YearFetcher
};

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() <= 1e-9 * expected.abs().max(1.0), "expected {expected}, got {actual}");
}

fn is_spxw(transaction: &Transaction) -> bool {
    matches_symbol_prefix(transaction, "SPXW")
}

async fn fetch_sample_year(config: FetchConfig) -> Result<Vec<Transaction>> {
    let source = Arc::new(JsonFileSource::open(Path::new("samples").join("transactions_2025.json")).await?);
    let fetcher = YearFetcher::new(source, config);

    Ok(fetcher.fetch_year(2025).await?)
}

#[tokio::test]
async fn test_sample_year_aggregates_spxw_net_amounts_by_month() -> Result<()> {
    let transactions = fetch_sample_year(FetchConfig::new("SAMPLE-ACCOUNT")).await?;

    // The 2024 trade is outside every window; the duplicated April fill is still present
    assert_eq!(transactions.len(), 11);

    let transactions = dedup_transactions(transactions);
    let summary = aggregate_net_by_month(&transactions, is_spxw)?;

    assert_eq!(summary.sorted(), vec![(1, 549.75), (3, 50.0), (4, 25.0), (6, 0.0), (12, 75.5)]);

    Ok(())
}

#[tokio::test]
async fn test_duplicates_are_counted_unless_removed() -> Result<()> {
    let transactions = fetch_sample_year(FetchConfig::new("SAMPLE-ACCOUNT")).await?;
    let summary = aggregate_net_by_month(&transactions, is_spxw)?;

    assert_eq!(summary.get(4), Some(50.0));

    Ok(())
}

#[tokio::test]
async fn test_config_file_restricts_transaction_types() -> Result<()> {
    let config = FetchConfig::from_json_file(Path::new("samples").join("fetch_config.json"))?;

    assert_eq!(config.account_id, "SAMPLE-ACCOUNT");

    let transactions = dedup_transactions(fetch_sample_year(config).await?);
    let summary = aggregate_net_by_month(&transactions, is_spxw)?;

    assert_eq!(summary.sorted(), vec![(1, 549.75), (3, 50.0), (4, 25.0), (12, 75.5)]);

    Ok(())
}

#[tokio::test]
async fn test_cost_selector_fails_on_legs_without_cost() -> Result<()> {
    let transactions = dedup_transactions(fetch_sample_year(FetchConfig::new("SAMPLE-ACCOUNT")).await?);

    let result = aggregate_by_month(&transactions, is_spxw, Transaction::transfer_cost);

    assert!(matches!(result, Err(TransactionError::MissingField { activity_id: Some(1004), .. })));

    let january_only = aggregate_by_month(&transactions, |transaction| is_spxw(transaction) && transaction.trade_month() == Ok(1), Transaction::transfer_cost)?;

    assert_close(january_only.total(), 550.41);

    Ok(())
}

#[test]
fn test_sample_chain_gamma_profile() -> Result<()> {
    let rows = load_option_chain(Path::new("samples").join("chains").join("SPXW_exp2025-06-20_2025-06-18_14-30-00.csv"))?;
    let exposures = gex_by_strike(&rows, None, None);
    let nets: Vec<f64> = exposures.iter().map(|exposure| exposure.net).collect();

    assert_eq!(exposures.len(), 4);
    assert_close(nets[0], -500_000.0);
    assert_close(nets[1], -500_000.0);
    assert_close(nets[2], 1_000_000.0);
    assert_close(nets[3], 1_000_000.0);

    let zero_gamma = find_zero_gamma_level(&exposures).ok_or_else(|| anyhow::anyhow!("no zero gamma level"))?;

    assert_close(zero_gamma, 5000.0 + 50.0 / 3.0);

    Ok(())
}

#[test]
fn test_sample_chain_net_gex_series() -> Result<()> {
    let series = net_gex_series(Path::new("samples").join("chains"), "SPXW", "2025-06-20", None, &NetGexConfig::default())?;

    assert_eq!(series.len(), 2);
    assert_close(series[0].1, -150_000_000.0);
    assert_close(series[1].1, -125_500_500.0);

    Ok(())
}

#[test]
fn test_sample_chain_dgi_series() -> Result<()> {
    let series = dgi_series(Path::new("samples").join("chains"), "SPXW", "2025-06-20", Some("2025-06-18"), &DgiConfig::default())?;

    // At 5000 spot the 5000 strikes sit on spot; at 5010 they count as downside
    assert_eq!(series.len(), 2);
    assert_close(series[0].1, -1.0 / 3.0);
    assert_close(series[1].1, 1.0 / 3.0);

    Ok(())
}

#[test]
fn test_sample_latest_chain_volume_by_strike() -> Result<()> {
    let rows = load_latest_option_chain(Path::new("samples").join("chains"), "SPXW", "2025-06-20")?;

    assert_eq!(rows[0].underlying_price, 5010.0);

    let query = VolumeQuery { top_n: Some(2), ..VolumeQuery::default() };
    let volumes: Vec<(f64, f64, f64)> = volume_by_strike(&rows, &query).iter()
        .map(|volume| (volume.strike, volume.call, volume.put))
        .collect();

    assert_eq!(volumes, vec![(5000.0, 300.0, 250.0), (5050.0, 180.0, 0.0)]);

    Ok(())
}
