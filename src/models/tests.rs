use super::{AssetType, Instrument, Transaction, TransactionError, TransactionType, TransferItem};

use anyhow::Result;
use chrono::NaiveDate;

fn create_transaction(trade_date: &str, net_amount: Option<f64>, costs: &[Option<f64>]) -> Transaction {
    Transaction {
        activity_id: Some(42),
        transaction_type: TransactionType::Trade,
        trade_date: trade_date.to_string(),
        net_amount,
        transfer_items: costs.iter().map(|cost| TransferItem {
            instrument: Instrument {
                asset_type: AssetType::Option,
                symbol: "SPXW250620C05000000".to_string()
            },
            amount: Some(1.0),
            cost: *cost,
            price: None
        }).collect()
    }
}

#[test]
fn test_trade_date_parses_plain_and_timestamped_values() -> Result<()> {
    let expected = NaiveDate::from_ymd_opt(2025, 3, 5);

    assert_eq!(Some(create_transaction("2025-03-05", None, &[]).parsed_trade_date()?), expected);
    assert_eq!(Some(create_transaction("2025-03-05T14:30:00+0000", None, &[]).parsed_trade_date()?), expected);
    assert_eq!(create_transaction("2025-12-31T23:59:59+0000", None, &[]).trade_month()?, 12);

    Ok(())
}

#[test]
fn test_trade_date_accepts_offset_and_local_timestamps() -> Result<()> {
    let expected = NaiveDate::from_ymd_opt(2025, 3, 5);

    for value in ["2025-03-05T23:30:00-0500", "2025-03-05T14:30:00Z", "2025-03-05T14:30:00+01:00", "2025-03-05T14:30:00"] {
        assert_eq!(Some(create_transaction(value, None, &[]).parsed_trade_date()?), expected, "{value}");
    }

    Ok(())
}

#[test]
fn test_trade_date_rejects_trailing_garbage() {
    for value in ["2025-03-05garbage", "2025-03-05Tnope", "2025-03-05 ", "2025-03-05T14:30:00+0000x"] {
        let result = create_transaction(value, None, &[]).parsed_trade_date();

        assert!(matches!(result, Err(TransactionError::MalformedDate { .. })), "{value}");
    }
}

#[test]
fn test_trade_date_rejects_malformed_values() {
    for value in ["not-a-date", "", "2025-13-01", "2025-02-30", "05/03/2025", "2025-0é-01"] {
        let result = create_transaction(value, None, &[]).parsed_trade_date();

        assert_eq!(result, Err(TransactionError::MalformedDate {
            activity_id: Some(42),
            trade_date: value.to_string()
        }));
    }
}

#[test]
fn test_net_amount_selector_reports_missing_field() -> Result<()> {
    assert_eq!(create_transaction("2025-01-01", Some(-12.5), &[]).net_amount()?, -12.5);

    let result = create_transaction("2025-01-01", None, &[]).net_amount();

    assert!(matches!(result, Err(TransactionError::MissingField { field: "netAmount", .. })));

    Ok(())
}

#[test]
fn test_transfer_cost_selector_sums_reported_costs() -> Result<()> {
    let transaction = create_transaction("2025-01-01", None, &[Some(-100.0), None, Some(40.5)]);

    assert_eq!(transaction.transfer_cost()?, -59.5);

    let result = create_transaction("2025-01-01", Some(1.0), &[None]).transfer_cost();

    assert!(matches!(result, Err(TransactionError::MissingField { field: "transferItems.cost", .. })));

    Ok(())
}

#[test]
fn test_transaction_deserializes_from_brokerage_json() -> Result<()> {
    let json = r#"{
        "activityId": 77,
        "type": "TRADE",
        "tradeDate": "2025-06-20T20:00:00+0000",
        "netAmount": 310.25,
        "transferItems": [
            {"instrument": {"assetType": "OPTION", "symbol": "SPXW250620C05000000"}, "amount": -1.0, "price": 3.1},
            {"instrument": {"assetType": "CURRENCY", "symbol": "CURRENCY_USD"}, "cost": -0.66, "feeType": "COMMISSION"}
        ]
    }"#;

    let transaction: Transaction = serde_json::from_str(json)?;

    assert_eq!(transaction.activity_id, Some(77));
    assert_eq!(transaction.transaction_type, TransactionType::Trade);
    assert_eq!(transaction.net_amount, Some(310.25));
    assert_eq!(transaction.transfer_items.len(), 2);
    assert!(transaction.transfer_items[0].instrument.is_option());
    assert_eq!(transaction.transfer_items[1].instrument.asset_type, AssetType::Currency);

    Ok(())
}

#[test]
fn test_unknown_type_tags_fall_back_to_other() -> Result<()> {
    let json = r#"{
        "type": "SOMETHING_NEW",
        "tradeDate": "2025-06-20",
        "transferItems": [{"instrument": {"assetType": "CRYPTO", "symbol": "BTC"}}]
    }"#;

    let transaction: Transaction = serde_json::from_str(json)?;

    assert_eq!(transaction.activity_id, None);
    assert_eq!(transaction.transaction_type, TransactionType::Other);
    assert_eq!(transaction.net_amount, None);
    assert_eq!(transaction.transfer_items[0].instrument.asset_type, AssetType::Other);

    Ok(())
}
