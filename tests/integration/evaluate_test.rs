//! Integration tests for the evaluate command

use chrono::{DateTime, Duration, TimeZone, Utc};
use csp_advisor::advisor::TickerSnapshot;
use csp_advisor::chain::{OptionContract, OptionsData};
use csp_advisor::cli::{EvaluateArgs, OutputFormat};
use csp_advisor::config::Config;
use rust_decimal_macros::dec;
use std::path::PathBuf;

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 15, 0, 0).unwrap()
}

fn snapshot(ticker: &str, expiry_days: i64) -> TickerSnapshot {
    let expiration = as_of() + Duration::days(expiry_days);
    TickerSnapshot {
        ticker: ticker.to_string(),
        chain: OptionsData {
            underlying_price: dec!(100),
            puts: vec![OptionContract {
                strike: dec!(97),
                last_price: dec!(1.40),
                bid: dec!(1.35),
                ask: dec!(1.45),
                volume: 80,
                open_interest: 400,
                implied_volatility: 0.30,
                expiration,
                delta: None,
            }],
            calls: vec![],
            expiration_dates: vec![expiration],
        },
        closing_prices: (0..20).map(|i| 100.0 + (i % 2) as f64).collect(),
        vix: Some(18.0),
    }
}

fn write_snapshot(dir: &tempfile::TempDir, snap: &TickerSnapshot) -> PathBuf {
    let path = dir.path().join(format!("{}.json", snap.ticker));
    std::fs::write(&path, serde_json::to_string(snap).unwrap()).unwrap();
    path
}

#[tokio::test]
async fn test_evaluate_preserves_order_and_overrides_vix() {
    let dir = tempfile::tempdir().unwrap();
    let paths = vec![
        write_snapshot(&dir, &snapshot("AAA", 30)),
        write_snapshot(&dir, &snapshot("BBB", 90)),
        write_snapshot(&dir, &snapshot("CCC", 28)),
    ];

    let args = EvaluateArgs {
        snapshots: paths,
        vix: Some(25.0),
        as_of: Some(as_of()),
        format: OutputFormat::Json,
    };
    let evals = args.run(&Config::default()).await.unwrap();

    let tickers: Vec<&str> = evals.iter().map(|e| e.ticker.as_str()).collect();
    assert_eq!(tickers, ["AAA", "BBB", "CCC"]);
    assert!(evals[0].contract.is_some());
    assert!(evals[1].contract.is_none());
    assert_eq!(evals[2].output.raw_vix, Some(25.0));
}

#[tokio::test]
async fn test_evaluate_missing_file_errors() {
    let args = EvaluateArgs {
        snapshots: vec![PathBuf::from("/nonexistent/snapshot.json")],
        vix: None,
        as_of: Some(as_of()),
        format: OutputFormat::Table,
    };
    assert!(args.run(&Config::default()).await.is_err());
}
