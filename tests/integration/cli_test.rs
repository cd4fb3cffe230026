//! Integration tests for the score and select commands

use chrono::{DateTime, Duration, TimeZone, Utc};
use csp_advisor::chain::{OptionContract, OptionsData};
use csp_advisor::cli::{OutputFormat, ScoreArgs, SelectArgs};
use csp_advisor::config::Config;
use csp_advisor::signal::{compute_signals, Signal, SignalInput};
use rust_decimal_macros::dec;
use std::path::PathBuf;

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 15, 0, 0).unwrap()
}

fn write_json<T: serde::Serialize>(dir: &tempfile::TempDir, name: &str, value: &T) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

fn signal_input() -> SignalInput {
    SignalInput {
        vix: 30.0,
        current_iv: 0.50,
        iv_high_52w: 0.50,
        iv_low_52w: 0.20,
        closing_prices: (0..20).map(|i| 120.0 - i as f64).collect(),
        total_put_volume: 3_000.0,
        total_call_volume: 1_000.0,
        put_premium: 3.00,
        strike_price: 100.0,
        dte: 30,
    }
}

fn chain(expiry_days: i64) -> OptionsData {
    let expiration = as_of() + Duration::days(expiry_days);
    OptionsData {
        underlying_price: dec!(100),
        puts: vec![OptionContract {
            strike: dec!(98),
            last_price: dec!(1.65),
            bid: dec!(1.60),
            ask: dec!(1.70),
            volume: 120,
            open_interest: 900,
            implied_volatility: 0.30,
            expiration,
            delta: None,
        }],
        calls: vec![],
        expiration_dates: vec![expiration],
    }
}

#[tokio::test]
async fn test_score_reads_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = signal_input();
    let args = ScoreArgs {
        input: write_json(&dir, "input.json", &input),
        format: OutputFormat::Json,
    };

    let output = args.run(&Config::default()).await.unwrap();
    assert_eq!(output, compute_signals(&input));
    assert_eq!(output.signal, Signal::Strong);
    assert!(args.execute(&Config::default()).await.is_ok());
}

#[tokio::test]
async fn test_score_rejects_malformed_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.json");
    std::fs::write(&path, r#"{"vix": "high"}"#).unwrap();
    let args = ScoreArgs {
        input: path,
        format: OutputFormat::Table,
    };

    let err = args.run(&Config::default()).await.unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}

#[tokio::test]
async fn test_select_finds_target() {
    let dir = tempfile::tempdir().unwrap();
    let args = SelectArgs {
        chain: write_json(&dir, "chain.json", &chain(30)),
        as_of: Some(as_of()),
    };

    let contract = args.run(&Config::default()).await.unwrap().unwrap();
    assert_eq!(contract.strike, dec!(98));
    assert!(contract.delta.is_some());
    assert!(args.execute(&Config::default()).await.is_ok());
}

#[tokio::test]
async fn test_select_no_target_contract() {
    let dir = tempfile::tempdir().unwrap();
    // Only expiry is outside the 21-45 day window
    let args = SelectArgs {
        chain: write_json(&dir, "chain.json", &chain(60)),
        as_of: Some(as_of()),
    };

    assert!(args.run(&Config::default()).await.unwrap().is_none());
    assert!(args.execute(&Config::default()).await.is_ok());
}
