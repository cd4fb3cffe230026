//! End-to-end integration tests

use chrono::{DateTime, Duration, TimeZone, Utc};
use csp_advisor::advisor::{Advisor, TickerSnapshot};
use csp_advisor::chain::{select_target_contract, OptionContract, OptionsData};
use csp_advisor::config::Config;
use csp_advisor::signal::{compute_signals, Signal};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 15, 0, 0).unwrap()
}

fn put(strike: Decimal, bid: Decimal, ask: Decimal, days: i64, iv: f64) -> OptionContract {
    OptionContract {
        strike,
        last_price: (bid + ask) / Decimal::TWO,
        bid,
        ask,
        volume: 300,
        open_interest: 2_500,
        implied_volatility: iv,
        expiration: as_of() + Duration::days(days),
        delta: None,
    }
}

fn chain() -> OptionsData {
    OptionsData {
        underlying_price: dec!(100),
        puts: vec![
            put(dec!(95), dec!(0.95), dec!(1.05), 30, 0.31),
            put(dec!(100), dec!(0.50), dec!(1.20), 30, 0.29),
            put(dec!(98), dec!(1.60), dec!(1.70), 30, 0.30),
            put(dec!(100), dec!(3.90), dec!(4.10), 60, 0.33),
        ],
        calls: vec![put(dec!(105), dec!(1.00), dec!(1.10), 30, 0.27)],
        expiration_dates: vec![as_of() + Duration::days(30), as_of() + Duration::days(60)],
    }
}

#[test]
fn test_select_skips_wide_atm_contract() {
    // The 100 strike is closest but its spread is far above 15%
    let target = select_target_contract(&chain(), as_of()).unwrap();
    assert_eq!(target.strike, dec!(98));
    assert_eq!(target.expiration, as_of() + Duration::days(30));
}

#[test]
fn test_pipeline_from_chain_to_signal() {
    let snapshot = TickerSnapshot {
        ticker: "SPY".to_string(),
        chain: chain(),
        closing_prices: (0..40).map(|i| 110.0 - i as f64 * 0.25).collect(),
        vix: Some(30.0),
    };
    let eval = Advisor::new(&Config::default()).evaluate(&snapshot, as_of());

    let contract = eval.contract.expect("target contract");
    assert_eq!(contract.strike, dec!(98));
    assert_eq!(contract.dte, 30);

    let out = eval.output;
    assert_eq!(out.vix_score, Some(100.0));
    // Falling closes: RSI 0, best RSI score
    assert_eq!(out.rsi_score, Some(100.0));
    assert_eq!(out.defined_count(), 5);
    assert!(out.composite_score > 0.0 && out.composite_score <= 100.0);

    // Scoring the assembled input directly gives the same output
    let input = csp_advisor::advisor::build_signal_input(
        &snapshot.chain,
        &select_target_contract(&snapshot.chain, as_of()).unwrap(),
        &snapshot.closing_prices,
        30.0,
        as_of(),
    );
    assert_eq!(compute_signals(&input), out);
}

#[test]
fn test_no_target_is_weak_zero() {
    let mut chain = chain();
    chain.expiration_dates = vec![as_of() + Duration::days(60)];
    let snapshot = TickerSnapshot {
        ticker: "XYZ".to_string(),
        chain,
        closing_prices: vec![],
        vix: None,
    };
    let eval = Advisor::default().evaluate(&snapshot, as_of());
    assert!(eval.contract.is_none());
    assert_eq!(eval.output.composite_score, 0.0);
    assert_eq!(eval.output.signal, Signal::Weak);
    assert!(eval.output.vix_score.is_none());
}

#[test]
fn test_config_example_loads() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config, Config::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_override_changes_selection() {
    let toml = r#"
        [filter]
        max_spread_pct = 1.0
    "#;
    let config: Config = toml::from_str(toml).unwrap();
    let snapshot = TickerSnapshot {
        ticker: "SPY".to_string(),
        chain: chain(),
        closing_prices: vec![],
        vix: None,
    };
    let eval = Advisor::new(&config).evaluate(&snapshot, as_of());
    // With a loose spread limit the wide ATM strike is eligible again
    assert_eq!(eval.contract.unwrap().strike, dec!(100));
}
