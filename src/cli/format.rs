//! Output rendering

use crate::advisor::Evaluation;
use crate::signal::SignalOutput;
use clap::ValueEnum;
use std::fmt::Write;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

const NA: &str = "N/A";

fn opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{v:.precision$}"),
        None => NA.to_string(),
    }
}

/// Render one scoring result
pub fn format_output(output: &SignalOutput, format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(output)?);
    }

    let rows = [
        ("VIX", output.raw_vix, output.vix_score, 1),
        ("IV RANK", output.raw_iv_rank, output.iv_rank_score, 1),
        ("RSI", output.raw_rsi, output.rsi_score, 1),
        ("P/C", output.raw_put_call_ratio, output.put_call_ratio_score, 2),
        ("YIELD %", output.raw_premium_yield, output.premium_yield_score, 1),
    ];

    let mut out = String::new();
    writeln!(out, "{:<10} {:>10} {:>8}", "SIGNAL", "RAW", "SCORE")?;
    for (name, raw, score, precision) in rows {
        writeln!(out, "{:<10} {:>10} {:>8}", name, opt(raw, precision), opt(score, 1))?;
    }
    writeln!(
        out,
        "{:<10} {:>10} {:>8.1}  {}",
        "CSP SCORE", "", output.composite_score, output.signal
    )?;
    Ok(out)
}

/// Render a batch of evaluations, one row per ticker
pub fn format_evaluations(evals: &[Evaluation], format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(evals)?);
    }

    let mut out = String::new();
    writeln!(
        out,
        "{:<8} {:>9} {:>4} {:>6} {:>9} {:>6} {:>7} {:>6} {:>6} {:>7} {:>8}",
        "TICKER", "STRIKE", "DTE", "DELTA", "CSP SCORE", "VIX", "IV RANK", "RSI", "P/C", "YIELD",
        "SIGNAL"
    )?;

    for eval in evals {
        let (strike, dte, delta) = match &eval.contract {
            Some(c) => (
                format!("${:.2}", c.strike),
                c.dte.to_string(),
                opt(c.delta, 2),
            ),
            None => (NA.to_string(), NA.to_string(), NA.to_string()),
        };
        let o = &eval.output;
        let yield_pct = o
            .raw_premium_yield
            .map_or_else(|| NA.to_string(), |y| format!("{y:.1}%"));

        writeln!(
            out,
            "{:<8} {:>9} {:>4} {:>6} {:>9.1} {:>6} {:>7} {:>6} {:>6} {:>7} {:>8}",
            eval.ticker,
            strike,
            dte,
            delta,
            o.composite_score,
            opt(o.raw_vix, 1),
            opt(o.raw_iv_rank, 1),
            opt(o.raw_rsi, 1),
            opt(o.raw_put_call_ratio, 2),
            yield_pct,
            o.signal
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_marks_undefined() {
        let table = format_output(&SignalOutput::insufficient_data(), OutputFormat::Table).unwrap();
        assert!(table.contains("N/A"));
        assert!(table.contains("WEAK"));
    }

    #[test]
    fn test_evaluations_table() {
        let evals = vec![Evaluation {
            ticker: "KO".to_string(),
            contract: None,
            output: SignalOutput::insufficient_data(),
        }];
        let table = format_evaluations(&evals, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("KO"));
        assert!(lines[1].contains("N/A"));
    }

    #[test]
    fn test_evaluations_json() {
        let json = format_evaluations(&[], OutputFormat::Json).unwrap();
        assert_eq!(json, "[]");
    }
}
