//! csp-advisor: Cash-secured put attractiveness scoring
//!
//! This library provides the core components for:
//! - Piecewise-linear scoring of VIX, IV rank, RSI, put/call ratio and premium yield
//! - Wilder RSI, IV rank, premium yield and put delta calculators
//! - Options chain filtering and nearest-the-money target selection
//! - Re-weighted composite scoring with STRONG / MODERATE / WEAK labels
//! - Snapshot evaluation, configuration and CLI
//!
//! The scoring core is pure: no I/O and no shared state.

pub mod advisor;
pub mod chain;
pub mod cli;
pub mod config;
pub mod model;
pub mod signal;
pub mod telemetry;
