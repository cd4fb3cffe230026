//! Integration tests

mod cli_test;
mod e2e_test;
mod evaluate_test;
