//! Options chain handling
//!
//! Contract types, quality filtering and target contract selection

mod filter;
mod selector;
mod types;

pub use filter::{filter_contracts, ContractFilter, FilterConfig, FilterResult, RejectReason};
pub use selector::{select_target_contract, ContractSelector, SelectionConfig};
pub use types::{days_until, fractional_days_until, OptionContract, OptionsData};
