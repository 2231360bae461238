//! Balance ledger module.
//!
//! Folds the full expense history into one signed net position per
//! participant, plus the reporting helpers built on the same fold
//! (category totals, monthly summary). Purely functional: inputs are never
//! mutated and every call recomputes from scratch.

pub mod balance;
pub mod report;

pub use balance::{compute_balances, Balance};
pub use report::{category_totals, monthly_summary, MonthlySummary};
