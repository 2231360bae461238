//! Expenses domain module.
//!
//! Expense records (description, amount, category, payer, sharing set) and
//! the share allocator that applies contribution rates to one expense.
//! Deterministic domain logic only — identity assignment and timestamping
//! belong to the store.

pub mod allocate;
pub mod expense;

pub use allocate::{allocate_shares, AllocationMode};
pub use expense::{Category, Expense, ExpenseDraft, ExpensePatch, ExpenseStatus, Share};
