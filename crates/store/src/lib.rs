//! Expense store.
//!
//! An explicit, in-memory repository owned by the caller — never a
//! process-wide singleton — holding the household's participants and
//! expense history. It owns identity assignment and timestamping and
//! delegates all arithmetic to the calculation crates. Synchronous,
//! single-owner; concurrent mutation is out of scope.

pub mod book;

pub use book::ExpenseBook;
