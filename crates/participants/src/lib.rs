//! Participants domain module.
//!
//! This crate holds the household members and the contribution calculator:
//! the pure function that turns raw incomes into the proportional
//! contribution rates every expense split is based on. No IO, no storage.

pub mod contribution;
pub mod participant;

pub use contribution::{compute_rates, ContributionSchedule};
pub use participant::Participant;
