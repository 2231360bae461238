//! Presentation helpers.
//!
//! The calculation core keeps full precision; everything user-facing goes
//! through here. Currently that is a single concern: euro formatting in the
//! household's locale convention.

pub mod currency;

pub use currency::format_eur;
