//! Shared numeric helpers for rate and share arithmetic.
//!
//! All amounts, incomes, rates and balances are `rust_decimal::Decimal`.
//! Internal arithmetic is never rounded; rounding to two decimals happens
//! only at the presentation boundary via [`round_display`].

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept when a value is rounded for display.
pub const DISPLAY_DP: u32 = 2;

/// Absolute tolerance for internal sum invariants (rates sum to 100, shares
/// sum to the expense amount, balances sum to zero).
pub fn tolerance() -> Decimal {
    Decimal::new(1, 9) // 1e-9
}

/// `amount * rate / 100`, the single formula behind every share.
pub fn percent_of(amount: Decimal, rate: Decimal) -> Decimal {
    amount * rate / Decimal::ONE_HUNDRED
}

/// Round for display: two decimals, midpoint away from zero.
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Whether two values agree within [`tolerance`].
pub fn within_tolerance(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= tolerance()
}
