//! Euro amount formatting.

use rust_decimal::Decimal;

use tandem_core::round_display;

/// Format an amount as grouped-thousands euros: `1234.56` → `"1 234,56 €"`.
///
/// Space-grouped integer digits, comma decimal separator, exactly two
/// decimals, currency suffix. Rounding is midpoint-away-from-zero via
/// [`round_display`]; this is the only place amounts are rounded.
pub fn format_eur(amount: Decimal) -> String {
    let mut rounded = round_display(amount).abs();
    rounded.rescale(2);

    // After rescale(2) the mantissa is the exact total in cents.
    let total_cents = rounded.mantissa();
    let euros = total_cents / 100;
    let cents = total_cents % 100;

    let sign = if amount < Decimal::ZERO && total_cents != 0 {
        "-"
    } else {
        ""
    };
    format!("{sign}{},{cents:02} €", group_thousands(euros))
}

fn group_thousands(mut value: i128) -> String {
    let mut groups: Vec<String> = Vec::new();
    while value >= 1000 {
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    groups.push(value.to_string());
    groups.reverse();
    groups.join(" ")
}
