//! Monetary amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// A signed monetary amount.
///
/// Decimal rather than binary floating point so that cents add up exactly.
pub type Amount = Decimal;

/// Number of decimal places amounts are displayed and rounded to.
pub const CENTS_SCALE: u32 = 2;

/// Render an amount as `$` followed by the value with two decimals.
///
/// Negative amounts keep their sign after the currency symbol (`$-50.00`).
pub fn format_amount(amount: Amount) -> String {
    let mut cents = round_cents(amount);
    cents.rescale(CENTS_SCALE);
    if cents.is_zero() {
        cents.set_sign_positive(true);
    }
    format!("${cents}")
}

/// Whether `amount` carries digits finer than one cent (`0.001`).
pub fn has_sub_cent_digits(amount: Amount) -> bool {
    amount.normalize().scale() > CENTS_SCALE
}

/// Round to whole cents, midpoint away from zero.
pub fn round_cents(amount: Amount) -> Amount {
    amount.round_dp_with_strategy(CENTS_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
