//! Money
//!
//! Tickets are priced in a single currency. Amounts are carried as exact
//! [`Decimal`]s through the pricing pass and only rounded to minor units
//! (half to even) when they are displayed.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use thiserror::Error;

/// Currency of every cart.
pub fn currency() -> &'static Currency {
    iso::USD
}

/// Decimal places kept when rounding to minor units.
const MINOR_DIGITS: u32 = 2;

/// Minor units in one major unit.
const MINOR_PER_MAJOR: u64 = 100;

/// An amount too large to fit in `i64` minor units.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("amount {0} cannot be represented in minor units")]
pub struct AmountOutOfRange(pub Decimal);

/// Rounds `amount` half to even to whole minor units of [`currency`].
///
/// # Errors
///
/// Returns [`AmountOutOfRange`] if the rounded amount does not fit in `i64` minor units.
pub fn to_money(amount: Decimal) -> Result<Money<'static, Currency>, AmountOutOfRange> {
    let minor = amount
        .round_dp_with_strategy(MINOR_DIGITS, RoundingStrategy::MidpointNearestEven)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor| minor.to_i64())
        .ok_or(AmountOutOfRange(amount))?;

    Ok(Money::from_minor(minor, currency()))
}

/// Formats money as `<symbol><major>.<minor>`, e.g. `$123.45`.
///
/// There is no thousands separator and the major part is omitted below one
/// (`$.60`), matching the `$#.00` pattern printed on tickets.
pub fn format_money(money: &Money<'_, Currency>) -> String {
    let minor = money.to_minor_units();
    let sign = if minor < 0 { "-" } else { "" };
    let symbol = money.currency().symbol;

    let minor = minor.unsigned_abs();
    let major = minor / MINOR_PER_MAJOR;
    let cents = minor % MINOR_PER_MAJOR;

    if major == 0 {
        format!("{sign}{symbol}.{cents:02}")
    } else {
        format!("{sign}{symbol}{major}.{cents:02}")
    }
}

/// Rounds and formats an exact amount in one step.
///
/// # Errors
///
/// Returns [`AmountOutOfRange`] if the amount does not fit in `i64` minor units.
pub fn format_amount(amount: Decimal) -> Result<String, AmountOutOfRange> {
    Ok(format_money(&to_money(amount)?))
}
