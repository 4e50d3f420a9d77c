//! Discounts
//!
//! Discount policy for cart lines. Every item type has a base percentage;
//! volume then adds one percentage point per full [`DISCOUNT_STEP`] units,
//! capped at [`MAX_DISCOUNT`]. New items are never discounted.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::items::ItemType;

/// Upper bound of any discount, in percent.
pub const MAX_DISCOUNT: u8 = 80;

/// Units per extra percentage point of volume discount.
pub const DISCOUNT_STEP: u32 = 10;

/// Base discount of [`ItemType::SecondFree`] once at least two units are bought.
pub const SECOND_FREE_DISCOUNT: u8 = 50;

/// Base discount of [`ItemType::Sale`].
pub const SALE_DISCOUNT: u8 = 70;

/// Cell shown on the ticket for an undiscounted line.
pub const NO_DISCOUNT_PLACEHOLDER: &str = "-";

/// Calculates the discount, in percent (0 to [`MAX_DISCOUNT`]), for `quantity` units of `item_type`.
pub fn calculate_discount(item_type: ItemType, quantity: u32) -> u8 {
    let base = match item_type {
        ItemType::New => return 0,
        ItemType::SecondFree if quantity > 1 => SECOND_FREE_DISCOUNT,
        ItemType::Regular | ItemType::SecondFree => 0,
        ItemType::Sale => SALE_DISCOUNT,
    };

    if base >= MAX_DISCOUNT {
        return base;
    }

    let volume = quantity / DISCOUNT_STEP;
    let headroom = u32::from(MAX_DISCOUNT - base);

    // `volume.min(headroom)` is at most `MAX_DISCOUNT`, so it fits in a `u8`.
    base + u8::try_from(volume.min(headroom)).unwrap_or(MAX_DISCOUNT - base)
}

/// Share of the undiscounted price still payable after `discount` percent off.
pub fn payable_share(discount: u8) -> Percentage {
    let payable = Decimal::from(100_u8.saturating_sub(discount));

    Percentage::from(payable / Decimal::ONE_HUNDRED)
}

/// Ticket cell for a discount: `-` when zero, `<n>%` otherwise.
pub fn format_discount(discount: u8) -> String {
    if discount == 0 {
        NO_DISCOUNT_PLACEHOLDER.to_string()
    } else {
        format!("{discount}%")
    }
}
