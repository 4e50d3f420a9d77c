//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    align::{Alignment, align},
    cart::{Cart, CartError, NO_ITEMS_MESSAGE},
    discounts::calculate_discount,
    fixtures::{CartFixture, FixtureError},
    items::{Item, ItemError, ItemType},
    money::{format_money, to_money},
    pricing::{PricedItem, PricingError},
    receipt::{Receipt, ReceiptError, TICKET_ALIGNMENTS, TICKET_HEADER},
    table::TableFormatter,
};
