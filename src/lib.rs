//! Till
//!
//! Till prices a small shopping cart with a tiered discount policy and prints
//! the result as a fixed-width text ticket.
//!
//! ```
//! use rust_decimal::Decimal;
//! use till::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add_item("Banana", Decimal::new(20_00, 2), 4, ItemType::SecondFree)?;
//!
//! assert!(cart.format_ticket()?.ends_with("$40.00 "));
//! # Ok::<(), CartError>(())
//! ```

pub mod align;
pub mod cart;
pub mod discounts;
pub mod fixtures;
pub mod items;
pub mod money;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod table;
pub mod utils;
