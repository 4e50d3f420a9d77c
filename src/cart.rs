//! Cart

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{
    items::{Item, ItemError, ItemType},
    pricing::{PricedItem, PricingError, price_item, total_price},
    receipt::Receipt,
};

/// Ticket printed for a cart without items.
pub const NO_ITEMS_MESSAGE: &str = "No items.";

/// Errors related to cart contents or totals.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// An item was rejected; the cart is unchanged.
    #[error(transparent)]
    InvalidItem(#[from] ItemError),

    /// Pricing the cart failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Cart
///
/// Items are kept in insertion order, which is also their order on the ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Create a new, empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append an item.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidItem`] naming the first invalid field, checked
    /// in the order title, price, quantity. Nothing is added on error.
    pub fn add_item(
        &mut self,
        title: impl Into<String>,
        price: Decimal,
        quantity: u32,
        item_type: ItemType,
    ) -> Result<(), CartError> {
        let item = Item::new(title, price, quantity, item_type).inspect_err(|err| {
            debug!(field = err.field(), error = %err, "item rejected");
        })?;

        self.push(item);

        Ok(())
    }

    /// Append an already validated item.
    pub fn push(&mut self, item: Item) {
        debug!(
            title = item.title(),
            price = %item.price(),
            quantity = item.quantity(),
            item_type = %item.item_type(),
            position = self.items.len() + 1,
            "item added"
        );

        self.items.push(item);
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Get the number of items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Run the pricing pass over every item.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if an item's price overflows.
    pub fn priced_items(&self) -> Result<Vec<PricedItem<'_>>, PricingError> {
        self.items.iter().map(price_item).collect()
    }

    /// Exact total of all items after discounts.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if pricing or summing overflows.
    pub fn total(&self) -> Result<Decimal, PricingError> {
        total_price(&self.priced_items()?)
    }

    /// Price the cart into a receipt.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if pricing overflows or the grand total cannot be
    /// represented as money.
    pub fn receipt(&self) -> Result<Receipt, PricingError> {
        Receipt::from_priced_items(&self.priced_items()?)
    }

    /// Format the fixed-width ticket, or [`NO_ITEMS_MESSAGE`] for an empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Pricing`] if the cart cannot be priced.
    pub fn format_ticket(&self) -> Result<String, CartError> {
        if self.is_empty() {
            return Ok(NO_ITEMS_MESSAGE.to_string());
        }

        let receipt = self.receipt()?;

        debug!(items = self.len(), total = %receipt.total(), "formatting ticket");

        Ok(receipt.format_table())
    }
}
