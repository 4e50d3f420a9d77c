//! Items

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Longest accepted title, in characters.
pub const MAX_TITLE_LENGTH: usize = 32;

/// Smallest accepted unit price (0.01).
pub const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Smallest accepted quantity.
pub const MIN_QUANTITY: u32 = 1;

/// Errors raised when an item is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// Title is blank or longer than [`MAX_TITLE_LENGTH`] characters.
    #[error(
        "invalid title {0:?}: expected 1 to {max} non-blank characters",
        max = MAX_TITLE_LENGTH
    )]
    InvalidTitle(String),

    /// Unit price is below [`MIN_PRICE`].
    #[error("invalid price {0}: expected at least {min}", min = MIN_PRICE)]
    InvalidPrice(Decimal),

    /// Quantity is below [`MIN_QUANTITY`].
    #[error("invalid quantity {0}: expected at least {min}", min = MIN_QUANTITY)]
    InvalidQuantity(u32),

    /// Item type name is not one of the known variants.
    #[error("invalid type {0:?}: expected one of new, regular, second-free, sale")]
    UnknownItemType(String),
}

impl ItemError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ItemError::InvalidTitle(_) => "title",
            ItemError::InvalidPrice(_) => "price",
            ItemError::InvalidQuantity(_) => "quantity",
            ItemError::UnknownItemType(_) => "type",
        }
    }
}

/// Pricing category of an item, selecting its base discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    /// New arrivals, never discounted.
    New,

    /// Regular stock, discounted by volume only.
    Regular,

    /// Buy one, get the second free.
    SecondFree,

    /// Clearance stock.
    Sale,
}

impl ItemType {
    /// All item types, in declaration order.
    pub const ALL: [ItemType; 4] = [
        ItemType::New,
        ItemType::Regular,
        ItemType::SecondFree,
        ItemType::Sale,
    ];

    /// Kebab-case name, as used in fixtures.
    pub fn name(self) -> &'static str {
        match self {
            ItemType::New => "new",
            ItemType::Regular => "regular",
            ItemType::SecondFree => "second-free",
            ItemType::Sale => "sale",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ItemType {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::ALL
            .into_iter()
            .find(|item_type| item_type.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ItemError::UnknownItemType(s.to_string()))
    }
}

/// A validated cart line, as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    title: String,
    price: Decimal,
    quantity: u32,
    kind: ItemType,
}

impl Item {
    /// Creates a new item, checking title, price and quantity in that order.
    ///
    /// # Errors
    ///
    /// - [`ItemError::InvalidTitle`]: title is blank or too long.
    /// - [`ItemError::InvalidPrice`]: price is below [`MIN_PRICE`].
    /// - [`ItemError::InvalidQuantity`]: quantity is below [`MIN_QUANTITY`].
    pub fn new(
        title: impl Into<String>,
        price: Decimal,
        quantity: u32,
        item_type: ItemType,
    ) -> Result<Self, ItemError> {
        let title = title.into();

        if title.trim().is_empty() || title.chars().count() > MAX_TITLE_LENGTH {
            return Err(ItemError::InvalidTitle(title));
        }

        if price < MIN_PRICE {
            return Err(ItemError::InvalidPrice(price));
        }

        if quantity < MIN_QUANTITY {
            return Err(ItemError::InvalidQuantity(quantity));
        }

        Ok(Self {
            title,
            price,
            quantity,
            kind: item_type,
        })
    }

    /// Returns the title of the item
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the unit price of the item
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the quantity of the item
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the type of the item
    pub fn item_type(&self) -> ItemType {
        self.kind
    }
}
