//! Fixtures
//!
//! Carts described in YAML:
//!
//! ```yaml
//! items:
//!   - title: Apple
//!     price: "0.99"
//!     quantity: 5
//!     type: new
//! ```

use std::{fs, path::Path};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    items::{ItemError, ItemType},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format (item position, price text)
    #[error("Invalid price format for item {0}: {1:?}")]
    InvalidPrice(usize, String),

    /// An item failed validation (item position)
    #[error("Invalid item {position}: {source}")]
    InvalidItem {
        /// 1-based position of the item in the fixture
        position: usize,

        /// Validation failure
        #[source]
        source: ItemError,
    },

    /// Cart error other than item validation
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Wrapper for cart items in YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Items, in ticket order
    pub items: Vec<ItemFixture>,
}

/// Item Fixture
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Item title
    pub title: String,

    /// Unit price (e.g., "0.99")
    pub price: String,

    /// Quantity
    pub quantity: u32,

    /// Item type name (e.g., "second-free")
    #[serde(rename = "type")]
    pub item_type: String,
}

impl CartFixture {
    /// Parse a fixture from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Load a fixture from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Build a cart, adding each item through [`Cart::add_item`].
    ///
    /// # Errors
    ///
    /// Returns an error naming the first item whose price, type or fields are invalid.
    pub fn into_cart(self) -> Result<Cart, FixtureError> {
        let mut cart = Cart::new();

        for (position, fixture) in (1..).zip(self.items) {
            let price = fixture
                .price
                .trim()
                .parse::<Decimal>()
                .map_err(|_err| FixtureError::InvalidPrice(position, fixture.price.clone()))?;

            let item_type = fixture
                .item_type
                .parse::<ItemType>()
                .map_err(|source| FixtureError::InvalidItem { position, source })?;

            cart.add_item(fixture.title, price, fixture.quantity, item_type)
                .map_err(|err| match err {
                    CartError::InvalidItem(source) => FixtureError::InvalidItem { position, source },
                    other @ CartError::Pricing(_) => FixtureError::Cart(other),
                })?;
        }

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use testresult::TestResult;

    use crate::items::Item;

    use super::*;

    const YAML: &str = r#"
items:
  - title: Apple
    price: "0.99"
    quantity: 5
    type: new
  - title: Banana
    price: "20.00"
    quantity: 4
    type: second-free
"#;

    #[test]
    fn from_yaml_parses_items() -> TestResult {
        let fixture = CartFixture::from_yaml(YAML)?;

        assert_eq!(fixture.items.len(), 2);
        assert_eq!(
            fixture.items.first().map(|item| item.item_type.as_str()),
            Some("new")
        );

        Ok(())
    }

    #[test]
    fn into_cart_adds_items_in_order() -> TestResult {
        let cart = CartFixture::from_yaml(YAML)?.into_cart()?;

        let titles: Vec<&str> = cart.items().iter().map(Item::title).collect();

        assert_eq!(titles, ["Apple", "Banana"]);
        assert_eq!(cart.total()?, Decimal::new(44_95, 2));

        Ok(())
    }

    #[test]
    fn from_path_reads_file() -> TestResult {
        let mut file = NamedTempFile::new()?;
        file.write_all(YAML.as_bytes())?;

        let cart = CartFixture::from_path(file.path())?.into_cart()?;

        assert_eq!(cart.len(), 2);

        Ok(())
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let result = CartFixture::from_path("does/not/exist.yml");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let result = CartFixture::from_yaml("items: [title: Apple");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }

    #[test]
    fn invalid_price_text_names_item() -> TestResult {
        let yaml = "items:\n  - {title: Apple, price: cheap, quantity: 1, type: new}\n";

        let result = CartFixture::from_yaml(yaml)?.into_cart();

        assert!(matches!(
            result,
            Err(FixtureError::InvalidPrice(1, ref price)) if price == "cheap"
        ));

        Ok(())
    }

    #[test]
    fn unknown_type_names_item() -> TestResult {
        let yaml = r#"
items:
  - {title: Apple, price: "1.00", quantity: 1, type: new}
  - {title: Pear, price: "1.00", quantity: 1, type: rotten}
"#;

        let result = CartFixture::from_yaml(yaml)?.into_cart();

        assert!(matches!(
            result,
            Err(FixtureError::InvalidItem {
                position: 2,
                source: ItemError::UnknownItemType(_),
            })
        ));

        Ok(())
    }

    #[test]
    fn invalid_item_names_position() -> TestResult {
        let yaml = "items:\n  - {title: Nails, price: '0.009', quantity: 1, type: regular}\n";

        let result = CartFixture::from_yaml(yaml)?.into_cart();

        assert!(matches!(
            result,
            Err(FixtureError::InvalidItem {
                position: 1,
                source: ItemError::InvalidPrice(_),
            })
        ));

        Ok(())
    }
}
