//! Pricing

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::trace;

use crate::{
    discounts::{calculate_discount, payable_share},
    items::Item,
    money::AmountOutOfRange,
};

/// Errors that can occur while pricing items.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Unit price times quantity overflowed (item title).
    #[error("price of {0:?} overflowed")]
    Overflow(String),

    /// Summing item totals overflowed.
    #[error("total overflowed")]
    TotalOverflow,

    /// An amount could not be converted to money.
    #[error(transparent)]
    Amount(#[from] AmountOutOfRange),
}

/// An item together with its discount and exact total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedItem<'a> {
    item: &'a Item,
    discount: u8,
    subtotal: Decimal,
    total: Decimal,
}

impl<'a> PricedItem<'a> {
    /// The item that was priced
    pub fn item(&self) -> &'a Item {
        self.item
    }

    /// Discount in percent
    pub fn discount(&self) -> u8 {
        self.discount
    }

    /// Undiscounted price: unit price times quantity
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Discounted price, unrounded
    pub fn total(&self) -> Decimal {
        self.total
    }
}

/// Prices one item: `price * quantity * (100 - discount) / 100`.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the undiscounted price does not fit in a [`Decimal`].
pub fn price_item(item: &Item) -> Result<PricedItem<'_>, PricingError> {
    let discount = calculate_discount(item.item_type(), item.quantity());

    let subtotal = item
        .price()
        .checked_mul(Decimal::from(item.quantity()))
        .ok_or_else(|| PricingError::Overflow(item.title().to_string()))?;

    let total = if discount == 0 {
        subtotal
    } else {
        payable_share(discount) * subtotal
    };

    trace!(
        title = item.title(),
        item_type = %item.item_type(),
        quantity = item.quantity(),
        discount,
        %total,
        "priced item"
    );

    Ok(PricedItem {
        item,
        discount,
        subtotal,
        total,
    })
}

/// Calculates the exact total of a list of priced items
///
/// # Errors
///
/// Returns [`PricingError::TotalOverflow`] if the sum does not fit in a [`Decimal`].
pub fn total_price(items: &[PricedItem<'_>]) -> Result<Decimal, PricingError> {
    sum(items.iter().map(PricedItem::total))
}

/// Calculates the undiscounted total of a list of priced items
///
/// # Errors
///
/// Returns [`PricingError::TotalOverflow`] if the sum does not fit in a [`Decimal`].
pub fn subtotal_price(items: &[PricedItem<'_>]) -> Result<Decimal, PricingError> {
    sum(items.iter().map(PricedItem::subtotal))
}

fn sum(mut amounts: impl Iterator<Item = Decimal>) -> Result<Decimal, PricingError> {
    amounts.try_fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount).ok_or(PricingError::TotalOverflow)
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::items::{ItemError, ItemType};

    use super::*;

    fn item(price_cents: i64, quantity: u32, item_type: ItemType) -> Result<Item, ItemError> {
        Item::new("Test", Decimal::new(price_cents, 2), quantity, item_type)
    }

    #[test]
    fn price_item_applies_discount() -> TestResult {
        let banana = item(20_00, 4, ItemType::SecondFree)?;

        let priced = price_item(&banana)?;

        assert_eq!(priced.discount(), 50);
        assert_eq!(priced.subtotal(), Decimal::new(80_00, 2));
        assert_eq!(priced.total(), Decimal::new(40_00, 2));
        assert_eq!(priced.item(), &banana);

        Ok(())
    }

    #[test]
    fn price_item_keeps_fractions_of_a_cent() -> TestResult {
        let paper = item(17_20, 1, ItemType::Sale)?;
        let screw = Item::new("Screw", Decimal::new(333, 3), 1, ItemType::Regular)?;

        assert_eq!(price_item(&paper)?.total(), Decimal::new(516, 2));
        assert_eq!(price_item(&screw)?.total(), Decimal::new(333, 3));

        Ok(())
    }

    #[test]
    fn price_item_reports_overflow() -> TestResult {
        let item = Item::new("Yacht", Decimal::MAX, 2, ItemType::New)?;

        assert_eq!(
            price_item(&item),
            Err(PricingError::Overflow("Yacht".to_string()))
        );

        Ok(())
    }

    #[test]
    fn total_price_sums_exact_totals() -> TestResult {
        let screws = [
            Item::new("Screw", Decimal::new(333, 3), 1, ItemType::Regular)?,
            Item::new("Screw", Decimal::new(333, 3), 1, ItemType::Regular)?,
        ];

        let priced = screws
            .iter()
            .map(price_item)
            .collect::<Result<Vec<_>, _>>()?;

        assert_eq!(total_price(&priced)?, Decimal::new(666, 3));
        assert_eq!(subtotal_price(&priced)?, Decimal::new(666, 3));

        Ok(())
    }

    #[test]
    fn total_and_subtotal_sum_every_line() -> TestResult {
        let items = [
            item(99, 5, ItemType::New)?,
            item(20_00, 4, ItemType::SecondFree)?,
            item(2_00, 500, ItemType::Regular)?,
        ];

        let priced = items
            .iter()
            .map(price_item)
            .collect::<Result<Vec<_>, _>>()?;

        assert_eq!(total_price(&priced)?, Decimal::new(544_95, 2));
        assert_eq!(subtotal_price(&priced)?, Decimal::new(1_084_95, 2));

        Ok(())
    }

    #[test]
    fn total_price_of_nothing_is_zero() -> TestResult {
        assert_eq!(total_price(&[])?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn total_price_reports_overflow() -> TestResult {
        let items = [
            Item::new("Yacht", Decimal::MAX, 1, ItemType::New)?,
            Item::new("Yacht", Decimal::MAX, 1, ItemType::New)?,
        ];

        let priced = items
            .iter()
            .map(price_item)
            .collect::<Result<Vec<_>, _>>()?;

        assert_eq!(total_price(&priced), Err(PricingError::TotalOverflow));

        Ok(())
    }
}
