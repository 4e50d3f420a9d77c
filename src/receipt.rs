//! Receipt
//!
//! A priced snapshot of a cart, rendered either as the fixed-width ticket or
//! as a boxed table for terminals.

use std::io;

use rusty_money::{Money, MoneyError, iso::Currency};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{Alignment as CellAlignment, Style, Theme, object::Columns},
};
use thiserror::Error;

use crate::{
    align::Alignment,
    discounts::format_discount,
    money::{format_money, to_money},
    pricing::{PricedItem, PricingError, subtotal_price, total_price},
    table::TableFormatter,
};

/// Number of columns on a ticket.
pub const TICKET_COLUMNS: usize = 6;

/// Ticket column headings.
pub const TICKET_HEADER: [&str; TICKET_COLUMNS] =
    ["#", "Item", "Price", "Quan.", "Discount", "Total"];

/// Ticket column alignment: the title is left-aligned, everything else right-aligned.
pub const TICKET_ALIGNMENTS: [Alignment; TICKET_COLUMNS] = [
    Alignment::Right,
    Alignment::Left,
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
];

/// One rendered ticket row.
pub type TicketRow = [String; TICKET_COLUMNS];

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error pricing the receipt.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Final receipt for a priced cart.
#[derive(Debug, Clone)]
pub struct Receipt {
    /// One row per item, in cart order
    rows: Vec<TicketRow>,

    /// Item count and grand total
    footer: TicketRow,

    /// Total before discounts
    subtotal: Money<'static, Currency>,

    /// Total after discounts
    total: Money<'static, Currency>,
}

impl Receipt {
    /// Build a receipt from the output of the pricing pass.
    ///
    /// Item totals are rounded for display only; the grand total is the exact
    /// sum, rounded once.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a sum overflows or an amount cannot be
    /// represented as money.
    pub fn from_priced_items(items: &[PricedItem<'_>]) -> Result<Self, PricingError> {
        let rows = items
            .iter()
            .enumerate()
            .map(|(index, priced)| ticket_row(index + 1, priced))
            .collect::<Result<Vec<_>, _>>()?;

        let subtotal = to_money(subtotal_price(items)?)?;
        let total = to_money(total_price(items)?)?;

        let footer = [
            items.len().to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            format_money(&total),
        ];

        Ok(Self {
            rows,
            footer,
            subtotal,
            total,
        })
    }

    /// Item rows
    pub fn rows(&self) -> &[TicketRow] {
        &self.rows
    }

    /// Footer row
    pub fn footer(&self) -> &TicketRow {
        &self.footer
    }

    /// Total cost before any discounts
    pub fn subtotal(&self) -> Money<'static, Currency> {
        self.subtotal
    }

    /// Total amount paid for all items
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// Calculate the savings made by applying discounts.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'static, Currency>, MoneyError> {
        self.subtotal.sub(self.total)
    }

    /// Render the fixed-width ticket.
    pub fn format_table(&self) -> String {
        TableFormatter::new(TICKET_ALIGNMENTS).format_table(
            &self.rows,
            &TICKET_HEADER,
            &self.footer,
        )
    }

    /// Write the receipt as a boxed table followed by a savings summary.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the savings cannot be calculated or writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(TICKET_HEADER);
        for row in &self.rows {
            builder.push_record(row.clone());
        }
        builder.push_record(self.footer.clone());

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);
        if !self.rows.is_empty() {
            theme.insert_horizontal_line(self.rows.len() + 1, separator);
        }

        table.with(theme);
        table.modify(Columns::new(0..1), CellAlignment::right());
        table.modify(Columns::new(2..TICKET_COLUMNS), CellAlignment::right());

        writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)?;

        let savings = self.savings()?;

        for (label, amount) in [
            ("Subtotal:", self.subtotal),
            ("Savings:", savings),
            ("Total:", self.total),
        ] {
            writeln!(out, "{label:>10} {:>12}", format_money(&amount))
                .map_err(|_err| ReceiptError::IO)?;
        }

        Ok(())
    }
}

fn ticket_row(index: usize, priced: &PricedItem<'_>) -> Result<TicketRow, PricingError> {
    let item = priced.item();

    Ok([
        index.to_string(),
        item.title().to_string(),
        format_money(&to_money(item.price())?),
        item.quantity().to_string(),
        format_discount(priced.discount()),
        format_money(&to_money(priced.total())?),
    ])
}
