//! Ticket Example
//!
//! Prices a cart and prints its ticket. Without arguments the sample cart
//! below is used; pass `--fixture <path>` to load a YAML cart instead and
//! `--style boxed` for the boxed table.
//!
//! Run with: `cargo run --example ticket -- --fixture fixtures/carts/sample.yml`

use std::io;

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use till::{
    cart::Cart,
    fixtures::CartFixture,
    items::ItemType,
    utils::{ExampleCartArgs, TicketStyle},
};

/// Ticket Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = ExampleCartArgs::parse();

    let cart = match &args.fixture {
        Some(path) => CartFixture::from_path(path)?.into_cart()?,
        None => sample_cart()?,
    };

    match args.style {
        TicketStyle::Plain => println!("{}", cart.format_ticket()?),
        TicketStyle::Boxed if cart.is_empty() => println!("{}", cart.format_ticket()?),
        TicketStyle::Boxed => cart.receipt()?.write_to(io::stdout().lock())?,
    }

    Ok(())
}

fn sample_cart() -> Result<Cart> {
    let mut cart = Cart::new();

    cart.add_item("Apple", Decimal::new(99, 2), 5, ItemType::New)?;
    cart.add_item("Banana", Decimal::new(20_00, 2), 4, ItemType::SecondFree)?;
    cart.add_item("A long piece of toilet paper", Decimal::new(17_20, 2), 1, ItemType::Sale)?;
    cart.add_item("Nails", Decimal::new(2_00, 2), 500, ItemType::Regular)?;

    Ok(cart)
}
