//! Utils

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// How the ticket demo prints a cart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TicketStyle {
    /// Fixed-width ticket with dashed rules
    #[default]
    Plain,

    /// Rounded box table followed by a savings summary
    Boxed,
}

/// Arguments for the ticket example
#[derive(Debug, Parser)]
pub struct ExampleCartArgs {
    /// YAML cart fixture to load instead of the built-in sample cart
    #[clap(short, long)]
    pub fixture: Option<PathBuf>,

    /// Output style
    #[clap(short, long, value_enum, default_value_t = TicketStyle::Plain)]
    pub style: TicketStyle,
}
