//! Cart summary
//!
//! Renders a cart as a text table followed by its item count and total.

use std::io;

use rusty_money::iso::Currency;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::Cart,
    pricing::{line_total, to_money},
};

/// Errors that can occur when writing a cart summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// IO error
    #[error("failed to write cart summary")]
    Io(#[from] io::Error),
}

/// Write a summary of `cart` with prices shown in `currency`.
///
/// # Errors
///
/// Returns [`SummaryError::Io`] if writing to `out` fails.
pub fn write_summary(
    mut out: impl io::Write,
    cart: &Cart,
    currency: &Currency,
) -> Result<(), SummaryError> {
    if cart.is_empty() {
        writeln!(out, "Your cart is empty.")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Service", "Maker", "Unit Price", "Qty", "Line Total"]);

    for item in cart {
        builder.push_record([
            item.service_name().to_string(),
            item.maker_name().to_string(),
            to_money(item.price(), currency).to_string(),
            item.quantity().to_string(),
            to_money(line_total(item), currency).to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(
        out,
        " Items: {}  Total: {}",
        cart.item_count(),
        to_money(cart.total(), currency)
    )?;

    Ok(())
}
