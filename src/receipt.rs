//! Receipt
//!
//! Renders a cart as a table: one row per line with unit, effective and line
//! prices, followed by a subtotal/total/savings summary. Savings compare the
//! effective total against the base-price subtotal, so they go negative when
//! an override price sits above the base price (which the sample catalog
//! does).

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::CartState,
    pricing::base_subtotal,
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The output sink failed.
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// A printable view over a cart.
#[derive(Debug)]
pub struct Receipt<'a> {
    cart: &'a CartState,
}

impl<'a> Receipt<'a> {
    /// Create a receipt over the given cart.
    #[must_use]
    pub fn new(cart: &'a CartState) -> Self {
        Self { cart }
    }

    /// Cart subtotal at base prices, before any override prices.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        base_subtotal(self.cart.items())
    }

    /// Cart total at effective prices.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    /// Difference between the base subtotal and the effective total.
    #[must_use]
    pub fn savings(&self) -> Decimal {
        self.subtotal() - self.total()
    }

    /// Write the receipt table and summary to the given sink.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if writing to the sink fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Qty", "Unit Price", "Effective", "Line Total"]);

        for line in self.cart.items() {
            builder.push_record([
                line.name.clone(),
                line.quantity.to_string(),
                format_money(line.price),
                format_money(line.effective_price()),
                format_money(line.line_total()),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..5), Alignment::right());

        writeln!(out, "{table}")?;
        writeln!(out, " Subtotal: {}", format_money(self.subtotal()))?;
        writeln!(out, "    Total: {}", format_money(self.total()))?;
        writeln!(out, "  Savings: {}", format_money(self.savings()))?;

        Ok(())
    }
}

/// Render a decimal amount as dollars with two places.
fn format_money(value: Decimal) -> String {
    format!("${value:.2}")
}
