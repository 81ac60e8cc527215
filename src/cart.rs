//! Cart state and intents.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::cart_total;

/// One product line in the shopping cart.
///
/// `name` and `image_url` are a display snapshot captured when the line was
/// added; they are never re-fetched from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Identifier of the referenced product.
    pub product_id: u32,

    /// Product display name, captured at add time.
    pub name: String,

    /// Product image URL, captured at add time.
    pub image_url: String,

    /// Base unit price. Non-negative.
    pub price: Decimal,

    /// Override price. When present this is the price actually charged per
    /// unit. The name suggests a reference price, but the observed behavior
    /// (and the sample catalog, where this value is often *higher* than
    /// `price`) makes it the effective charged price; that inversion is
    /// preserved here rather than fixed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Decimal>,

    /// Number of units. Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// The price actually charged per unit: `discount_price` when present,
    /// else `price`.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.discount_price.unwrap_or(self.price)
    }

    /// The effective price multiplied by the quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.effective_price() * Decimal::from(self.quantity)
    }
}

/// The full cart aggregate: lines in insertion order plus the derived total.
///
/// The total always equals the recomputation over `items`; it is never
/// patched incrementally. Construction goes through [`CartState::empty`],
/// [`CartState::from_lines`] or [`apply`], which keeps both invariants
/// (unique `product_id` per line, `quantity >= 1` after clamping) intact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: Vec<CartLine>,
    total: Decimal,
}

impl CartState {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a cart by folding [`CartIntent::AddItem`] over the given lines.
    ///
    /// Lines sharing a `product_id` are merged, so the uniqueness invariant
    /// holds for any input.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        lines
            .into_iter()
            .fold(Self::empty(), |state, line| apply(state, CartIntent::AddItem(line)))
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// The derived cart total.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Look up the line for a product, if any.
    #[must_use]
    pub fn line(&self, product_id: u32) -> Option<&CartLine> {
        self.items.iter().find(|line| line.product_id == product_id)
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A discrete request to mutate cart state.
#[derive(Debug, Clone, PartialEq)]
pub enum CartIntent {
    /// Add a line; merges quantities when the product is already present.
    AddItem(CartLine),

    /// Set the quantity of an existing line, clamped to a minimum of 1.
    UpdateQuantity {
        /// Product whose line to change.
        product_id: u32,
        /// Requested quantity; values below 1 clamp to 1.
        quantity: i64,
    },

    /// Remove the line for a product, if present.
    RemoveItem {
        /// Product whose line to remove.
        product_id: u32,
    },

    /// Reset to the empty cart.
    Clear,
}

/// Fold one intent into the cart state.
///
/// This is a total function: every intent is valid in every state, and no
/// domain errors exist. Inputs are assumed pre-validated by the caller; the
/// snapshot layer filters malformed persisted entries before they get here.
#[must_use]
pub fn apply(state: CartState, intent: CartIntent) -> CartState {
    let mut items = state.items;

    match intent {
        CartIntent::AddItem(line) => {
            match items.iter_mut().find(|existing| existing.product_id == line.product_id) {
                // The existing snapshot fields win; only the quantity moves.
                Some(existing) => existing.quantity += line.quantity,
                None => items.push(line),
            }
        }
        CartIntent::UpdateQuantity { product_id, quantity } => {
            if let Some(line) = items.iter_mut().find(|line| line.product_id == product_id) {
                line.quantity = clamped_quantity(quantity);
            }
        }
        CartIntent::RemoveItem { product_id } => {
            items.retain(|line| line.product_id != product_id);
        }
        CartIntent::Clear => items.clear(),
    }

    let total = cart_total(&items);

    CartState { items, total }
}

/// Clamp a requested quantity to the `>= 1` invariant.
fn clamped_quantity(requested: i64) -> u32 {
    u32::try_from(requested.max(1)).unwrap_or(u32::MAX)
}
