//! Persisted cart snapshots.
//!
//! The wire format matches the payload the storefront client keeps in browser
//! local storage: a JSON object with camelCase keys, `items` and a stored
//! `total`. Hydration validates entries one at a time, so a single corrupt
//! entry never blocks the rest of the cart, and always recomputes the total
//! instead of trusting the stored one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::cart::{CartLine, CartState};

/// Reasons a persisted cart line is rejected during hydration.
#[derive(Debug, Error, PartialEq)]
pub enum CartLineError {
    /// The entry did not deserialize into a cart line at all.
    #[error("malformed cart line: {0}")]
    Malformed(String),

    /// The persisted quantity was below the minimum of 1.
    #[error("quantity must be at least 1")]
    QuantityBelowMinimum,

    /// The persisted base price was negative.
    #[error("price must not be negative")]
    NegativePrice,

    /// The persisted discount price was negative.
    #[error("discount price must not be negative")]
    NegativeDiscountPrice,
}

/// Raw persisted form of a cart.
///
/// Entries stay as loose JSON values until validated, so deserializing the
/// snapshot itself cannot fail just because one entry is corrupt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Raw line entries, validated individually at hydration time.
    #[serde(default)]
    pub items: Vec<Value>,

    /// The total as persisted. Informational only; hydration recomputes it.
    #[serde(default)]
    pub total: Decimal,
}

/// Build the persisted form of a cart state.
#[must_use]
pub fn snapshot_of(state: &CartState) -> CartSnapshot {
    let items = state
        .items()
        .iter()
        .filter_map(|line| serde_json::to_value(line).ok())
        .collect();

    CartSnapshot {
        items,
        total: state.total(),
    }
}

/// Validate a single raw snapshot entry into a well-formed cart line.
///
/// # Errors
///
/// Returns a [`CartLineError`] describing why the entry was rejected.
pub fn validate_line(raw: &Value) -> Result<CartLine, CartLineError> {
    let line: CartLine = serde_json::from_value(raw.clone())
        .map_err(|err| CartLineError::Malformed(err.to_string()))?;

    if line.quantity < 1 {
        return Err(CartLineError::QuantityBelowMinimum);
    }

    if line.price < Decimal::ZERO {
        return Err(CartLineError::NegativePrice);
    }

    if line.discount_price.is_some_and(|price| price < Decimal::ZERO) {
        return Err(CartLineError::NegativeDiscountPrice);
    }

    Ok(line)
}

/// Rebuild cart state from a persisted snapshot.
///
/// Invalid entries are dropped silently (logged at debug level); the valid
/// remainder is folded through `AddItem` onto the empty state, which also
/// re-establishes the one-line-per-product invariant.
#[must_use]
pub fn hydrate(snapshot: &CartSnapshot) -> CartState {
    let lines = snapshot.items.iter().filter_map(|raw| match validate_line(raw) {
        Ok(line) => Some(line),
        Err(err) => {
            debug!(%err, "dropping invalid persisted cart line");
            None
        }
    });

    CartState::from_lines(lines)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn widget_value() -> Value {
        json!({
            "productId": 1,
            "name": "Widget",
            "imageUrl": "https://example.com/widget.png",
            "price": 10,
            "quantity": 2
        })
    }

    #[test]
    fn validate_accepts_well_formed_line() -> TestResult {
        let line = validate_line(&widget_value())?;

        assert_eq!(line.product_id, 1);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.price, Decimal::from(10));
        assert!(line.discount_price.is_none());

        Ok(())
    }

    #[test]
    fn validate_rejects_zero_quantity() {
        let mut raw = widget_value();
        raw["quantity"] = json!(0);

        assert_eq!(validate_line(&raw), Err(CartLineError::QuantityBelowMinimum));
    }

    #[test]
    fn validate_rejects_negative_price() {
        let mut raw = widget_value();
        raw["price"] = json!(-1);

        assert_eq!(validate_line(&raw), Err(CartLineError::NegativePrice));
    }

    #[test]
    fn validate_rejects_negative_discount_price() {
        let mut raw = widget_value();
        raw["discountPrice"] = json!(-5);

        assert_eq!(validate_line(&raw), Err(CartLineError::NegativeDiscountPrice));
    }

    #[test]
    fn validate_rejects_missing_fields() {
        let raw = json!({ "productId": 1 });

        assert!(matches!(validate_line(&raw), Err(CartLineError::Malformed(_))));
    }

    #[test]
    fn hydrate_drops_invalid_entries_and_keeps_the_rest() {
        let snapshot = CartSnapshot {
            items: vec![
                widget_value(),
                json!("not a cart line"),
                json!({
                    "productId": 2,
                    "name": "Gadget",
                    "imageUrl": "",
                    "price": 20,
                    "discountPrice": 15,
                    "quantity": 1
                }),
            ],
            total: Decimal::ZERO,
        };

        let state = hydrate(&snapshot);

        assert_eq!(state.len(), 2);
        assert_eq!(state.total(), Decimal::from(35));
    }

    #[test]
    fn hydrate_recomputes_total_instead_of_trusting_the_stored_one() {
        let snapshot = CartSnapshot {
            items: vec![widget_value()],
            total: Decimal::from(9999),
        };

        let state = hydrate(&snapshot);

        assert_eq!(state.total(), Decimal::from(20));
    }

    #[test]
    fn round_trip_preserves_state() {
        let state = hydrate(&CartSnapshot {
            items: vec![
                widget_value(),
                json!({
                    "productId": 2,
                    "name": "Gadget",
                    "imageUrl": "",
                    "price": 20,
                    "discountPrice": 15,
                    "quantity": 1
                }),
            ],
            total: Decimal::ZERO,
        });

        let restored = hydrate(&snapshot_of(&state));

        assert_eq!(restored, state);
    }

    #[test]
    fn snapshot_keys_match_the_client_payload() -> TestResult {
        let state = hydrate(&CartSnapshot {
            items: vec![widget_value()],
            total: Decimal::ZERO,
        });

        let encoded = serde_json::to_value(snapshot_of(&state))?;
        let first = encoded["items"][0].clone();

        assert!(first.get("productId").is_some());
        assert!(first.get("imageUrl").is_some());
        assert!(first.get("discountPrice").is_none());

        Ok(())
    }
}
