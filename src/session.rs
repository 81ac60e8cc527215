//! Cart session.
//!
//! The stateful shell around the pure cart reducer. The session owns the one
//! long-lived [`CartState`] for a browsing session, applies intents through
//! [`apply`], persists a snapshot after every mutation and emits confirmation
//! notifications. Both collaborators are injected, never global.

use std::mem;

use rust_decimal::Decimal;
use tracing::warn;

use crate::{
    cart::{CartIntent, CartLine, CartState, apply},
    notify::Notifier,
    pricing::item_count,
    snapshot::{hydrate, snapshot_of},
    storage::CartStore,
};

/// A live shopping cart bound to a store and a notification sink.
///
/// Persistence is synchronous and best-effort: when a save fails the failure
/// is logged and the in-memory state stays authoritative for the rest of the
/// session. Intents never fail.
#[derive(Debug)]
pub struct CartSession<S: CartStore, N: Notifier> {
    state: CartState,
    store: S,
    notifier: N,
}

impl<S: CartStore, N: Notifier> CartSession<S, N> {
    /// Open a session, hydrating from the store.
    ///
    /// An unreadable snapshot is treated the same as an absent one: the
    /// session starts empty and the failure is logged, never surfaced.
    pub fn open(store: S, notifier: N) -> Self {
        let state = match store.load() {
            Ok(Some(snapshot)) => hydrate(&snapshot),
            Ok(None) => CartState::empty(),
            Err(err) => {
                warn!(%err, "failed to load cart snapshot, starting with an empty cart");
                CartState::empty()
            }
        };

        Self {
            state,
            store,
            notifier,
        }
    }

    /// Add a line to the cart and confirm with an "Added to Cart" toast.
    pub fn add_to_cart(&mut self, line: CartLine) {
        let name = line.name.clone();

        self.dispatch(CartIntent::AddItem(line));

        self.notifier
            .notify("Added to Cart", &format!("{name} has been added to your cart."));
    }

    /// Set the quantity of an existing line; values below 1 clamp to 1.
    pub fn update_quantity(&mut self, product_id: u32, quantity: i64) {
        self.dispatch(CartIntent::UpdateQuantity { product_id, quantity });
    }

    /// Remove a line and confirm with an "Item Removed" toast.
    pub fn remove_from_cart(&mut self, product_id: u32) {
        self.dispatch(CartIntent::RemoveItem { product_id });

        self.notifier
            .notify("Item Removed", "Item has been removed from your cart.");
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.dispatch(CartIntent::Clear);
    }

    /// The current cart state.
    #[must_use]
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLine] {
        self.state.items()
    }

    /// The derived cart total.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.state.total()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        item_count(self.state.items())
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    fn dispatch(&mut self, intent: CartIntent) {
        self.state = apply(mem::take(&mut self.state), intent);
        self.persist();
    }

    fn persist(&self) {
        let snapshot = snapshot_of(&self.state);

        if let Err(err) = self.store.save(&snapshot) {
            warn!(%err, "failed to persist cart snapshot, in-memory cart stays authoritative");
        }
    }
}
