//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartIntent, CartLine, CartState, apply},
    catalog::{Catalog, CatalogError, NewProduct, Product, ProductUpdate},
    fixtures::{Fixture, FixtureError},
    notify::{Notifier, NullNotifier, RecordingNotifier},
    orders::{Order, OrderBook, OrderError, OrderItem, OrderStatus, shipping_fee},
    pricing::{base_subtotal, cart_total, item_count},
    receipt::{Receipt, ReceiptError},
    reviews::{NewReview, Review, ReviewError, ReviewLog},
    session::CartSession,
    shop::Shop,
    snapshot::{CartLineError, CartSnapshot, hydrate, snapshot_of, validate_line},
    storage::{CartStore, JsonFileStore, MemoryStore, StorageError},
    users::{NewUser, User, UserDirectory, UserError},
};
