//! Storefront
//!
//! Storefront is a small e-commerce domain engine written in Rust. Its core is a
//! client-side shopping cart state machine: a closed set of intents folded by a
//! pure transition function, with snapshot persistence, per-entry validation and
//! fire-and-forget notifications injected at the session boundary. Around the
//! cart it carries the storefront domain the cart collaborates with: a product
//! catalog, order placement, reviews and users, all as in-memory services.

pub mod cart;
pub mod catalog;
pub mod fixtures;
pub mod notify;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod reviews;
pub mod session;
pub mod shop;
pub mod snapshot;
pub mod storage;
pub mod users;
