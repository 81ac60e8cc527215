//! Orders
//!
//! Order placement and lookup. An order is cut from a cart at checkout: one
//! order item per cart line, priced at the effective price charged at that
//! moment, plus a flat shipping fee on top of the cart total.

use std::fmt;

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use crate::cart::CartState;

/// Flat shipping fee applied to every non-empty order.
#[must_use]
pub fn shipping_fee() -> Decimal {
    Decimal::new(499, 2)
}

/// Errors from order operations.
#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    /// Checkout was attempted with nothing in the cart.
    #[error("cannot place an order from an empty cart")]
    EmptyCart,

    /// No order with the given id exists.
    #[error("order {0} not found")]
    NotFound(u32),
}

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderStatus {
    /// Placed, not yet shipped.
    #[default]
    Pending,

    /// Handed to the carrier.
    Shipped,

    /// Received by the customer.
    Delivered,

    /// Cancelled before fulfilment.
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };

        f.write_str(label)
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Serial order id.
    pub id: u32,

    /// The user who placed the order.
    pub user_id: u32,

    /// Fulfilment status.
    pub status: OrderStatus,

    /// Cart total plus shipping at the moment of placement.
    pub total_amount: Decimal,

    /// Free-form shipping address.
    pub shipping_address: String,

    /// When the order was placed.
    pub created_at: Timestamp,
}

/// One line of a placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// Serial order item id.
    pub id: u32,

    /// The order this line belongs to.
    pub order_id: u32,

    /// The product purchased.
    pub product_id: u32,

    /// Units purchased.
    pub quantity: u32,

    /// Unit price charged (the effective price at checkout).
    pub price: Decimal,
}

/// In-memory order ledger.
#[derive(Debug, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
    items: Vec<OrderItem>,
    next_order_id: u32,
    next_item_id: u32,
}

impl OrderBook {
    /// Create an empty order book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an order from the given cart.
    ///
    /// The order total is the cart total plus the flat shipping fee. Each
    /// cart line becomes one order item at its effective price. Clearing the
    /// cart afterwards is the caller's job (see [`crate::shop::Shop::checkout`]).
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] when the cart has no lines.
    pub fn place(
        &mut self,
        user_id: u32,
        cart: &CartState,
        shipping_address: impl Into<String>,
    ) -> Result<&Order, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        self.next_order_id += 1;
        let order_id = self.next_order_id;
        let total_amount = cart.total() + shipping_fee();

        for line in cart.items() {
            self.next_item_id += 1;

            self.items.push(OrderItem {
                id: self.next_item_id,
                order_id,
                product_id: line.product_id,
                quantity: line.quantity,
                price: line.effective_price(),
            });
        }

        self.orders.push(Order {
            id: order_id,
            user_id,
            status: OrderStatus::default(),
            total_amount,
            shipping_address: shipping_address.into(),
            created_at: Timestamp::now(),
        });

        info!(order_id, user_id, %total_amount, "order placed");

        self.orders.last().ok_or(OrderError::NotFound(order_id))
    }

    /// All orders, newest first.
    #[must_use]
    pub fn all(&self) -> Vec<&Order> {
        self.orders.iter().rev().collect()
    }

    /// Orders placed by a user, newest first.
    #[must_use]
    pub fn by_user(&self, user_id: u32) -> Vec<&Order> {
        self.orders
            .iter()
            .rev()
            .filter(|order| order.user_id == user_id)
            .collect()
    }

    /// Look up an order by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// The items of an order, in cart order.
    #[must_use]
    pub fn items_of(&self, order_id: u32) -> Vec<&OrderItem> {
        self.items
            .iter()
            .filter(|item| item.order_id == order_id)
            .collect()
    }
}
