//! Shop
//!
//! The aggregated storefront services: catalog, orders, reviews and users in
//! one place, plus the checkout step that ties the cart lifecycle to order
//! placement.

use crate::{
    catalog::Catalog,
    notify::Notifier,
    orders::{Order, OrderBook, OrderError},
    reviews::ReviewLog,
    session::CartSession,
    storage::CartStore,
    users::UserDirectory,
};

/// The full storefront backend surface, in memory.
#[derive(Debug, Default)]
pub struct Shop {
    /// Product catalog.
    pub catalog: Catalog,

    /// Order ledger.
    pub orders: OrderBook,

    /// Review log.
    pub reviews: ReviewLog,

    /// User directory.
    pub users: UserDirectory,
}

impl Shop {
    /// Create an empty shop.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shop around an existing catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Place an order from the session's cart, then clear the cart.
    ///
    /// The cart is cleared only on successful placement; a failed checkout
    /// leaves it untouched.
    ///
    /// # Errors
    ///
    /// Returns an [`OrderError`] when placement fails (for example, on an
    /// empty cart).
    pub fn checkout<S: CartStore, N: Notifier>(
        &mut self,
        session: &mut CartSession<S, N>,
        user_id: u32,
        shipping_address: &str,
    ) -> Result<Order, OrderError> {
        let order = self
            .orders
            .place(user_id, session.state(), shipping_address)?
            .clone();

        session.clear_cart();

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        catalog::NewProduct,
        notify::NullNotifier,
        orders::shipping_fee,
        storage::MemoryStore,
    };

    use super::*;

    fn shop_with_widget() -> (Shop, u32) {
        let mut shop = Shop::new();

        let id = shop
            .catalog
            .create(NewProduct {
                name: "Widget".to_string(),
                description: "A widget".to_string(),
                price: Decimal::from(10),
                discount_price: None,
                image_url: String::new(),
                category: "Tools".to_string(),
                in_stock: true,
                is_new: false,
                is_featured: false,
                rating: Decimal::ZERO,
                review_count: 0,
            })
            .id;

        (shop, id)
    }

    #[test]
    fn checkout_places_an_order_and_clears_the_cart() -> TestResult {
        let (mut shop, id) = shop_with_widget();
        let mut session = CartSession::open(MemoryStore::new(), NullNotifier);

        let line = shop
            .catalog
            .get(id)
            .map(|p| p.to_cart_line(2))
            .ok_or("product should exist")?;

        session.add_to_cart(line);

        let order = shop.checkout(&mut session, 1, "1 Main St")?;

        assert_eq!(order.total_amount, Decimal::from(20) + shipping_fee());
        assert!(session.is_empty());
        assert_eq!(shop.orders.items_of(order.id).len(), 1);

        Ok(())
    }

    #[test]
    fn failed_checkout_leaves_the_cart_untouched() {
        let (mut shop, _) = shop_with_widget();
        let mut session = CartSession::open(MemoryStore::new(), NullNotifier);

        let result = shop.checkout(&mut session, 1, "1 Main St");

        assert!(result.is_err());
        assert!(session.is_empty());
    }
}
