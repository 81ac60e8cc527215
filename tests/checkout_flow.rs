//! Full storefront flow: fixture catalog, cart session, checkout, reviews.

use rust_decimal::Decimal;
use testresult::TestResult;
use storefront::prelude::*;

fn classic_shop() -> Result<Shop, FixtureError> {
    Ok(Shop::with_catalog(Fixture::from_set("classic")?.into_catalog()))
}

#[test]
fn checkout_charges_effective_prices_plus_shipping() -> TestResult {
    let mut shop = classic_shop()?;
    let mut session = CartSession::open(MemoryStore::new(), NullNotifier);

    // The phone carries an override price above its base price; the speaker
    // has none.
    let phone = shop.catalog.get(1).ok_or("phone should exist")?.to_cart_line(1);
    let speaker = shop.catalog.get(5).ok_or("speaker should exist")?.to_cart_line(2);

    session.add_to_cart(phone);
    session.add_to_cart(speaker);

    let expected_cart = Decimal::new(79999, 2) + Decimal::from(2) * Decimal::new(7999, 2);

    assert_eq!(session.total(), expected_cart);

    let order = shop.checkout(&mut session, 1, "1 Main St")?;

    assert_eq!(order.total_amount, expected_cart + shipping_fee());
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(session.is_empty());

    let items = shop.orders.items_of(order.id);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].price, Decimal::new(79999, 2));

    Ok(())
}

#[test]
fn checkout_on_an_empty_cart_is_rejected() -> TestResult {
    let mut shop = classic_shop()?;
    let mut session = CartSession::open(MemoryStore::new(), NullNotifier);

    let result = shop.checkout(&mut session, 1, "1 Main St");

    assert!(matches!(result, Err(OrderError::EmptyCart)));
    assert!(shop.orders.all().is_empty());

    Ok(())
}

#[test]
fn orders_list_newest_first_per_user() -> TestResult {
    let mut shop = classic_shop()?;

    for id in [1, 2, 3] {
        let mut session = CartSession::open(MemoryStore::new(), NullNotifier);
        let lamp = shop.catalog.get(7).ok_or("lamp should exist")?.to_cart_line(id);

        session.add_to_cart(lamp);
        shop.checkout(&mut session, 1, "1 Main St")?;
    }

    let orders = shop.orders.by_user(1);

    assert_eq!(orders.len(), 3);
    assert_eq!(orders[0].id, 3);
    assert_eq!(orders[2].id, 1);

    Ok(())
}

#[test]
fn reviews_roll_up_into_the_product_rating() -> TestResult {
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

    shop.reviews.add(
        &mut shop.catalog,
        NewReview {
            product_id: id,
            user_id: 1,
            rating: 5,
            comment: "Great".to_string(),
            username: "alex".to_string(),
        },
    )?;
    shop.reviews.add(
        &mut shop.catalog,
        NewReview {
            product_id: id,
            user_id: 2,
            rating: 4,
            comment: "Good".to_string(),
            username: "sam".to_string(),
        },
    )?;

    let product = shop.catalog.get(id).ok_or("product should exist")?;

    assert_eq!(product.rating, Decimal::new(45, 1));
    assert_eq!(product.review_count, 2);
    assert_eq!(shop.reviews.for_product(id).len(), 2);

    Ok(())
}

#[test]
fn out_of_range_ratings_and_unknown_products_are_rejected() -> TestResult {
    let mut shop = classic_shop()?;

    let result = shop.reviews.add(
        &mut shop.catalog,
        NewReview {
            product_id: 1,
            user_id: 1,
            rating: 6,
            comment: String::new(),
            username: "alex".to_string(),
        },
    );
    assert!(matches!(result, Err(ReviewError::RatingOutOfRange(6))));

    let result = shop.reviews.add(
        &mut shop.catalog,
        NewReview {
            product_id: 999,
            user_id: 1,
            rating: 3,
            comment: String::new(),
            username: "alex".to_string(),
        },
    );
    assert!(matches!(result, Err(ReviewError::UnknownProduct(999))));

    Ok(())
}

#[test]
fn usernames_are_unique_across_registrations() -> TestResult {
    let mut shop = Shop::new();

    shop.users.create(NewUser {
        username: "alex".to_string(),
        password: "hunter2".to_string(),
        is_admin: false,
    })?;

    let result = shop.users.create(NewUser {
        username: "alex".to_string(),
        password: "other".to_string(),
        is_admin: true,
    });

    assert!(matches!(result, Err(UserError::UsernameTaken(_))));

    Ok(())
}
