//! Product catalog.
//!
//! In-memory catalog service with the same surface as the storefront's
//! product endpoints: list, featured, new arrivals, by category, and
//! admin-gated create/update/delete with serial ids.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::cart::CartLine;

/// Errors from catalog operations.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// No product with the given id exists.
    #[error("product {0} not found")]
    NotFound(u32),
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Serial product id.
    pub id: u32,

    /// Product name.
    pub name: String,

    /// Product description.
    pub description: String,

    /// Base unit price.
    pub price: Decimal,

    /// Override price charged when present. See the note on
    /// [`CartLine::discount_price`] about the inverted naming.
    pub discount_price: Option<Decimal>,

    /// Product image URL.
    pub image_url: String,

    /// Category name.
    pub category: String,

    /// Whether the product is in stock.
    pub in_stock: bool,

    /// Whether the product is flagged as a new arrival.
    pub is_new: bool,

    /// Whether the product is featured on the home page.
    pub is_featured: bool,

    /// Average review rating.
    pub rating: Decimal,

    /// Number of reviews behind the rating.
    pub review_count: u32,
}

impl Product {
    /// Snapshot this product into a cart line with the given quantity.
    ///
    /// This is the add-to-cart bridge: the line captures the display fields
    /// and prices as they are right now and never looks back at the catalog.
    #[must_use]
    pub fn to_cart_line(&self, quantity: u32) -> CartLine {
        CartLine {
            product_id: self.id,
            name: self.name.clone(),
            image_url: self.image_url.clone(),
            price: self.price,
            discount_price: self.discount_price,
            quantity,
        }
    }
}

/// Fields for creating a product; the catalog assigns the id.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Product name.
    pub name: String,

    /// Product description.
    pub description: String,

    /// Base unit price.
    pub price: Decimal,

    /// Optional override price.
    pub discount_price: Option<Decimal>,

    /// Product image URL.
    pub image_url: String,

    /// Category name.
    pub category: String,

    /// Whether the product is in stock.
    pub in_stock: bool,

    /// Whether the product is flagged as a new arrival.
    pub is_new: bool,

    /// Whether the product is featured.
    pub is_featured: bool,

    /// Initial average rating.
    pub rating: Decimal,

    /// Initial review count.
    pub review_count: u32,
}

/// Partial update for a product. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    /// New name.
    pub name: Option<String>,

    /// New description.
    pub description: Option<String>,

    /// New base price.
    pub price: Option<Decimal>,

    /// New override price; the outer `Some` sets the field, including
    /// `Some(None)` to drop an existing override.
    pub discount_price: Option<Option<Decimal>>,

    /// New image URL.
    pub image_url: Option<String>,

    /// New category.
    pub category: Option<String>,

    /// New in-stock flag.
    pub in_stock: Option<bool>,

    /// New new-arrival flag.
    pub is_new: Option<bool>,

    /// New featured flag.
    pub is_featured: Option<bool>,

    /// New average rating.
    pub rating: Option<Decimal>,

    /// New review count.
    pub review_count: Option<u32>,
}

/// In-memory product catalog with serial ids and stable listing order.
#[derive(Debug, Default)]
pub struct Catalog {
    products: FxHashMap<u32, Product>,
    order: Vec<u32>,
    next_id: u32,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All products in creation order.
    #[must_use]
    pub fn all(&self) -> Vec<&Product> {
        self.order
            .iter()
            .filter_map(|id| self.products.get(id))
            .collect()
    }

    /// Products flagged as featured.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.all().into_iter().filter(|p| p.is_featured).collect()
    }

    /// Products flagged as new arrivals.
    #[must_use]
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.all().into_iter().filter(|p| p.is_new).collect()
    }

    /// Products in the given category.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.all()
            .into_iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Create a product, assigning the next serial id.
    pub fn create(&mut self, new: NewProduct) -> &Product {
        self.next_id += 1;
        let id = self.next_id;

        let product = Product {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            discount_price: new.discount_price,
            image_url: new.image_url,
            category: new.category,
            in_stock: new.in_stock,
            is_new: new.is_new,
            is_featured: new.is_featured,
            rating: new.rating,
            review_count: new.review_count,
        };

        self.order.push(id);
        self.products.entry(id).or_insert(product)
    }

    /// Apply a partial update to a product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has the given id.
    pub fn update(&mut self, id: u32, update: ProductUpdate) -> Result<&Product, CatalogError> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or(CatalogError::NotFound(id))?;

        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(description) = update.description {
            product.description = description;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(discount_price) = update.discount_price {
            product.discount_price = discount_price;
        }
        if let Some(image_url) = update.image_url {
            product.image_url = image_url;
        }
        if let Some(category) = update.category {
            product.category = category;
        }
        if let Some(in_stock) = update.in_stock {
            product.in_stock = in_stock;
        }
        if let Some(is_new) = update.is_new {
            product.is_new = is_new;
        }
        if let Some(is_featured) = update.is_featured {
            product.is_featured = is_featured;
        }
        if let Some(rating) = update.rating {
            product.rating = rating;
        }
        if let Some(review_count) = update.review_count {
            product.review_count = review_count;
        }

        Ok(product)
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has the given id.
    pub fn delete(&mut self, id: u32) -> Result<(), CatalogError> {
        self.products
            .remove(&id)
            .ok_or(CatalogError::NotFound(id))?;

        self.order.retain(|existing| *existing != id);

        Ok(())
    }
}
