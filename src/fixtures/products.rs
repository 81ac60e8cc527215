//! Product Fixtures

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{catalog::NewProduct, fixtures::FixtureError};

/// Top-level products fixture from YAML.
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Product definitions in catalog order.
    pub products: Vec<ProductFixture>,
}

/// A single product definition from YAML.
///
/// Prices and ratings are strings in the fixture files so they parse as exact
/// decimals rather than floats.
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Base price, e.g. "699.99"
    pub price: String,

    /// Optional override price
    #[serde(default)]
    pub discount_price: Option<String>,

    /// Product image URL
    pub image_url: String,

    /// Category name
    pub category: String,

    /// In-stock flag
    #[serde(default = "default_true")]
    pub in_stock: bool,

    /// New-arrival flag
    #[serde(default)]
    pub is_new: bool,

    /// Featured flag
    #[serde(default)]
    pub is_featured: bool,

    /// Average rating, e.g. "4.5"
    #[serde(default)]
    pub rating: Option<String>,

    /// Review count
    #[serde(default)]
    pub review_count: u32,
}

fn default_true() -> bool {
    true
}

/// Parse a fixture price string into a decimal.
///
/// # Errors
///
/// Returns [`FixtureError::InvalidPrice`] when the string is not a decimal.
pub(crate) fn parse_price(raw: &str) -> Result<Decimal, FixtureError> {
    Decimal::from_str(raw.trim()).map_err(|_| FixtureError::InvalidPrice(raw.to_string()))
}

impl TryFrom<ProductFixture> for NewProduct {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let price = parse_price(&fixture.price)?;

        let discount_price = fixture
            .discount_price
            .as_deref()
            .map(parse_price)
            .transpose()?;

        let rating = fixture
            .rating
            .as_deref()
            .map(|raw| {
                Decimal::from_str(raw.trim()).map_err(|_| FixtureError::InvalidRating(raw.to_string()))
            })
            .transpose()?
            .unwrap_or(Decimal::ZERO);

        Ok(NewProduct {
            name: fixture.name,
            description: fixture.description,
            price,
            discount_price,
            image_url: fixture.image_url,
            category: fixture.category,
            in_stock: fixture.in_stock,
            is_new: fixture.is_new,
            is_featured: fixture.is_featured,
            rating,
            review_count: fixture.review_count,
        })
    }
}
