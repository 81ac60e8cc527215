//! Fixtures
//!
//! Loads product catalog data from YAML files in the `fixtures/products/`
//! directory. The `classic` set carries the storefront's original eight
//! sample products, including the ones whose override price sits above the
//! base price.

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::catalog::Catalog;

pub mod products;

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid rating format
    #[error("Invalid rating format: {0}")]
    InvalidRating(String),
}

/// Catalog fixture loader.
#[derive(Debug)]
pub struct Fixture {
    base_path: PathBuf,
    catalog: Catalog,
}

impl Fixture {
    /// Create an empty fixture with the default base path.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create an empty fixture with a custom base path.
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: Catalog::new(),
        }
    }

    /// Load products from a YAML fixture file into the catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed, or if
    /// a price or rating does not parse as a decimal.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: products::ProductsFixture = serde_norway::from_str(&contents)?;

        for product_fixture in fixture.products {
            let new_product = product_fixture.try_into()?;
            self.catalog.create(new_product);
        }

        Ok(self)
    }

    /// Load a complete fixture set by name.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?;

        Ok(fixture)
    }

    /// The loaded catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Consume the fixture, keeping the loaded catalog.
    #[must_use]
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn classic_set_loads_the_sample_catalog() -> TestResult {
        let fixture = Fixture::from_set("classic")?;
        let catalog = fixture.catalog();

        assert_eq!(catalog.len(), 8);

        let phone = catalog.get(1).ok_or("first product should exist")?;

        assert_eq!(phone.name, "Smartphone X12 Pro");
        assert_eq!(phone.price, Decimal::new(69999, 2));
        // The sample data's override price is above the base price.
        assert_eq!(phone.discount_price, Some(Decimal::new(79999, 2)));

        Ok(())
    }

    #[test]
    fn classic_set_carries_flags_and_ratings() -> TestResult {
        let catalog = Fixture::from_set("classic")?.into_catalog();

        assert_eq!(catalog.featured().len(), 4);
        assert_eq!(catalog.new_arrivals().len(), 5);
        assert_eq!(catalog.by_category("Home").len(), 3);

        let speaker = catalog.get(5).ok_or("speaker should exist")?;

        assert!(speaker.discount_price.is_none());
        assert_eq!(speaker.rating, Decimal::from(4));
        assert_eq!(speaker.review_count, 42);

        Ok(())
    }

    #[test]
    fn missing_fixture_set_is_an_io_error() {
        let result = Fixture::from_set("does-not-exist");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn bad_price_surfaces_as_invalid_price() -> TestResult {
        let dir = tempfile::tempdir()?;
        let products_dir = dir.path().join("products");

        fs::create_dir_all(&products_dir)?;
        fs::write(
            products_dir.join("broken.yml"),
            "products:\n  - name: Thing\n    description: A thing\n    price: \"not a number\"\n    image_url: \"\"\n    category: Misc\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_products("broken");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));

        Ok(())
    }
}
