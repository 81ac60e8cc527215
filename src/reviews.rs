//! Reviews
//!
//! Product reviews plus the rating roll-up: creating a review recomputes the
//! product's average rating and review count on the catalog entry.

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError, ProductUpdate};

/// Errors from review operations.
#[derive(Debug, Error, PartialEq)]
pub enum ReviewError {
    /// The reviewed product does not exist.
    #[error("product {0} not found")]
    UnknownProduct(u32),

    /// The rating was outside the 1 to 5 range.
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

impl From<CatalogError> for ReviewError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => ReviewError::UnknownProduct(id),
        }
    }
}

/// A product review.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    /// Serial review id.
    pub id: u32,

    /// The reviewed product.
    pub product_id: u32,

    /// The reviewing user.
    pub user_id: u32,

    /// Star rating, 1 to 5.
    pub rating: u8,

    /// Free-form comment.
    pub comment: String,

    /// Reviewer display name, captured at review time.
    pub username: String,

    /// When the review was written.
    pub created_at: Timestamp,
}

/// Fields for creating a review; the log assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewReview {
    /// The reviewed product.
    pub product_id: u32,

    /// The reviewing user.
    pub user_id: u32,

    /// Star rating, 1 to 5.
    pub rating: u8,

    /// Free-form comment.
    pub comment: String,

    /// Reviewer display name.
    pub username: String,
}

/// In-memory review log.
#[derive(Debug, Default)]
pub struct ReviewLog {
    reviews: Vec<Review>,
    next_id: u32,
}

impl ReviewLog {
    /// Create an empty review log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a review and roll its rating up onto the catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::UnknownProduct`] when the product does not
    /// exist, or [`ReviewError::RatingOutOfRange`] for ratings outside 1..=5.
    pub fn add(&mut self, catalog: &mut Catalog, new: NewReview) -> Result<&Review, ReviewError> {
        if !(1..=5).contains(&new.rating) {
            return Err(ReviewError::RatingOutOfRange(new.rating));
        }

        if catalog.get(new.product_id).is_none() {
            return Err(ReviewError::UnknownProduct(new.product_id));
        }

        self.next_id += 1;
        let product_id = new.product_id;

        self.reviews.push(Review {
            id: self.next_id,
            product_id,
            user_id: new.user_id,
            rating: new.rating,
            comment: new.comment,
            username: new.username,
            created_at: Timestamp::now(),
        });

        let (count, average) = self.rating_summary(product_id);

        catalog.update(
            product_id,
            ProductUpdate {
                rating: Some(average),
                review_count: Some(count),
                ..ProductUpdate::default()
            },
        )?;

        self.reviews.last().ok_or(ReviewError::UnknownProduct(product_id))
    }

    /// Reviews for a product, newest first.
    #[must_use]
    pub fn for_product(&self, product_id: u32) -> Vec<&Review> {
        self.reviews
            .iter()
            .rev()
            .filter(|review| review.product_id == product_id)
            .collect()
    }

    /// Review count and average rating for a product.
    fn rating_summary(&self, product_id: u32) -> (u32, Decimal) {
        let ratings: Vec<u32> = self
            .reviews
            .iter()
            .filter(|review| review.product_id == product_id)
            .map(|review| u32::from(review.rating))
            .collect();

        let count = u32::try_from(ratings.len()).unwrap_or(u32::MAX);

        if count == 0 {
            return (0, Decimal::ZERO);
        }

        let total: u32 = ratings.iter().sum();
        let average = (Decimal::from(total) / Decimal::from(count)).round_dp(2);

        (count, average)
    }
}
