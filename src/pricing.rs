//! Pricing
//!
//! Pure functions over cart lines. Totals are always recomputed from scratch
//! rather than patched incrementally, so they cannot drift from the lines.

use rust_decimal::Decimal;

use crate::cart::CartLine;

/// Calculate the total of a list of cart lines.
///
/// Sums `effective_price * quantity` over every line. The effective price is
/// the discount price when present, else the base price.
#[must_use]
pub fn cart_total(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::line_total).sum()
}

/// Total number of units across all lines.
#[must_use]
pub fn item_count(lines: &[CartLine]) -> u64 {
    lines.iter().map(|line| u64::from(line.quantity)).sum()
}

/// Calculate the subtotal at base prices, ignoring any discount prices.
#[must_use]
pub fn base_subtotal(lines: &[CartLine]) -> Decimal {
    lines
        .iter()
        .map(|line| line.price * Decimal::from(line.quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: u32, price: i64, discount: Option<i64>, quantity: u32) -> CartLine {
        CartLine {
            product_id,
            name: format!("Product {product_id}"),
            image_url: String::new(),
            price: Decimal::from(price),
            discount_price: discount.map(Decimal::from),
            quantity,
        }
    }

    #[test]
    fn total_of_no_lines_is_zero() {
        assert_eq!(cart_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn total_sums_effective_price_times_quantity() {
        let lines = [line(1, 10, None, 2), line(2, 20, Some(15), 1)];

        assert_eq!(cart_total(&lines), Decimal::from(35));
    }

    #[test]
    fn total_uses_discount_price_even_when_higher() {
        // The sample catalog routinely carries discount prices above the base
        // price; the stored override still wins.
        let lines = [line(1, 100, Some(120), 1)];

        assert_eq!(cart_total(&lines), Decimal::from(120));
    }

    #[test]
    fn item_count_sums_quantities() {
        let lines = [line(1, 10, None, 2), line(2, 20, None, 3)];

        assert_eq!(item_count(&lines), 5);
    }

    #[test]
    fn base_subtotal_ignores_discounts() {
        let lines = [line(1, 10, Some(8), 2), line(2, 20, None, 1)];

        assert_eq!(base_subtotal(&lines), Decimal::from(40));
    }
}
