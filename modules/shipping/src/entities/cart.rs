use uuid::Uuid;

use crate::error::QuoteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub weight_grams: i64,
}

/// Cart aggregates the rate bounds are checked against. Money in integer
/// cents, weight in integer grams; no floating point anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub total_cents: i64,
    pub weight_grams: i64,
    pub item_count: i32,
}

impl CartTotals {
    /// Rejects malformed carts before any zone matching happens.
    pub fn from_items(items: &[CartItem]) -> Result<Self, QuoteError> {
        if items.is_empty() {
            return Err(QuoteError::EmptyCart);
        }
        let mut totals = CartTotals {
            total_cents: 0,
            weight_grams: 0,
            item_count: 0,
        };
        for (index, item) in items.iter().enumerate() {
            if item.quantity <= 0 {
                return Err(QuoteError::InvalidQuantity { index });
            }
            if item.unit_price_cents < 0 {
                return Err(QuoteError::NegativePrice { index });
            }
            if item.weight_grams < 0 {
                return Err(QuoteError::NegativeWeight { index });
            }
            let quantity = i64::from(item.quantity);
            totals.total_cents += quantity * item.unit_price_cents;
            totals.weight_grams += quantity * item.weight_grams;
            totals.item_count += item.quantity;
        }
        Ok(totals)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Free-form checkout input; normalized to ISO alpha-2 before matching.
    pub country: String,
    pub state: String,
    pub postcode: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i32, unit_price_cents: i64, weight_grams: i64) -> CartItem {
        CartItem {
            product_id: Uuid::new_v4(),
            quantity,
            unit_price_cents,
            weight_grams,
        }
    }

    #[test]
    fn totals_multiply_by_quantity() -> Result<(), QuoteError> {
        let totals = CartTotals::from_items(&[item(2, 1500, 400), item(1, 2000, 1200)])?;
        assert_eq!(totals.total_cents, 5000);
        assert_eq!(totals.weight_grams, 2000);
        assert_eq!(totals.item_count, 3);
        Ok(())
    }

    #[test]
    fn malformed_carts_are_rejected_with_the_offending_index() {
        assert_eq!(CartTotals::from_items(&[]), Err(QuoteError::EmptyCart));
        assert_eq!(
            CartTotals::from_items(&[item(1, 100, 10), item(0, 100, 10)]),
            Err(QuoteError::InvalidQuantity { index: 1 })
        );
        assert_eq!(
            CartTotals::from_items(&[item(1, -100, 10)]),
            Err(QuoteError::NegativePrice { index: 0 })
        );
        assert_eq!(
            CartTotals::from_items(&[item(1, 100, -10)]),
            Err(QuoteError::NegativeWeight { index: 0 })
        );
    }
}
