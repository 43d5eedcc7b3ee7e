/// Quoting only errors on malformed cart data, rejected before any zone
/// matching. "No shipping available" is an empty result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("cart has no items")]
    EmptyCart,
    #[error("cart item {index} has a non-positive quantity")]
    InvalidQuantity { index: usize },
    #[error("cart item {index} has a negative unit price")]
    NegativePrice { index: usize },
    #[error("cart item {index} has a negative weight")]
    NegativeWeight { index: usize },
}
