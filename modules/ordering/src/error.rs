use crate::entities::order::{FulfilmentType, OrderStatus};

/// Every variant is caller-recoverable and none is retryable as-is;
/// they all indicate a caller-side logic or input problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("invalid order data: {0:?}")]
    Validation(Vec<String>),
    #[error("cannot transition order from {from:?} to {to:?}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
    #[error("status {status:?} is not allowed for a {fulfilment:?} order")]
    FulfilmentMismatch {
        status: OrderStatus,
        fulfilment: FulfilmentType,
    },
    #[error("shipping status update on a pickup order")]
    NotAShippingOrder,
    #[error("no free public order id after {attempts} attempts")]
    IdSpaceExhausted { attempts: u32 },
}
