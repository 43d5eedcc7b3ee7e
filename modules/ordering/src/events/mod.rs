pub mod order;
pub mod shipping;

/// Domain events produced by the engine for the caller to publish.
/// Dispatch is an explicit return value, never an ambient side effect.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OrderEvent {
    StatusChanged(order::OrderStatusChangedEvent),
    LoyaltyReversalRequested(order::LoyaltyReversalRequestedEvent),
    ShippingStatusChanged(shipping::ShippingStatusChangedEvent),
}
