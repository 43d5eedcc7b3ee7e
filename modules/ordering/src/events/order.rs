use crate::entities::order::OrderStatus;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OrderStatusChangedEvent {
    pub order_id: uuid::Uuid,
    pub old_status: OrderStatus,
    pub new_status: OrderStatus,
    pub changed_at: i64,
}

/// Signal for the loyalty subsystem to deduct points earned on a now
/// cancelled order. The deduction itself happens downstream.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoyaltyReversalRequestedEvent {
    pub order_id: uuid::Uuid,
    pub requested_at: i64,
}
