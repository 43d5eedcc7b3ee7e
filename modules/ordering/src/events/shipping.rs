use crate::entities::order::ShippingStatus;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShippingStatusChangedEvent {
    pub order_id: uuid::Uuid,
    pub old_status: Option<ShippingStatus>,
    pub new_status: ShippingStatus,
    pub changed_at: i64,
}
