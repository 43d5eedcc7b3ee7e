use time::PrimitiveDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Order {
    pub id: Uuid,
    /// Customer-facing `SF-NNNNN` number, distinct from the database key.
    pub public_id: String,
    pub merchant_id: Uuid,
    pub store_id: Uuid,
    pub status: OrderStatus,
    pub fulfilment_type: FulfilmentType,

    pub items_total_cents: i64,
    pub shipping_cost_cents: i64,
    pub total_cents: i64,

    pub created_at: PrimitiveDateTime,
    pub accepted_at: Option<PrimitiveDateTime>,
    pub ready_at: Option<PrimitiveDateTime>,
    pub completed_at: Option<PrimitiveDateTime>,
    pub cancelled_at: Option<PrimitiveDateTime>,

    pub shipping_status: Option<ShippingStatus>,
    pub tracking_code: Option<String>,
    pub tracking_url: Option<String>,

    pub shipping_address: Option<sqlx::types::Json<ShippingAddress>>,
    pub pickup_time: Option<PrimitiveDateTime>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, serde::Serialize, serde::Deserialize,
)]
#[sqlx(type_name = "shop.order_status", rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Accepted,
    InProgress,
    Ready,
    Packing,
    Shipped,
    ReadyForPickup,
    Delivered,
    PickedUp,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 10] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::InProgress,
        OrderStatus::Ready,
        OrderStatus::Packing,
        OrderStatus::Shipped,
        OrderStatus::ReadyForPickup,
        OrderStatus::Delivered,
        OrderStatus::PickedUp,
        OrderStatus::Cancelled,
    ];
}

/// Fixed for the lifetime of an order; gates which statuses are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, serde::Serialize, serde::Deserialize)]
#[sqlx(type_name = "shop.fulfilment_type", rename_all = "snake_case")]
pub enum FulfilmentType {
    Pickup,
    Shipping,
}

/// Carrier-side sub-state of a shipping order. Independent of
/// [`OrderStatus`]; no transition graph governs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, serde::Serialize, serde::Deserialize)]
#[sqlx(type_name = "shop.shipping_status", rename_all = "snake_case")]
pub enum ShippingStatus {
    InTransit,
    OutForDelivery,
    Delivered,
    Cancelled,
    Returned,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShippingAddress {
    pub name: String,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
}
