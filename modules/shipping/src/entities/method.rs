use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShippingMethod {
    pub id: Uuid,
    pub zone_id: Uuid,
    pub name: String,
    pub carrier: String,
    pub service_code: String,
    pub display_order: i32,
    pub delivery_estimate: Option<String>,
    pub is_active: bool,
}
