use rand::Rng;
use time::PrimitiveDateTime;
use tracing::instrument;
use uuid::Uuid;

use crate::entities::order::{FulfilmentType, Order, OrderStatus, ShippingAddress};
use crate::entities::order_item::OrderItem;
use crate::error::OrderError;
use crate::services::order_status::OrderStatusEngine;
use crate::utils::public_id::generate_public_id;

#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub merchant_id: Uuid,
    pub store_id: Uuid,
    pub items: Vec<NewOrderItem>,
    pub fulfilment: FulfilmentDetails,
    /// Quoted shipping cost; zero for pickup orders.
    pub shipping_cost_cents: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct NewOrderItem {
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub weight_grams: i64,
}

/// Pickup time and shipping address cannot both be absent or both be
/// present; the enum makes the choice structural.
#[derive(Debug, Clone)]
pub enum FulfilmentDetails {
    Pickup { pickup_time: PrimitiveDateTime },
    Shipping { address: ShippingAddress },
}

impl FulfilmentDetails {
    pub fn fulfilment_type(&self) -> FulfilmentType {
        match self {
            FulfilmentDetails::Pickup { .. } => FulfilmentType::Pickup,
            FulfilmentDetails::Shipping { .. } => FulfilmentType::Shipping,
        }
    }
}

impl OrderStatusEngine {
    /// Validates the input, computes totals in integer cents and draws a
    /// free public id through the caller-supplied `is_taken` lookup.
    /// The new order always starts out `Pending`.
    #[instrument(skip_all, fields(merchant = %input.merchant_id, store = %input.store_id))]
    pub fn create_order<R: Rng>(
        &self,
        rng: &mut R,
        input: CreateOrder,
        is_taken: impl Fn(&str) -> bool,
        now: PrimitiveDateTime,
    ) -> Result<(Order, Vec<OrderItem>), OrderError> {
        validate(&input)?;

        let items_total_cents: i64 = input
            .items
            .iter()
            .map(|item| i64::from(item.quantity) * item.unit_price_cents)
            .sum();
        let public_id = generate_public_id(rng, is_taken)?;
        let id = Uuid::new_v4();
        let fulfilment_type = input.fulfilment.fulfilment_type();
        let (shipping_address, pickup_time) = match input.fulfilment {
            FulfilmentDetails::Pickup { pickup_time } => (None, Some(pickup_time)),
            FulfilmentDetails::Shipping { address } => {
                (Some(sqlx::types::Json(address)), None)
            }
        };

        let order = Order {
            id,
            public_id,
            merchant_id: input.merchant_id,
            store_id: input.store_id,
            status: OrderStatus::Pending,
            fulfilment_type,
            items_total_cents,
            shipping_cost_cents: input.shipping_cost_cents,
            total_cents: items_total_cents + input.shipping_cost_cents,
            created_at: now,
            accepted_at: None,
            ready_at: None,
            completed_at: None,
            cancelled_at: None,
            shipping_status: None,
            tracking_code: None,
            tracking_url: None,
            shipping_address,
            pickup_time,
        };
        let items = input
            .items
            .iter()
            .map(|item| OrderItem {
                order_id: id,
                product_id: item.product_id,
                quantity: item.quantity,
                unit_price_cents: item.unit_price_cents,
                weight_grams: item.weight_grams,
            })
            .collect();
        Ok((order, items))
    }
}

fn validate(input: &CreateOrder) -> Result<(), OrderError> {
    let mut problems = Vec::new();
    if input.items.is_empty() {
        problems.push("items".to_string());
    }
    for (index, item) in input.items.iter().enumerate() {
        if item.quantity <= 0 {
            problems.push(format!("items[{index}].quantity"));
        }
        if item.unit_price_cents < 0 {
            problems.push(format!("items[{index}].unit_price_cents"));
        }
        if item.weight_grams < 0 {
            problems.push(format!("items[{index}].weight_grams"));
        }
    }
    if input.shipping_cost_cents < 0 {
        problems.push("shipping_cost_cents".to_string());
    }
    if let FulfilmentDetails::Shipping { address } = &input.fulfilment {
        let fields = [
            ("name", &address.name),
            ("line1", &address.line1),
            ("city", &address.city),
            ("state", &address.state),
            ("postcode", &address.postcode),
            ("country", &address.country),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                problems.push(field.to_string());
            }
        }
    }
    if problems.is_empty() {
        Ok(())
    } else {
        Err(OrderError::Validation(problems))
    }
}
