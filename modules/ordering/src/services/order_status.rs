use time::PrimitiveDateTime;
use tracing::instrument;

use crate::entities::order::{FulfilmentType, Order, OrderStatus, ShippingStatus};
use crate::error::OrderError;
use crate::events::order::{LoyaltyReversalRequestedEvent, OrderStatusChangedEvent};
use crate::events::shipping::ShippingStatusChangedEvent;
use crate::events::OrderEvent;

/// Statuses reachable from each status.
///
/// Backward edges are intentional: staff move mis-advanced orders back to
/// an earlier status instead of cancelling and recreating them. The match
/// is exhaustive so a new status cannot silently end up with zero outgoing
/// transitions.
pub fn allowed_transitions(from: OrderStatus) -> &'static [OrderStatus] {
    use OrderStatus::*;
    match from {
        Pending => &[
            Accepted,
            InProgress,
            Ready,
            Packing,
            Shipped,
            ReadyForPickup,
            Cancelled,
        ],
        Accepted => &[
            Pending,
            InProgress,
            Ready,
            Packing,
            Shipped,
            ReadyForPickup,
            Cancelled,
        ],
        InProgress => &[
            Pending,
            Accepted,
            Ready,
            Packing,
            Shipped,
            ReadyForPickup,
            Cancelled,
        ],
        Ready => &[Accepted, InProgress, Packing, Shipped, Cancelled],
        Packing => &[Pending, Accepted, InProgress, Ready, Shipped],
        Shipped => &[Pending, Accepted, InProgress, Ready, Packing, Delivered],
        ReadyForPickup => &[Pending, Accepted, InProgress, PickedUp],
        Delivered => &[Pending, Accepted, InProgress, Ready, Packing, Shipped],
        PickedUp => &[Pending, Accepted, InProgress, ReadyForPickup],
        Cancelled => &[Pending],
    }
}

/// Optional fields merged into the order on a successful transition,
/// e.g. tracking info attached while moving to `Shipped`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionExtra {
    pub shipping_status: Option<ShippingStatus>,
    pub tracking_code: Option<String>,
    pub tracking_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackingUpdate {
    pub tracking_code: Option<String>,
    pub tracking_url: Option<String>,
}

/// Stateless validator for order lifecycle changes. Takes an order
/// snapshot and returns the updated snapshot plus the events to publish;
/// persistence and event delivery stay with the caller, which must also
/// serialize concurrent transitions on the same order.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderStatusEngine;

impl OrderStatusEngine {
    #[instrument(skip_all, fields(order = %order.id, from = ?order.status, to = ?new_status))]
    pub fn transition(
        &self,
        order: &Order,
        new_status: OrderStatus,
        extra: TransitionExtra,
        now: PrimitiveDateTime,
    ) -> Result<(Order, Vec<OrderEvent>), OrderError> {
        // Re-requesting the current status is an idempotent no-op.
        if new_status == order.status {
            return Ok((order.clone(), Vec::new()));
        }
        if !allowed_transitions(order.status).contains(&new_status) {
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to: new_status,
            });
        }
        match new_status {
            OrderStatus::Packing if order.fulfilment_type != FulfilmentType::Shipping => {
                return Err(OrderError::FulfilmentMismatch {
                    status: new_status,
                    fulfilment: order.fulfilment_type,
                });
            }
            OrderStatus::ReadyForPickup if order.fulfilment_type != FulfilmentType::Pickup => {
                return Err(OrderError::FulfilmentMismatch {
                    status: new_status,
                    fulfilment: order.fulfilment_type,
                });
            }
            _ => {}
        }

        let old_status = order.status;
        let mut updated = order.clone();
        if extra.shipping_status.is_some() {
            updated.shipping_status = extra.shipping_status;
        }
        if let Some(code) = extra.tracking_code {
            updated.tracking_code = Some(code);
        }
        if let Some(url) = extra.tracking_url {
            updated.tracking_url = Some(url);
        }
        updated.status = new_status;

        // Lifecycle stamps are write-once: cycling back through earlier
        // statuses and forward again must not move them.
        match new_status {
            OrderStatus::Accepted => stamp(&mut updated.accepted_at, now),
            OrderStatus::Ready | OrderStatus::ReadyForPickup => stamp(&mut updated.ready_at, now),
            OrderStatus::Delivered | OrderStatus::PickedUp => {
                stamp(&mut updated.completed_at, now)
            }
            OrderStatus::Cancelled => stamp(&mut updated.cancelled_at, now),
            _ => {}
        }

        let changed_at = unix_timestamp(now);
        let mut events = vec![OrderEvent::StatusChanged(OrderStatusChangedEvent {
            order_id: order.id,
            old_status,
            new_status,
            changed_at,
        })];
        if new_status == OrderStatus::Cancelled {
            events.push(OrderEvent::LoyaltyReversalRequested(
                LoyaltyReversalRequestedEvent {
                    order_id: order.id,
                    requested_at: changed_at,
                },
            ));
        }
        Ok((updated, events))
    }

    /// Overwrites the shipping sub-state and tracking fields with the
    /// given values. Any value to any value is accepted; the event is
    /// only emitted when the status actually changed.
    #[instrument(skip_all, fields(order = %order.id, to = ?new_status))]
    pub fn update_shipping_status(
        &self,
        order: &Order,
        new_status: ShippingStatus,
        tracking: TrackingUpdate,
        now: PrimitiveDateTime,
    ) -> Result<(Order, Vec<OrderEvent>), OrderError> {
        if order.fulfilment_type != FulfilmentType::Shipping {
            return Err(OrderError::NotAShippingOrder);
        }

        let old_status = order.shipping_status;
        let mut updated = order.clone();
        updated.shipping_status = Some(new_status);
        updated.tracking_code = tracking.tracking_code;
        updated.tracking_url = tracking.tracking_url;

        let mut events = Vec::new();
        if old_status != Some(new_status) {
            events.push(OrderEvent::ShippingStatusChanged(
                ShippingStatusChangedEvent {
                    order_id: order.id,
                    old_status,
                    new_status,
                    changed_at: unix_timestamp(now),
                },
            ));
        }
        Ok((updated, events))
    }
}

fn stamp(slot: &mut Option<PrimitiveDateTime>, now: PrimitiveDateTime) {
    if slot.is_none() {
        *slot = Some(now);
    }
}

pub(crate) fn unix_timestamp(at: PrimitiveDateTime) -> i64 {
    at.assume_utc().unix_timestamp()
}
