use tracing::{debug, instrument};
use uuid::Uuid;

use crate::entities::cart::{CartItem, CartTotals, Destination};
use crate::entities::method::ShippingMethod;
use crate::entities::rate::ShippingRate;
use crate::entities::zone::ShippingZone;
use crate::error::QuoteError;
use crate::utils::countries::normalize_country;

/// Zone, method and rate rows the caller has already loaded for a store.
/// The engine only reads them; the stored order of `rates` within a
/// method is the database order and decides first-fit.
#[derive(Debug, Clone, Copy)]
pub struct ShippingCatalog<'a> {
    pub zones: &'a [ShippingZone],
    pub methods: &'a [ShippingMethod],
    pub rates: &'a [ShippingRate],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingOption {
    pub method_id: Uuid,
    pub method_name: String,
    pub zone_id: Uuid,
    pub zone_name: String,
    pub carrier: String,
    pub cost_cents: i64,
    pub delivery_estimate: Option<String>,
}

/// Stateless, read-only quoting over caller-loaded data; safe for
/// unlimited concurrent invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShippingRateEngine;

impl ShippingRateEngine {
    /// Available shipping options for a cart and destination, cheapest
    /// first. No matching zone is a valid outcome of checkout and yields
    /// an empty list, never an error.
    #[instrument(skip_all, fields(merchant = %merchant_id, store = %store_id))]
    pub fn quote(
        &self,
        catalog: ShippingCatalog<'_>,
        merchant_id: Uuid,
        store_id: Uuid,
        items: &[CartItem],
        destination: &Destination,
    ) -> Result<Vec<ShippingOption>, QuoteError> {
        let totals = CartTotals::from_items(items)?;
        let country = normalize_country(&destination.country);

        let mut zones: Vec<&ShippingZone> = catalog
            .zones
            .iter()
            .filter(|zone| {
                zone.is_active && zone.merchant_id == merchant_id && zone.store_id == store_id
            })
            .collect();
        zones.sort_by_key(|zone| std::cmp::Reverse(zone.priority));

        let mut priced: Vec<(i64, i32, ShippingOption)> = Vec::new();
        for zone in zones {
            if !zone.matches_address(&country, &destination.state, &destination.postcode) {
                continue;
            }
            debug!(zone = %zone.id, "zone matched destination");
            let mut methods: Vec<&ShippingMethod> = catalog
                .methods
                .iter()
                .filter(|method| method.is_active && method.zone_id == zone.id)
                .collect();
            methods.sort_by_key(|method| method.display_order);
            for method in methods {
                if let Some(option) = price_method(catalog.rates, zone, method, &totals) {
                    priced.push((option.cost_cents, method.display_order, option));
                }
            }
        }

        // Zone priority orders evaluation only; the returned list is
        // ranked by cost, then display order.
        priced.sort_by_key(|(cost, display_order, _)| (*cost, *display_order));
        Ok(priced.into_iter().map(|(_, _, option)| option).collect())
    }

    /// Same cost computation restricted to one already-known method.
    /// `None` (not an error) when the method is missing or inactive, its
    /// zone row is gone, or no rate applies to this cart.
    #[instrument(skip_all, fields(method = %method_id))]
    pub fn quote_method(
        &self,
        catalog: ShippingCatalog<'_>,
        method_id: Uuid,
        items: &[CartItem],
    ) -> Result<Option<ShippingOption>, QuoteError> {
        let totals = CartTotals::from_items(items)?;
        let Some(method) = catalog.methods.iter().find(|m| m.id == method_id) else {
            return Ok(None);
        };
        if !method.is_active {
            return Ok(None);
        }
        let Some(zone) = catalog.zones.iter().find(|z| z.id == method.zone_id) else {
            return Ok(None);
        };
        Ok(price_method(catalog.rates, zone, method, &totals))
    }
}

/// First active rate (stored order) whose bounds contain the cart wins,
/// even when a later rate would be cheaper.
fn price_method(
    rates: &[ShippingRate],
    zone: &ShippingZone,
    method: &ShippingMethod,
    totals: &CartTotals,
) -> Option<ShippingOption> {
    let rate = rates
        .iter()
        .find(|rate| rate.is_active && rate.method_id == method.id && rate.matches(totals))?;
    let cost_cents = rate.cost_cents(totals)?;
    Some(ShippingOption {
        method_id: method.id,
        method_name: method.name.clone(),
        zone_id: zone.id,
        zone_name: zone.name.clone(),
        carrier: method.carrier.clone(),
        cost_cents,
        delivery_estimate: method.delivery_estimate.clone(),
    })
}
