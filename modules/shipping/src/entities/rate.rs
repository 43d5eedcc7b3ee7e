use uuid::Uuid;

use crate::entities::cart::CartTotals;

/// Tier-matching rule attached to a method. Within a method the first
/// rate (stored order) whose bounds contain the cart wins; the pricing
/// formula is rate data, not engine logic.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShippingRate {
    pub id: Uuid,
    pub method_id: Uuid,
    pub pricing: sqlx::types::Json<PricingModel>,
    pub min_weight_grams: Option<i64>,
    pub max_weight_grams: Option<i64>,
    pub min_total_cents: Option<i64>,
    pub max_total_cents: Option<i64>,
    pub min_items: Option<i32>,
    pub max_items: Option<i32>,
    pub is_active: bool,
}

impl ShippingRate {
    /// Integer bound checks only; an unset bound is open on that side.
    pub fn matches(&self, totals: &CartTotals) -> bool {
        within(self.min_weight_grams, self.max_weight_grams, totals.weight_grams)
            && within(self.min_total_cents, self.max_total_cents, totals.total_cents)
            && within(
                self.min_items.map(i64::from),
                self.max_items.map(i64::from),
                i64::from(totals.item_count),
            )
    }

    pub fn cost_cents(&self, totals: &CartTotals) -> Option<i64> {
        self.pricing.cost_cents(totals)
    }
}

fn within(min: Option<i64>, max: Option<i64>, value: i64) -> bool {
    min.map_or(true, |bound| value >= bound) && max.map_or(true, |bound| value <= bound)
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum PricingModel {
    Flat { cost_cents: i64 },
    WeightTiered { tiers: Vec<CostTier> },
    PriceTiered { tiers: Vec<CostTier> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CostTier {
    pub up_to: i64,
    pub cost_cents: i64,
}

impl PricingModel {
    /// First tier covering the aggregate wins, in stored order. A cart no
    /// tier covers yields no cost, so the method emits no option.
    pub fn cost_cents(&self, totals: &CartTotals) -> Option<i64> {
        match self {
            PricingModel::Flat { cost_cents } => Some(*cost_cents),
            PricingModel::WeightTiered { tiers } => first_fit(tiers, totals.weight_grams),
            PricingModel::PriceTiered { tiers } => first_fit(tiers, totals.total_cents),
        }
    }
}

fn first_fit(tiers: &[CostTier], value: i64) -> Option<i64> {
    tiers
        .iter()
        .find(|tier| value <= tier.up_to)
        .map(|tier| tier.cost_cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(total_cents: i64, weight_grams: i64, item_count: i32) -> CartTotals {
        CartTotals {
            total_cents,
            weight_grams,
            item_count,
        }
    }

    fn flat_rate(cost_cents: i64) -> ShippingRate {
        ShippingRate {
            id: Uuid::new_v4(),
            method_id: Uuid::new_v4(),
            pricing: sqlx::types::Json(PricingModel::Flat { cost_cents }),
            min_weight_grams: None,
            max_weight_grams: None,
            min_total_cents: None,
            max_total_cents: None,
            min_items: None,
            max_items: None,
            is_active: true,
        }
    }

    #[test]
    fn unset_bounds_are_open() {
        let rate = flat_rate(800);
        assert!(rate.matches(&totals(1, 1, 1)));
        assert!(rate.matches(&totals(9_999_999, 9_999_999, 9_999)));
    }

    #[test]
    fn all_three_bounds_must_contain_the_cart() {
        let mut rate = flat_rate(800);
        rate.min_weight_grams = Some(100);
        rate.max_weight_grams = Some(3000);
        rate.min_total_cents = Some(1000);
        rate.max_total_cents = Some(10_000);
        rate.min_items = Some(1);
        rate.max_items = Some(5);

        assert!(rate.matches(&totals(5000, 2000, 3)));
        // Bounds are inclusive on both sides.
        assert!(rate.matches(&totals(1000, 100, 1)));
        assert!(rate.matches(&totals(10_000, 3000, 5)));

        assert!(!rate.matches(&totals(5000, 3001, 3)));
        assert!(!rate.matches(&totals(999, 2000, 3)));
        assert!(!rate.matches(&totals(5000, 2000, 6)));
    }

    #[test]
    fn tiered_pricing_takes_the_first_covering_tier() {
        let pricing = PricingModel::WeightTiered {
            tiers: vec![
                CostTier { up_to: 1000, cost_cents: 500 },
                CostTier { up_to: 5000, cost_cents: 900 },
            ],
        };
        assert_eq!(pricing.cost_cents(&totals(0, 800, 1)), Some(500));
        assert_eq!(pricing.cost_cents(&totals(0, 1000, 1)), Some(500));
        assert_eq!(pricing.cost_cents(&totals(0, 2000, 1)), Some(900));
        // Nothing covers 6kg: no cost, no option.
        assert_eq!(pricing.cost_cents(&totals(0, 6000, 1)), None);
    }

    #[test]
    fn price_tiers_read_the_cart_total() {
        let pricing = PricingModel::PriceTiered {
            tiers: vec![
                CostTier { up_to: 2000, cost_cents: 700 },
                CostTier { up_to: 10_000, cost_cents: 300 },
            ],
        };
        assert_eq!(pricing.cost_cents(&totals(1500, 0, 1)), Some(700));
        assert_eq!(pricing.cost_cents(&totals(9000, 0, 1)), Some(300));
    }

    #[test]
    fn pricing_model_round_trips_through_its_tagged_json_form() -> Result<(), serde_json::Error> {
        let json = r#"{"type":"flat","cost_cents":800}"#;
        let pricing: PricingModel = serde_json::from_str(json)?;
        assert_eq!(pricing, PricingModel::Flat { cost_cents: 800 });

        let tiered = PricingModel::WeightTiered {
            tiers: vec![CostTier { up_to: 1000, cost_cents: 500 }],
        };
        let encoded = serde_json::to_string(&tiered)?;
        assert_eq!(serde_json::from_str::<PricingModel>(&encoded)?, tiered);
        Ok(())
    }
}
