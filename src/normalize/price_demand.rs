use super::aliases::price_demand as alias;
use super::{items, number_or_zero, text_or_empty};
use crate::models::price_demand::{PriceDemandPoint, PriceDemandSeries};
use serde_json::Value;

/// Maps `priceAndDemand` rows one-to-one, keeping upstream order.
pub fn normalize_price_and_demand(raw: &Value) -> PriceDemandSeries {
    PriceDemandSeries::new(
        items(raw)
            .iter()
            .map(|row| PriceDemandPoint {
                timestamp: text_or_empty(row, alias::TIMESTAMP),
                price: number_or_zero(row, alias::PRICE),
                total_demand: number_or_zero(row, alias::TOTAL_DEMAND),
                scheduled_gen: number_or_zero(row, alias::SCHEDULED_GEN),
                semi_scheduled_gen: number_or_zero(row, alias::SEMI_SCHEDULED_GEN),
                net_interchange: number_or_zero(row, alias::NET_INTERCHANGE),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_maps_canonical_fields() {
        let raw = json!({ "data": { "items": [
            { "settlementDate": "2025-01-15T10:00:00", "rrp": 85.42, "totalDemand": 8500,
              "scheduledGeneration": 7200, "semiScheduledGeneration": 1800, "netInterchange": -500 },
        ]}});

        let series = normalize_price_and_demand(&raw);
        let p = &series.points()[0];
        assert_eq!(p.timestamp, "2025-01-15T10:00:00");
        assert_eq!(p.price, 85.42);
        assert_eq!(p.total_demand, 8500.0);
        assert_eq!(p.scheduled_gen, 7200.0);
        assert_eq!(p.semi_scheduled_gen, 1800.0);
        assert_eq!(p.net_interchange, -500.0);
    }

    #[test]
    fn test_alternate_names_and_defaults() {
        let raw = json!({ "data": { "items": [
            { "dt": "2025-01-15T10:30:00", "price": "91.5", "semischeduledGeneration": 40 },
        ]}});

        let p = normalize_price_and_demand(&raw).points()[0].clone();
        assert_eq!(p.timestamp, "2025-01-15T10:30:00");
        assert_eq!(p.price, 91.5);
        assert_eq!(p.semi_scheduled_gen, 40.0);
        assert_eq!(p.total_demand, 0.0);
        assert_eq!(p.net_interchange, 0.0);
    }

    #[test]
    fn test_order_is_not_resorted() {
        let raw = json!({ "data": { "items": [
            { "settlementDate": "2025-01-15T10:10:00", "rrp": 3 },
            { "settlementDate": "2025-01-15T10:00:00", "rrp": 1 },
        ]}});
        let series = normalize_price_and_demand(&raw);
        assert_eq!(series.points()[0].price, 3.0);
        assert_eq!(series.points()[1].price, 1.0);
    }
}
