use serde::Serialize;

/// Average spot price for one region over a day, month or year.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AveragePricePoint {
    /// `2025-01-13`, `2025-01` or `2025` depending on granularity.
    pub period: String,
    pub region_id: String,
    pub avg_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_price: Option<f64>,
}

/// Points belonging to one region, keeping upstream order.
pub fn for_region<'a>(
    points: &'a [AveragePricePoint],
    region_id: &'a str,
) -> impl Iterator<Item = &'a AveragePricePoint> + 'a {
    points.iter().filter(move |p| p.region_id == region_id)
}
