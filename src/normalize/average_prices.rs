use super::aliases::{Aliases, average_prices as alias};
use super::{items, number, number_or_zero, text_or_empty};
use crate::models::historical::AveragePricePoint;
use crate::models::region::AverageGranularity;
use serde_json::Value;

/// Period key aliases for each granularity.
pub const fn period_aliases(granularity: AverageGranularity) -> Aliases {
    match granularity {
        AverageGranularity::Daily => alias::DAILY_PERIOD,
        AverageGranularity::Monthly => alias::MONTHLY_PERIOD,
        AverageGranularity::Annual => alias::ANNUAL_PERIOD,
    }
}

/// Maps daily, monthly and annual average price rows onto one shape.
///
/// Prices frequently arrive as text (`"78.50"`) and are coerced to numbers.
/// A missing average is 0; a missing peak stays `None`.
pub fn normalize_average_prices(
    raw: &Value,
    granularity: AverageGranularity,
) -> Vec<AveragePricePoint> {
    let period_keys = period_aliases(granularity);
    items(raw)
        .iter()
        .map(|row| AveragePricePoint {
            period: text_or_empty(row, period_keys),
            region_id: text_or_empty(row, alias::REGION_ID),
            avg_price: number_or_zero(row, alias::AVG_PRICE),
            peak_price: number(row, alias::PEAK_PRICE),
        })
        .collect()
}
