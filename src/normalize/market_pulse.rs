use super::aliases::market_pulse as alias;
use super::{items, number, number_or_zero, text_or_empty};
use crate::models::market_pulse::{MarketPulse, MarketPulsePoint};
use serde_json::Value;

/// Maps WEM market pulse rows. Actual-generation fields stay `None` when the
/// interval has not been measured yet instead of collapsing to zero.
pub fn normalize_market_pulse(raw: &Value) -> MarketPulse {
    MarketPulse::new(
        items(raw)
            .iter()
            .map(|row| MarketPulsePoint {
                timestamp: text_or_empty(row, alias::TIMESTAMP),
                price: number_or_zero(row, alias::PRICE),
                forecast_mw: number_or_zero(row, alias::FORECAST_MW),
                actual_generation_mw: number(row, alias::ACTUAL_GENERATION),
                actual_non_scheduled_gen_mw: number(row, alias::ACTUAL_NSG),
                forecast_non_scheduled_gen_mw: number_or_zero(row, alias::FORECAST_NSG),
                real_time_dispatch_generation_mw: number_or_zero(row, alias::RTD_GENERATION),
                total_outage_mw: number_or_zero(row, alias::TOTAL_OUTAGE),
                planned_outage_mw: number_or_zero(row, alias::PLANNED_OUTAGE),
                forced_outage_mw: number_or_zero(row, alias::FORCED_OUTAGE),
            })
            .collect(),
    )
}
