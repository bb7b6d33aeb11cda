//! Turns raw dashboard payloads into the typed view models in [`crate::models`].
//!
//! Every normalizer is a pure function of the raw JSON: the same input always
//! yields the same output, and a malformed record never fails the whole
//! payload. Missing or renamed fields are resolved through the alias tables in
//! [`aliases`].

pub mod aliases;
pub mod average_prices;
pub mod fuel_mix;
pub mod market_pulse;
pub mod price_demand;
pub mod renewables;
pub mod summary;

pub use average_prices::normalize_average_prices;
pub use fuel_mix::normalize_fuel_mix;
pub use market_pulse::normalize_market_pulse;
pub use price_demand::normalize_price_and_demand;
pub use renewables::normalize_renewable_penetration;
pub use summary::normalize_summary;

use aliases::Aliases;
use serde_json::Value;

/// Rows under `data.<key>`; anything else is treated as no rows.
pub(crate) fn envelope<'a>(raw: &'a Value, key: &str) -> &'a [Value] {
    match raw
        .get("data")
        .and_then(|data| data.get(key))
        .and_then(Value::as_array)
    {
        Some(rows) => rows.as_slice(),
        None => &[],
    }
}

/// Rows of the common `{data:{items:[...]}}` envelope.
pub(crate) fn items(raw: &Value) -> &[Value] {
    envelope(raw, "items")
}

/// First non-null field among the aliases.
pub(crate) fn field<'a>(row: &'a Value, aliases: Aliases) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|key| row.get(*key))
        .find(|value| !value.is_null())
}

/// First alias holding a number, or text that parses as one.
pub(crate) fn number(row: &Value, aliases: Aliases) -> Option<f64> {
    aliases
        .iter()
        .filter_map(|key| row.get(*key))
        .find_map(coerce_number)
}

pub(crate) fn number_or_zero(row: &Value, aliases: Aliases) -> f64 {
    number(row, aliases).unwrap_or(0.0)
}

/// First alias holding text. Numbers are rendered, so a year sent as `2025`
/// still reads as `"2025"`.
pub(crate) fn text(row: &Value, aliases: Aliases) -> Option<String> {
    aliases
        .iter()
        .filter_map(|key| row.get(*key))
        .find_map(|value| match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

pub(crate) fn text_or_empty(row: &Value, aliases: Aliases) -> String {
    text(row, aliases).unwrap_or_default()
}

/// Locale-agnostic numeric coercion: JSON numbers as-is, text parsed with a
/// plain `.` decimal separator. Non-finite results are rejected.
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
