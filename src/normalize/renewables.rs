use super::aliases::renewables as alias;
use super::{items, number_or_zero, text, text_or_empty};
use crate::models::fuel::FuelType;
use crate::models::generation::{FuelSupply, RenewablePenetrationSnapshot};
use serde_json::Value;

/// Builds the renewable penetration snapshot from `Min`/`Max` tagged records.
///
/// Each tag carries the fuel breakdown at the moment the market-wide
/// renewable share was lowest or highest. The `Max` breakdown doubles as the
/// current figure.
pub fn normalize_renewable_penetration(raw: &Value) -> RenewablePenetrationSnapshot {
    let (max_rows, min_rows) = items(raw).iter().fold(
        (Vec::new(), Vec::new()),
        |(mut max_rows, mut min_rows), row| {
            match text(row, alias::RECORD_TYPE) {
                Some(t) if t.eq_ignore_ascii_case("max") => max_rows.push(row),
                Some(t) if t.eq_ignore_ascii_case("min") => min_rows.push(row),
                _ => {}
            }
            (max_rows, min_rows)
        },
    );

    let max_pct = renewable_pct(&max_rows);
    let min_pct = renewable_pct(&min_rows);

    RenewablePenetrationSnapshot {
        current_pct: max_pct,
        min_pct,
        max_pct,
        min_timestamp: first_timestamp(&min_rows),
        max_timestamp: first_timestamp(&max_rows),
        fuel_breakdown: max_rows
            .iter()
            .map(|row| FuelSupply {
                fuel_type: FuelType::canonical_label(&text_or_empty(row, alias::FUEL_TYPE))
                    .into_owned(),
                supply: number_or_zero(row, alias::SUPPLY),
            })
            .collect(),
    }
}

/// Renewable share of total supply, in percent. An empty or all-zero group
/// is 0, never NaN.
pub fn renewable_pct(rows: &[&Value]) -> f64 {
    let (renewable, total) = rows.iter().fold((0.0, 0.0), |(renewable, total), row| {
        let supply = number_or_zero(row, alias::SUPPLY);
        let label = text_or_empty(row, alias::FUEL_TYPE);
        if FuelType::is_renewable(&label) {
            (renewable + supply, total + supply)
        } else {
            (renewable, total + supply)
        }
    });

    if total > 0.0 { renewable / total * 100.0 } else { 0.0 }
}

fn first_timestamp(rows: &[&Value]) -> String {
    rows.first()
        .map(|row| text_or_empty(row, alias::TIMESTAMP))
        .unwrap_or_default()
}
