use super::aliases::fuel_mix as alias;
use super::{items, number_or_zero, text};
use crate::models::fuel::FuelType;
use crate::models::generation::{FuelMix, FuelMixEntry};
use crate::models::region::RegionScope;
use serde_json::Value;

const UNKNOWN_FUEL: &str = "Unknown";

/// Aggregates per-state fuel rows into one value per fuel type.
///
/// The upstream ignores the region parameter, so rows are filtered here:
/// the whole-market scope keeps every row, a region keeps only its own
/// state. Labels are grouped after case-insensitive canonicalization.
pub fn normalize_fuel_mix(raw: &Value, scope: RegionScope) -> FuelMix {
    let mut groups: Vec<FuelMixEntry> = Vec::new();

    for row in items(raw) {
        if let RegionScope::Region(region) = scope {
            if text(row, alias::STATE).as_deref() != Some(region.id()) {
                continue;
            }
        }

        let label = text(row, alias::FUEL_TYPE).unwrap_or_else(|| UNKNOWN_FUEL.to_string());
        let fuel_type = FuelType::canonical_label(&label).into_owned();
        let value = number_or_zero(row, alias::VALUE);

        match groups.iter_mut().find(|g| g.fuel_type == fuel_type) {
            Some(group) => group.aggregate_value += value,
            None => groups.push(FuelMixEntry {
                fuel_type,
                aggregate_value: value,
            }),
        }
    }

    groups.retain(|g| g.aggregate_value > 0.0);
    // Stable: equal values keep first-seen order.
    groups.sort_by(|a, b| b.aggregate_value.total_cmp(&a.aggregate_value));
    FuelMix::new(groups)
}
