use super::generation::FuelMix;
use super::price_demand::PriceDemandSeries;
use std::collections::{BTreeMap, HashMap};

/// One fuel type with both regions' values side by side.
#[derive(Clone, Debug, PartialEq)]
pub struct FuelComparisonRow {
    pub fuel_type: String,
    pub value_a: f64,
    pub value_b: f64,
}

impl FuelComparisonRow {
    fn larger(&self) -> f64 {
        self.value_a.max(self.value_b)
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct FuelMixComparison {
    pub rows: Vec<FuelComparisonRow>,
}

impl FuelMixComparison {
    /// Union of both regions' fuel types, missing values as 0, ordered by
    /// the larger of the two values (ties keep first-seen order).
    pub fn build(a: &FuelMix, b: &FuelMix) -> Self {
        let mut rows: Vec<FuelComparisonRow> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for entry in a.entries() {
            index.insert(&entry.fuel_type, rows.len());
            rows.push(FuelComparisonRow {
                fuel_type: entry.fuel_type.clone(),
                value_a: entry.aggregate_value,
                value_b: 0.0,
            });
        }
        for entry in b.entries() {
            match index.get(entry.fuel_type.as_str()) {
                Some(&i) => rows[i].value_b = entry.aggregate_value,
                None => {
                    index.insert(&entry.fuel_type, rows.len());
                    rows.push(FuelComparisonRow {
                        fuel_type: entry.fuel_type.clone(),
                        value_a: 0.0,
                        value_b: entry.aggregate_value,
                    });
                }
            }
        }

        rows.sort_by(|x, y| y.larger().total_cmp(&x.larger()));
        Self { rows }
    }

    /// Category axis plus the two aligned bar series.
    pub fn series_data(&self) -> (Vec<String>, Vec<f64>, Vec<f64>) {
        let names = self.rows.iter().map(|r| r.fuel_type.clone()).collect();
        let a = self.rows.iter().map(|r| r.value_a).collect();
        let b = self.rows.iter().map(|r| r.value_b).collect();
        (names, a, b)
    }
}

/// Two price/demand series aligned on the union of their timestamps.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PriceDemandComparison {
    pub timestamps: Vec<String>,
    pub price_a: Vec<Option<f64>>,
    pub price_b: Vec<Option<f64>>,
    pub demand_a: Vec<Option<f64>>,
    pub demand_b: Vec<Option<f64>>,
}

impl PriceDemandComparison {
    /// Timestamps ascend; a region without a sample at a timestamp gets `None`.
    pub fn build(a: &PriceDemandSeries, b: &PriceDemandSeries) -> Self {
        let mut aligned: BTreeMap<&str, [Option<(f64, f64)>; 2]> = BTreeMap::new();
        for (side, series) in [a, b].into_iter().enumerate() {
            for point in series.points() {
                aligned.entry(&point.timestamp).or_default()[side] =
                    Some((point.price, point.total_demand));
            }
        }

        let mut out = Self::default();
        for (timestamp, [sample_a, sample_b]) in aligned {
            out.timestamps.push(timestamp.to_string());
            out.price_a.push(sample_a.map(|s| s.0));
            out.demand_a.push(sample_a.map(|s| s.1));
            out.price_b.push(sample_b.map(|s| s.0));
            out.demand_b.push(sample_b.map(|s| s.1));
        }
        out
    }
}

/// Picks the region to compare against. Comparing a region with itself is
/// replaced by the first option that differs from `a`.
pub fn effective_comparison_region<T: PartialEq + Copy>(a: T, b: T, options: &[T]) -> T {
    if a != b {
        return b;
    }
    options.iter().copied().find(|o| *o != a).unwrap_or(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::generation::FuelMixEntry;
    use crate::models::price_demand::PriceDemandPoint;
    use crate::models::region::{Region, RegionScope};

    fn mix(entries: &[(&str, f64)]) -> FuelMix {
        FuelMix::new(
            entries
                .iter()
                .map(|(f, v)| FuelMixEntry {
                    fuel_type: (*f).to_string(),
                    aggregate_value: *v,
                })
                .collect(),
        )
    }

    fn series(points: &[(&str, f64)]) -> PriceDemandSeries {
        PriceDemandSeries::new(
            points
                .iter()
                .map(|(t, p)| PriceDemandPoint {
                    timestamp: (*t).to_string(),
                    price: *p,
                    total_demand: p * 100.0,
                    scheduled_gen: 0.0,
                    semi_scheduled_gen: 0.0,
                    net_interchange: 0.0,
                })
                .collect(),
        )
    }

    #[test]
    fn test_fuel_comparison_unions_categories() {
        let a = mix(&[("Black Coal", 4200.0), ("Solar", 1800.0)]);
        let b = mix(&[("Brown Coal", 3000.0), ("Solar", 2200.0)]);

        let cmp = FuelMixComparison::build(&a, &b);
        let names: Vec<_> = cmp.rows.iter().map(|r| r.fuel_type.as_str()).collect();
        assert_eq!(names, vec!["Black Coal", "Brown Coal", "Solar"]);

        let brown = &cmp.rows[1];
        assert_eq!(brown.value_a, 0.0);
        assert_eq!(brown.value_b, 3000.0);
    }

    #[test]
    fn test_fuel_comparison_orders_by_larger_value() {
        let a = mix(&[("Gas", 100.0), ("Wind", 50.0)]);
        let b = mix(&[("Wind", 900.0)]);

        let cmp = FuelMixComparison::build(&a, &b);
        assert_eq!(cmp.rows[0].fuel_type, "Wind");
        assert_eq!(cmp.rows[0].value_a, 50.0);
        assert_eq!(cmp.rows[0].value_b, 900.0);
        assert_eq!(cmp.rows[1].fuel_type, "Gas");
    }

    #[test]
    fn test_price_comparison_aligns_timestamps() {
        let a = series(&[("2025-01-15T10:05:00", 2.0), ("2025-01-15T10:00:00", 1.0)]);
        let b = series(&[("2025-01-15T10:05:00", 5.0), ("2025-01-15T10:10:00", 6.0)]);

        let cmp = PriceDemandComparison::build(&a, &b);
        assert_eq!(
            cmp.timestamps,
            vec!["2025-01-15T10:00:00", "2025-01-15T10:05:00", "2025-01-15T10:10:00"]
        );
        assert_eq!(cmp.price_a, vec![Some(1.0), Some(2.0), None]);
        assert_eq!(cmp.price_b, vec![None, Some(5.0), Some(6.0)]);
        assert_eq!(cmp.demand_b[2], Some(600.0));
    }

    #[test]
    fn test_effective_region_avoids_self_comparison() {
        let options = RegionScope::all();
        let a = RegionScope::Nem;
        assert_eq!(
            effective_comparison_region(a, RegionScope::Nem, &options),
            RegionScope::Region(Region::Nsw1)
        );
        assert_eq!(
            effective_comparison_region(a, RegionScope::Region(Region::Vic1), &options),
            RegionScope::Region(Region::Vic1)
        );
    }
}
