use super::fuel::FuelType;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelMixEntry {
    pub fuel_type: String,
    pub aggregate_value: f64,
}

impl FuelMixEntry {
    pub fn color(&self) -> &'static str {
        FuelType::color_of(&self.fuel_type)
    }
}

/// Generation by fuel type, sorted descending, every value positive.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct FuelMix {
    entries: Vec<FuelMixEntry>,
}

impl FuelMix {
    pub fn new(entries: Vec<FuelMixEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FuelMixEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, fuel_type: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.fuel_type == fuel_type)
            .map(|e| e.aggregate_value)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.aggregate_value).sum()
    }

    /// Percentage of the total supplied by each entry, in entry order.
    pub fn shares(&self) -> Vec<(String, f64)> {
        let total = self.total();
        self.entries
            .iter()
            .map(|e| {
                let pct = if total > 0.0 {
                    e.aggregate_value / total * 100.0
                } else {
                    0.0
                };
                (e.fuel_type.clone(), pct)
            })
            .collect()
    }

    /// Splits into renewable and non-renewable mixes, each keeping the
    /// original order.
    pub fn split_renewable(&self) -> (Self, Self) {
        let (renewable, other) = self
            .entries
            .iter()
            .cloned()
            .partition(|e| FuelType::is_renewable(&e.fuel_type));
        (Self::new(renewable), Self::new(other))
    }

    /// Renewable share of the total, in percent. 0 for an empty mix.
    pub fn renewable_pct(&self) -> f64 {
        let total = self.total();
        if total > 0.0 {
            self.split_renewable().0.total() / total * 100.0
        } else {
            0.0
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelSupply {
    pub fuel_type: String,
    pub supply: f64,
}

/// Market-wide renewable share at its recorded minimum and maximum.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewablePenetrationSnapshot {
    pub current_pct: f64,
    pub min_pct: f64,
    pub max_pct: f64,
    pub min_timestamp: String,
    pub max_timestamp: String,
    pub fuel_breakdown: Vec<FuelSupply>,
}

impl RenewablePenetrationSnapshot {
    /// The record-high breakdown as a fuel mix: supplies summed per label,
    /// non-positive totals dropped, sorted descending.
    pub fn breakdown_mix(&self) -> FuelMix {
        let mut entries: Vec<FuelMixEntry> = Vec::new();
        for supply in &self.fuel_breakdown {
            match entries.iter_mut().find(|e| e.fuel_type == supply.fuel_type) {
                Some(entry) => entry.aggregate_value += supply.supply,
                None => entries.push(FuelMixEntry {
                    fuel_type: supply.fuel_type.clone(),
                    aggregate_value: supply.supply,
                }),
            }
        }
        entries.retain(|e| e.aggregate_value > 0.0);
        entries.sort_by(|a, b| b.aggregate_value.total_cmp(&a.aggregate_value));
        FuelMix::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(fuel_type: &str, value: f64) -> FuelMixEntry {
        FuelMixEntry {
            fuel_type: fuel_type.to_string(),
            aggregate_value: value,
        }
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let mix = FuelMix::new(vec![entry("Black Coal", 750.0), entry("Wind", 250.0)]);
        let shares = mix.shares();
        assert_eq!(shares[0], ("Black Coal".to_string(), 75.0));
        assert_eq!(shares[1], ("Wind".to_string(), 25.0));
    }

    #[test]
    fn test_shares_of_empty_mix() {
        assert!(FuelMix::default().shares().is_empty());
        assert_eq!(FuelMix::default().total(), 0.0);
    }

    #[test]
    fn test_entry_color_from_vocabulary() {
        assert_eq!(entry("wind", 1.0).color(), "#A1D978");
    }

    #[test]
    fn test_split_renewable_keeps_order() {
        let mix = FuelMix::new(vec![
            entry("Black Coal", 5000.0),
            entry("Wind", 1800.0),
            entry("Gas", 700.0),
            entry("Rooftop PV", 500.0),
        ]);

        let (renewable, other) = mix.split_renewable();
        let names = |m: &FuelMix| m.entries().iter().map(|e| e.fuel_type.clone()).collect::<Vec<_>>();
        assert_eq!(names(&renewable), vec!["Wind", "Rooftop PV"]);
        assert_eq!(names(&other), vec!["Black Coal", "Gas"]);
        assert_eq!(mix.renewable_pct(), 2300.0 / 8000.0 * 100.0);
    }

    #[test]
    fn test_renewable_pct_of_empty_mix() {
        assert_eq!(FuelMix::default().renewable_pct(), 0.0);
        let (renewable, other) = FuelMix::default().split_renewable();
        assert!(renewable.is_empty() && other.is_empty());
    }

    #[test]
    fn test_breakdown_mix_aggregates_and_sorts() {
        let supply = |fuel_type: &str, supply: f64| FuelSupply {
            fuel_type: fuel_type.to_string(),
            supply,
        };
        let snapshot = RenewablePenetrationSnapshot {
            fuel_breakdown: vec![
                supply("Wind", 3000.0),
                supply("Solar", 6000.0),
                supply("Wind", 1000.0),
                supply("Battery", 0.0),
            ],
            ..RenewablePenetrationSnapshot::default()
        };

        let mix = snapshot.breakdown_mix();
        assert_eq!(mix.entries().len(), 2);
        assert_eq!(mix.entries()[0].fuel_type, "Solar");
        assert_eq!(mix.get("Wind"), Some(4000.0));
        assert_eq!(mix.get("Battery"), None);
    }
}
