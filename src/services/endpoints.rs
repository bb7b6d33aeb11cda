use crate::models::region::{FuelMixPeriod, Market, Region, RegionScope, TimeScale};
use std::collections::BTreeMap;

const NEM_DASHBOARD: &str = "/NEM/v1/PWS/NEMDashboard";
const WEM_DASHBOARD: &str = "/WEM/v1/PWS/WEMDashboard";

/// Query-string parameters. One value per key; inserting a key again
/// replaces the earlier value.
pub type QueryParams = BTreeMap<&'static str, String>;

/// Cache identity of a request: upstream path plus its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    pub path: String,
    pub params: Vec<(&'static str, String)>,
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)?;
        for (i, (k, v)) in self.params.iter().enumerate() {
            write!(f, "{}{k}={v}", if i == 0 { '?' } else { '&' })?;
        }
        Ok(())
    }
}

/// The fixed set of dashboard endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ElecSummary,
    PriceAndDemand {
        region: Region,
        time_scale: TimeScale,
    },
    FuelMix {
        scope: RegionScope,
        period: FuelMixPeriod,
    },
    RenewablePenetration {
        scope: RegionScope,
    },
    DailyAveragePrices {
        year: String,
        month: String,
    },
    MonthlyAveragePrices {
        year: String,
        month: String,
    },
    AnnualAveragePrices,
    MarketPulse,
}

impl Endpoint {
    pub const fn market(&self) -> Market {
        match self {
            Self::MarketPulse => Market::Wem,
            _ => Market::Nem,
        }
    }

    /// Path relative to the API prefix.
    pub fn path(&self) -> String {
        let name = match self {
            Self::ElecSummary => "elecSummary",
            Self::PriceAndDemand { .. } => "priceAndDemand",
            Self::FuelMix { .. } => "fuelMix",
            Self::RenewablePenetration { .. } => "renewablePenetration",
            Self::DailyAveragePrices { .. } => "dailyAveragePrices",
            Self::MonthlyAveragePrices { .. } => "monthlyAveragePrices",
            Self::AnnualAveragePrices => "annualAveragePrices",
            Self::MarketPulse => "marketPulse",
        };
        let base = match self.market() {
            Market::Nem => NEM_DASHBOARD,
            Market::Wem => WEM_DASHBOARD,
        };
        format!("{base}/{name}")
    }

    pub fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        match self {
            Self::ElecSummary | Self::AnnualAveragePrices | Self::MarketPulse => {}
            Self::PriceAndDemand { region, time_scale } => {
                params.insert("region", region.id().to_string());
                params.insert("TimeScale", time_scale.code().to_string());
            }
            Self::FuelMix { scope, period } => {
                params.insert("region", scope.id().to_string());
                params.insert("Type", period.code().to_string());
            }
            Self::RenewablePenetration { scope } => {
                params.insert("region", scope.id().to_string());
            }
            Self::DailyAveragePrices { year, month } | Self::MonthlyAveragePrices { year, month } => {
                params.insert("year", year.clone());
                params.insert("month", month.clone());
            }
        }
        params
    }

    pub fn key(&self) -> QueryKey {
        QueryKey {
            path: self.path(),
            params: self.params().into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_namespaced_by_market() {
        assert_eq!(Endpoint::ElecSummary.path(), "/NEM/v1/PWS/NEMDashboard/elecSummary");
        assert_eq!(Endpoint::MarketPulse.path(), "/WEM/v1/PWS/WEMDashboard/marketPulse");
        assert_eq!(Endpoint::MarketPulse.market(), Market::Wem);
    }

    #[test]
    fn test_price_and_demand_params() {
        let endpoint = Endpoint::PriceAndDemand {
            region: Region::Nsw1,
            time_scale: TimeScale::ThirtyMinute,
        };
        let params = endpoint.params();
        assert_eq!(params["region"], "NSW1");
        assert_eq!(params["TimeScale"], "30MIN");
    }

    #[test]
    fn test_fuel_mix_params_use_sentinel() {
        let endpoint = Endpoint::FuelMix {
            scope: RegionScope::Nem,
            period: FuelMixPeriod::TwoDays,
        };
        let params = endpoint.params();
        assert_eq!(params["region"], "NEM");
        assert_eq!(params["Type"], "48H");
    }

    #[test]
    fn test_keys_distinguish_parameters() {
        let a = Endpoint::DailyAveragePrices { year: "2025".into(), month: "01".into() };
        let b = Endpoint::DailyAveragePrices { year: "2025".into(), month: "02".into() };
        assert_ne!(a.key(), b.key());
        assert_eq!(a.key(), a.clone().key());
        assert_eq!(
            a.key().to_string(),
            "/NEM/v1/PWS/NEMDashboard/dailyAveragePrices?month=01&year=2025"
        );
    }
}
