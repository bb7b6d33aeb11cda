//! One query type per data domain: the endpoint it reads and the normalizer
//! it applies.

use super::endpoints::Endpoint;
use super::query::{Query, QueryOptions};
use crate::models::generation::{FuelMix, RenewablePenetrationSnapshot};
use crate::models::historical::AveragePricePoint;
use crate::models::market_pulse::MarketPulse;
use crate::models::price_demand::PriceDemandSeries;
use crate::models::region::{AverageGranularity, FuelMixPeriod, Region, RegionScope, TimeScale};
use crate::models::summary::MarketSummary;
use crate::normalize;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElecSummaryQuery;

impl Query for ElecSummaryQuery {
    type Output = MarketSummary;

    fn endpoint(&self) -> Endpoint {
        Endpoint::ElecSummary
    }

    fn select(&self, raw: &Value) -> MarketSummary {
        normalize::normalize_summary(raw)
    }

    fn options(&self) -> QueryOptions {
        QueryOptions::live()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceAndDemandQuery {
    pub region: Region,
    pub time_scale: TimeScale,
}

impl Query for PriceAndDemandQuery {
    type Output = PriceDemandSeries;

    fn endpoint(&self) -> Endpoint {
        Endpoint::PriceAndDemand {
            region: self.region,
            time_scale: self.time_scale,
        }
    }

    fn select(&self, raw: &Value) -> PriceDemandSeries {
        normalize::normalize_price_and_demand(raw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FuelMixQuery {
    pub scope: RegionScope,
    pub period: FuelMixPeriod,
}

impl Query for FuelMixQuery {
    type Output = FuelMix;

    fn endpoint(&self) -> Endpoint {
        Endpoint::FuelMix {
            scope: self.scope,
            period: self.period,
        }
    }

    /// Filters by the query's own scope.
    fn select(&self, raw: &Value) -> FuelMix {
        normalize::normalize_fuel_mix(raw, self.scope)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenewablePenetrationQuery {
    pub scope: RegionScope,
}

impl Query for RenewablePenetrationQuery {
    type Output = RenewablePenetrationSnapshot;

    fn endpoint(&self) -> Endpoint {
        Endpoint::RenewablePenetration { scope: self.scope }
    }

    fn select(&self, raw: &Value) -> RenewablePenetrationSnapshot {
        normalize::normalize_renewable_penetration(raw)
    }
}

/// Daily and monthly averages take a year and month; annual takes neither.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AveragePricesQuery {
    pub granularity: AverageGranularity,
    pub year: String,
    pub month: String,
}

impl AveragePricesQuery {
    pub fn daily(year: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            granularity: AverageGranularity::Daily,
            year: year.into(),
            month: month.into(),
        }
    }

    pub fn monthly(year: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            granularity: AverageGranularity::Monthly,
            year: year.into(),
            month: month.into(),
        }
    }

    pub fn annual() -> Self {
        Self {
            granularity: AverageGranularity::Annual,
            year: String::new(),
            month: String::new(),
        }
    }
}

impl Query for AveragePricesQuery {
    type Output = Vec<AveragePricePoint>;

    fn endpoint(&self) -> Endpoint {
        let (year, month) = (self.year.clone(), self.month.clone());
        match self.granularity {
            AverageGranularity::Daily => Endpoint::DailyAveragePrices { year, month },
            AverageGranularity::Monthly => Endpoint::MonthlyAveragePrices { year, month },
            AverageGranularity::Annual => Endpoint::AnnualAveragePrices,
        }
    }

    fn select(&self, raw: &Value) -> Vec<AveragePricePoint> {
        normalize::normalize_average_prices(raw, self.granularity)
    }

    fn options(&self) -> QueryOptions {
        QueryOptions::historical()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarketPulseQuery;

impl Query for MarketPulseQuery {
    type Output = MarketPulse;

    fn endpoint(&self) -> Endpoint {
        Endpoint::MarketPulse
    }

    fn select(&self, raw: &Value) -> MarketPulse {
        normalize::normalize_market_pulse(raw)
    }

    fn options(&self) -> QueryOptions {
        QueryOptions::live()
    }
}
