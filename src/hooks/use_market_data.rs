use yew::prelude::*;

use super::use_query::{QueryState, use_query};
use crate::models::generation::{FuelMix, RenewablePenetrationSnapshot};
use crate::models::historical::AveragePricePoint;
use crate::models::market_pulse::MarketPulse;
use crate::models::price_demand::PriceDemandSeries;
use crate::models::region::{FuelMixPeriod, Region, RegionScope, TimeScale};
use crate::models::summary::MarketSummary;
use crate::services::queries::{
    AveragePricesQuery, ElecSummaryQuery, FuelMixQuery, MarketPulseQuery, PriceAndDemandQuery,
    RenewablePenetrationQuery,
};

#[hook]
pub fn use_elec_summary() -> UseStateHandle<QueryState<MarketSummary>> {
    use_query(ElecSummaryQuery, true)
}

#[hook]
pub fn use_price_and_demand(
    region: Region,
    time_scale: TimeScale,
    enabled: bool,
) -> UseStateHandle<QueryState<PriceDemandSeries>> {
    use_query(PriceAndDemandQuery { region, time_scale }, enabled)
}

#[hook]
pub fn use_fuel_mix(
    scope: RegionScope,
    period: FuelMixPeriod,
    enabled: bool,
) -> UseStateHandle<QueryState<FuelMix>> {
    use_query(FuelMixQuery { scope, period }, enabled)
}

#[hook]
pub fn use_renewable_penetration(
    scope: RegionScope,
) -> UseStateHandle<QueryState<RenewablePenetrationSnapshot>> {
    use_query(RenewablePenetrationQuery { scope }, true)
}

#[hook]
pub fn use_daily_average_prices(
    year: String,
    month: String,
) -> UseStateHandle<QueryState<Vec<AveragePricePoint>>> {
    use_query(AveragePricesQuery::daily(year, month), true)
}

#[hook]
pub fn use_monthly_average_prices(
    year: String,
    month: String,
) -> UseStateHandle<QueryState<Vec<AveragePricePoint>>> {
    use_query(AveragePricesQuery::monthly(year, month), true)
}

#[hook]
pub fn use_annual_average_prices() -> UseStateHandle<QueryState<Vec<AveragePricePoint>>> {
    use_query(AveragePricesQuery::annual(), true)
}

#[hook]
pub fn use_market_pulse(enabled: bool) -> UseStateHandle<QueryState<MarketPulse>> {
    use_query(MarketPulseQuery, enabled)
}
