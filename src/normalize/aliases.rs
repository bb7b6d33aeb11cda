//! Upstream field-name aliases, one table per data domain.
//!
//! The dashboard API reports the same quantity under different keys depending
//! on the endpoint, the granularity or the vintage of the payload. Each list is
//! tried in order and the first non-null field wins.

pub type Aliases = &'static [&'static str];

pub mod summary {
    use super::Aliases;

    pub const REGION_ID: Aliases = &["regionId", "regionid", "region"];
    pub const PRICE: Aliases = &["price", "rrp"];
    pub const DEMAND: Aliases = &["totalDemand", "demand"];
    pub const NET_INTERCHANGE: Aliases = &["netInterchange"];
    pub const SCHEDULED_GENERATION: Aliases = &["scheduledGeneration"];
    pub const SEMI_SCHEDULED_GENERATION: Aliases =
        &["semischeduledGeneration", "semiScheduledGeneration"];
    pub const INTERCONNECTOR_FLOWS: Aliases = &["interconnectorFlows"];

    pub const FLOW_NAME: Aliases = &["name", "interconnectorId"];
    pub const FLOW_VALUE: Aliases = &["value", "mwFlow"];
    pub const FLOW_EXPORT_LIMIT: Aliases = &["exportlimit", "exportLimit"];
    pub const FLOW_IMPORT_LIMIT: Aliases = &["importlimit", "importLimit"];
}

pub mod price_demand {
    use super::Aliases;

    pub const TIMESTAMP: Aliases = &["settlementDate", "dt"];
    pub const PRICE: Aliases = &["rrp", "price"];
    pub const TOTAL_DEMAND: Aliases = &["totalDemand", "demand"];
    pub const SCHEDULED_GEN: Aliases = &["scheduledGeneration", "scheduledGen"];
    pub const SEMI_SCHEDULED_GEN: Aliases = &[
        "semiScheduledGeneration",
        "semischeduledGeneration",
        "semiScheduledGen",
    ];
    pub const NET_INTERCHANGE: Aliases = &["netInterchange"];
}

pub mod fuel_mix {
    use super::Aliases;

    pub const FUEL_TYPE: Aliases = &["fuelType"];
    pub const STATE: Aliases = &["state", "regionId"];
    pub const VALUE: Aliases = &["supply", "value"];
}

pub mod renewables {
    use super::Aliases;

    pub const RECORD_TYPE: Aliases = &["type", "recordType"];
    pub const FUEL_TYPE: Aliases = &["fuelType"];
    pub const SUPPLY: Aliases = &["supply", "value"];
    pub const TIMESTAMP: Aliases = &["dateTime", "dt"];
}

pub mod average_prices {
    use super::Aliases;

    pub const DAILY_PERIOD: Aliases = &["day", "date", "period"];
    pub const MONTHLY_PERIOD: Aliases = &["month", "period"];
    pub const ANNUAL_PERIOD: Aliases = &["year", "period"];
    pub const REGION_ID: Aliases = &["regionId", "region"];
    pub const AVG_PRICE: Aliases = &["avgRrp", "avgPrice"];
    pub const PEAK_PRICE: Aliases = &["peakRrp", "peakPrice"];
}

pub mod market_pulse {
    use super::Aliases;

    pub const TIMESTAMP: Aliases = &["tradingDayInterval", "dt"];
    pub const PRICE: Aliases = &["price"];
    /// The end-of-interval forecast stands in when the primary is missing.
    pub const FORECAST_MW: Aliases = &["forecastMw", "forecastEoiMw"];
    pub const ACTUAL_GENERATION: Aliases = &["actualTotalGeneration"];
    pub const ACTUAL_NSG: Aliases = &["actualNsgMw"];
    pub const FORECAST_NSG: Aliases = &["forecastNsgMw"];
    pub const RTD_GENERATION: Aliases = &["rtdTotalGeneration"];
    pub const TOTAL_OUTAGE: Aliases = &["totalOutageMw"];
    pub const PLANNED_OUTAGE: Aliases = &["plannedOutageMw"];
    pub const FORCED_OUTAGE: Aliases = &["forcedOutageMw"];
}
