use super::error::AppError;
use serde::{Deserialize, Serialize};

/// Whole-market identifier accepted wherever a region scope is expected.
pub const NEM_SENTINEL: &str = "NEM";

/// Balancing regions of the National Electricity Market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    #[serde(rename = "NSW1")]
    Nsw1,
    #[serde(rename = "QLD1")]
    Qld1,
    #[serde(rename = "VIC1")]
    Vic1,
    #[serde(rename = "SA1")]
    Sa1,
    #[serde(rename = "TAS1")]
    Tas1,
}

impl Region {
    /// Returns the identifier used by the upstream API.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Nsw1 => "NSW1",
            Self::Qld1 => "QLD1",
            Self::Vic1 => "VIC1",
            Self::Sa1 => "SA1",
            Self::Tas1 => "TAS1",
        }
    }

    /// Returns the short state label shown in the UI.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Nsw1 => "NSW",
            Self::Qld1 => "QLD",
            Self::Vic1 => "VIC",
            Self::Sa1 => "SA",
            Self::Tas1 => "TAS",
        }
    }

    /// Display colour for multi-region charts.
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Nsw1 => "#4A90D9",
            Self::Qld1 => "#E74C3C",
            Self::Vic1 => "#2ECC71",
            Self::Sa1 => "#F39C12",
            Self::Tas1 => "#9B59B6",
        }
    }

    /// All regions, in canonical order.
    pub const fn all() -> &'static [Self] {
        &[Self::Nsw1, Self::Qld1, Self::Vic1, Self::Sa1, Self::Tas1]
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|r| r.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::ConfigError(format!("Invalid region: {s}")))
    }
}

/// Either a single region or the whole-market aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RegionScope {
    #[default]
    Nem,
    Region(Region),
}

impl RegionScope {
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Nem => NEM_SENTINEL,
            Self::Region(region) => region.id(),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Nem => NEM_SENTINEL,
            Self::Region(region) => region.label(),
        }
    }

    pub const fn color(&self) -> &'static str {
        match self {
            Self::Nem => "#FFFFFF",
            Self::Region(region) => region.color(),
        }
    }

    /// Whole market first, then each region.
    pub fn all() -> Vec<Self> {
        std::iter::once(Self::Nem)
            .chain(Region::all().iter().copied().map(Self::Region))
            .collect()
    }
}

impl From<Region> for RegionScope {
    fn from(region: Region) -> Self {
        Self::Region(region)
    }
}

impl std::fmt::Display for RegionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for RegionScope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(NEM_SENTINEL) {
            Ok(Self::Nem)
        } else {
            s.parse().map(Self::Region)
        }
    }
}

/// Choice on the price and demand page: a NEM region, or Western
/// Australia, which is served by the WEM market pulse instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceRegion {
    Nem(Region),
    Wa,
}

impl Default for PriceRegion {
    fn default() -> Self {
        Self::Nem(Region::default())
    }
}

impl PriceRegion {
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Nem(region) => region.id(),
            Self::Wa => "WA",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Nem(region) => region.label(),
            Self::Wa => "WA (WEM)",
        }
    }

    pub const fn market(&self) -> Market {
        match self {
            Self::Nem(_) => Market::Nem,
            Self::Wa => Market::Wem,
        }
    }

    pub const fn nem_region(&self) -> Option<Region> {
        match self {
            Self::Nem(region) => Some(*region),
            Self::Wa => None,
        }
    }

    /// NEM regions in canonical order, then WA.
    pub fn all() -> Vec<Self> {
        Region::all()
            .iter()
            .copied()
            .map(Self::Nem)
            .chain(std::iter::once(Self::Wa))
            .collect()
    }
}

impl std::str::FromStr for PriceRegion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("WA") {
            Ok(Self::Wa)
        } else {
            s.parse().map(Self::Nem)
        }
    }
}

/// Sampling interval for price and demand series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeScale {
    #[default]
    FiveMinute,
    ThirtyMinute,
}

impl TimeScale {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::FiveMinute => "5MIN",
            Self::ThirtyMinute => "30MIN",
        }
    }
}

/// Aggregation window for fuel-mix queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FuelMixPeriod {
    #[default]
    Current,
    Day,
    TwoDays,
    ThreeMonths,
    TwelveMonths,
}

impl FuelMixPeriod {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Current => "CURRENT",
            Self::Day => "24H",
            Self::TwoDays => "48H",
            Self::ThreeMonths => "3M",
            Self::TwelveMonths => "12M",
        }
    }

    /// Instantaneous snapshots are power, every other window is energy.
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Current => "MW",
            _ => "MWh",
        }
    }

    pub const fn all() -> &'static [Self] {
        &[
            Self::Current,
            Self::Day,
            Self::TwoDays,
            Self::ThreeMonths,
            Self::TwelveMonths,
        ]
    }
}

/// Granularity of the historical average price endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AverageGranularity {
    Daily,
    Monthly,
    Annual,
}

/// The two markets served by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Market {
    Nem,
    Wem,
}

impl Market {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Nem => "NEM",
            Self::Wem => "WEM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parsing() {
        assert_eq!("NSW1".parse::<Region>().unwrap(), Region::Nsw1);
        assert_eq!("sa1".parse::<Region>().unwrap(), Region::Sa1);
        assert!("WA1".parse::<Region>().is_err());
    }

    #[test]
    fn test_scope_parsing() {
        assert_eq!("NEM".parse::<RegionScope>().unwrap(), RegionScope::Nem);
        assert_eq!(
            "VIC1".parse::<RegionScope>().unwrap(),
            RegionScope::Region(Region::Vic1)
        );
    }

    #[test]
    fn test_scope_all_starts_with_nem() {
        let scopes = RegionScope::all();
        assert_eq!(scopes.len(), 6);
        assert_eq!(scopes[0], RegionScope::Nem);
    }

    #[test]
    fn test_region_serializes_as_upstream_id() {
        let json = serde_json::to_string(&Region::Tas1).unwrap();
        assert_eq!(json, "\"TAS1\"");
    }

    #[test]
    fn test_period_units() {
        assert_eq!(FuelMixPeriod::Current.unit(), "MW");
        assert_eq!(FuelMixPeriod::TwelveMonths.unit(), "MWh");
    }

    #[test]
    fn test_price_region_includes_wa_last() {
        let all = PriceRegion::all();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], PriceRegion::Nem(Region::Nsw1));
        assert_eq!(all[5], PriceRegion::Wa);
        assert_eq!(PriceRegion::Wa.market(), Market::Wem);
        assert_eq!(PriceRegion::Wa.nem_region(), None);
    }

    #[test]
    fn test_price_region_parse() {
        assert_eq!("wa".parse::<PriceRegion>().unwrap(), PriceRegion::Wa);
        assert_eq!(
            "QLD1".parse::<PriceRegion>().unwrap(),
            PriceRegion::Nem(Region::Qld1)
        );
        assert!("NEM".parse::<PriceRegion>().is_err());
    }
}
