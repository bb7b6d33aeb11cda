use serde::Serialize;

/// Live dispatch figures for one NEM region.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    pub region_id: String,
    pub price: f64,
    pub demand: f64,
    /// Always `scheduled_generation + semi_scheduled_generation`.
    pub generation: f64,
    pub net_interchange: f64,
    pub scheduled_generation: f64,
    pub semi_scheduled_generation: f64,
}

impl RegionSummary {
    pub fn new(
        region_id: impl Into<String>,
        price: f64,
        demand: f64,
        net_interchange: f64,
        scheduled_generation: f64,
        semi_scheduled_generation: f64,
    ) -> Self {
        Self {
            region_id: region_id.into(),
            price,
            demand,
            generation: scheduled_generation + semi_scheduled_generation,
            net_interchange,
            scheduled_generation,
            semi_scheduled_generation,
        }
    }

    pub fn price_color(&self) -> &'static str {
        price_band_color(self.price)
    }
}

/// KPI colour band: negative prices red, above $100/MWh amber.
pub fn price_band_color(price: f64) -> &'static str {
    if price < 0.0 {
        "#ef4444"
    } else if price > 100.0 {
        "#f59e0b"
    } else {
        "#22c55e"
    }
}

/// Flow on a transmission link between two regions.
///
/// `mw_flow` keeps the sign used by the reporting region: positive means
/// power moving from `export_region` towards `import_region`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterconnectorFlow {
    pub interconnector_id: String,
    pub export_region: String,
    /// Inferred from the interconnector name; empty when nothing matched.
    pub import_region: String,
    pub mw_flow: f64,
    pub export_limit: f64,
    pub import_limit: f64,
}

impl InterconnectorFlow {
    /// Absolute flow as a percentage of the larger limit. Limits below
    /// 1 MW count as 1 MW.
    pub fn utilisation_pct(&self) -> f64 {
        let limit = self.export_limit.abs().max(self.import_limit.abs()).max(1.0);
        self.mw_flow.abs() / limit * 100.0
    }
}

/// Utilisation colour band: above 90% red, above 70% amber.
pub fn utilisation_color(pct: f64) -> &'static str {
    if pct > 90.0 {
        "#ef4444"
    } else if pct > 70.0 {
        "#f59e0b"
    } else {
        "#22c55e"
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize)]
pub struct MarketSummary {
    pub regions: Vec<RegionSummary>,
    pub interconnectors: Vec<InterconnectorFlow>,
}

impl MarketSummary {
    pub fn region(&self, region_id: &str) -> Option<&RegionSummary> {
        self.regions.iter().find(|r| r.region_id == region_id)
    }

    pub fn interconnector(&self, interconnector_id: &str) -> Option<&InterconnectorFlow> {
        self.interconnectors
            .iter()
            .find(|ic| ic.interconnector_id == interconnector_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_derived() {
        let summary = RegionSummary::new("SA1", -12.5, 1800.0, -200.0, 800.0, 1200.0);
        assert_eq!(summary.generation, 2000.0);
    }

    #[test]
    fn test_price_color_bands() {
        let negative = RegionSummary::new("SA1", -12.5, 0.0, 0.0, 0.0, 0.0);
        let high = RegionSummary::new("NSW1", 150.0, 0.0, 0.0, 0.0, 0.0);
        let normal = RegionSummary::new("VIC1", 45.3, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(negative.price_color(), "#ef4444");
        assert_eq!(high.price_color(), "#f59e0b");
        assert_eq!(normal.price_color(), "#22c55e");
    }

    fn flow(mw_flow: f64, export_limit: f64, import_limit: f64) -> InterconnectorFlow {
        InterconnectorFlow {
            interconnector_id: "VIC1-NSW1".to_string(),
            export_region: "VIC1".to_string(),
            import_region: "NSW1".to_string(),
            mw_flow,
            export_limit,
            import_limit,
        }
    }

    #[test]
    fn test_utilisation_uses_larger_limit() {
        assert_eq!(flow(-500.0, 1000.0, -250.0).utilisation_pct(), 50.0);
        assert_eq!(flow(300.0, 200.0, -400.0).utilisation_pct(), 75.0);
    }

    #[test]
    fn test_utilisation_without_limits() {
        assert_eq!(flow(0.5, 0.0, 0.0).utilisation_pct(), 50.0);
        assert_eq!(flow(0.0, 0.0, 0.0).utilisation_pct(), 0.0);
    }

    #[test]
    fn test_utilisation_color_bands() {
        assert_eq!(utilisation_color(95.0), "#ef4444");
        assert_eq!(utilisation_color(75.0), "#f59e0b");
        assert_eq!(utilisation_color(70.0), "#22c55e");
    }
}
