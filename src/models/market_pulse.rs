use serde::Serialize;

/// One trading interval of the WEM market pulse.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPulsePoint {
    pub timestamp: String,
    pub price: f64,
    pub forecast_mw: f64,
    /// `None` until the interval has been measured; a measured zero is `Some(0.0)`.
    pub actual_generation_mw: Option<f64>,
    pub actual_non_scheduled_gen_mw: Option<f64>,
    pub forecast_non_scheduled_gen_mw: f64,
    pub real_time_dispatch_generation_mw: f64,
    pub total_outage_mw: f64,
    pub planned_outage_mw: f64,
    pub forced_outage_mw: f64,
}

impl MarketPulsePoint {
    /// Measured generation when available, otherwise the forecast.
    pub fn best_generation(&self) -> f64 {
        self.actual_generation_mw.unwrap_or(self.forecast_mw)
    }

    pub fn has_actual(&self) -> bool {
        self.actual_generation_mw.is_some()
    }

    /// Measured non-scheduled generation, otherwise its forecast.
    pub fn non_scheduled_generation(&self) -> f64 {
        self.actual_non_scheduled_gen_mw
            .unwrap_or(self.forecast_non_scheduled_gen_mw)
    }
}

/// Parallel columns of a market pulse, ready for charting. Unmeasured
/// intervals stay `None` in `actual_generation` so the line shows a gap.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MarketPulseColumns {
    pub timestamps: Vec<String>,
    pub price: Vec<f64>,
    pub actual_generation: Vec<Option<f64>>,
    pub forecast: Vec<f64>,
    pub non_scheduled: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct MarketPulse {
    points: Vec<MarketPulsePoint>,
}

impl MarketPulse {
    pub fn new(points: Vec<MarketPulsePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[MarketPulsePoint] {
        &self.points
    }

    pub fn columns(&self) -> MarketPulseColumns {
        MarketPulseColumns {
            timestamps: self.points.iter().map(|p| p.timestamp.clone()).collect(),
            price: self.points.iter().map(|p| p.price).collect(),
            actual_generation: self.points.iter().map(|p| p.actual_generation_mw).collect(),
            forecast: self.points.iter().map(|p| p.forecast_mw).collect(),
            non_scheduled: self
                .points
                .iter()
                .map(MarketPulsePoint::non_scheduled_generation)
                .collect(),
        }
    }

    /// Generation of the last interval: measured if available, else forecast.
    pub fn current_generation(&self) -> f64 {
        self.points.last().map_or(0.0, MarketPulsePoint::best_generation)
    }

    /// Mean price over all intervals; 0 when empty.
    pub fn average_price(&self) -> f64 {
        if self.points.is_empty() {
            0.0
        } else {
            self.points.iter().map(|p| p.price).sum::<f64>() / self.points.len() as f64
        }
    }

    pub fn latest_price(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.price)
    }

    /// Generation of the latest measured interval, falling back to the
    /// forecast of the latest interval.
    pub fn latest_demand(&self) -> f64 {
        self.points
            .iter()
            .rev()
            .find_map(|p| p.actual_generation_mw)
            .or_else(|| self.points.last().map(|p| p.forecast_mw))
            .unwrap_or(0.0)
    }
}
