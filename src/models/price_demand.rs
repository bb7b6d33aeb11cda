use serde::Serialize;

/// One dispatch interval of regional price and demand.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDemandPoint {
    pub timestamp: String,
    pub price: f64,
    pub total_demand: f64,
    pub scheduled_gen: f64,
    pub semi_scheduled_gen: f64,
    pub net_interchange: f64,
}

/// A price/demand series in upstream chronological order.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct PriceDemandSeries {
    points: Vec<PriceDemandPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceDemandStats {
    pub latest_price: f64,
    pub latest_demand: f64,
    pub avg_price: f64,
    pub price_range: String,
}

impl PriceDemandSeries {
    pub fn new(points: Vec<PriceDemandPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[PriceDemandPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// KPI figures for the page header. An empty series reports zeros.
    pub fn stats(&self) -> PriceDemandStats {
        let Some(latest) = self.points.last() else {
            return PriceDemandStats {
                latest_price: 0.0,
                latest_demand: 0.0,
                avg_price: 0.0,
                price_range: String::new(),
            };
        };

        let prices = self.points.iter().map(|p| p.price);
        let min = prices.clone().fold(f64::INFINITY, f64::min);
        let max = prices.clone().fold(f64::NEG_INFINITY, f64::max);
        let avg = prices.sum::<f64>() / self.points.len() as f64;

        PriceDemandStats {
            latest_price: latest.price,
            latest_demand: latest.total_demand,
            avg_price: avg,
            price_range: format!("${min:.2} - ${max:.2}"),
        }
    }

    /// Timestamps, prices and demand as parallel columns for charting.
    pub fn series_data(&self) -> (Vec<String>, Vec<f64>, Vec<f64>) {
        let timestamps = self.points.iter().map(|p| p.timestamp.clone()).collect();
        let prices = self.points.iter().map(|p| p.price).collect();
        let demand = self.points.iter().map(|p| p.total_demand).collect();
        (timestamps, prices, demand)
    }
}
