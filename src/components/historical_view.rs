use chrono::{Datelike, Utc};
use std::collections::BTreeSet;
use yew::prelude::*;

use super::status::{Status, StatusProps};
use crate::hooks::use_market_data::{
    use_annual_average_prices, use_daily_average_prices, use_monthly_average_prices,
};
use crate::models::historical::{AveragePricePoint, for_region};
use crate::models::region::Region;

/// Annual, monthly and daily average prices per region.
#[function_component(HistoricalView)]
pub fn historical_view() -> Html {
    let (year, month) = {
        let now = Utc::now();
        (now.year().to_string(), now.month().to_string())
    };

    let annual = use_annual_average_prices();
    let monthly = use_monthly_average_prices(year.clone(), month.clone());
    let daily = use_daily_average_prices(year.clone(), month.clone());

    html! {
        <div class="page">
            <div class="page-header">
                <h2>{"Historical Prices"}</h2>
                <span class="page-subtitle">{"Average electricity prices over time"}</span>
            </div>

            <div class="card">
                <h3 class="card-title">{"Annual Average Prices"}</h3>
                <Status ..StatusProps::from_state("annual averages", &annual) />
                if let Some(points) = annual.data() {
                    { price_table(points) }
                }
            </div>
            <div class="card">
                <h3 class="card-title">{format!("Monthly Average Prices ({year})")}</h3>
                <Status ..StatusProps::from_state("monthly averages", &monthly) />
                if let Some(points) = monthly.data() {
                    { price_table(points) }
                }
            </div>
            <div class="card">
                <h3 class="card-title">{format!("Daily Average Prices ({year}-{month})")}</h3>
                <Status ..StatusProps::from_state("daily averages", &daily) />
                if let Some(points) = daily.data() {
                    { price_table(points) }
                }
            </div>
        </div>
    }
}

/// One row per period, one column per region.
fn price_table(points: &[AveragePricePoint]) -> Html {
    let periods: BTreeSet<&str> = points.iter().map(|p| p.period.as_str()).collect();
    if periods.is_empty() {
        return html! { <p class="no-data">{"No data available"}</p> };
    }

    let cell = |period: &str, region: Region| -> Html {
        match for_region(points, region.id()).find(|p| p.period == period) {
            Some(p) => html! {
                <td title={p.peak_price.map(|peak| format!("Peak {peak:.2}"))}>
                    {format!("{:.2}", p.avg_price)}
                </td>
            },
            None => html! { <td>{"-"}</td> },
        }
    };

    html! {
        <table class="history-table">
            <thead>
                <tr>
                    <th>{"Period"}</th>
                    { for Region::all().iter().map(|r| html! { <th>{r.label()}</th> }) }
                </tr>
            </thead>
            <tbody>
                { for periods.iter().map(|period| html! {
                    <tr>
                        <td>{period.to_string()}</td>
                        { for Region::all().iter().map(|r| cell(period, *r)) }
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
