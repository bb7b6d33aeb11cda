use yew::prelude::*;

use super::interconnectors_view::interconnector_table;
use super::kpi_card::KpiCard;
use super::status::{Status, StatusProps};
use crate::hooks::use_market_data::{
    use_elec_summary, use_fuel_mix, use_market_pulse, use_renewable_penetration,
};
use crate::models::generation::FuelMix;
use crate::models::market_pulse::MarketPulse;
use crate::models::region::{FuelMixPeriod, Region, RegionScope};
use crate::models::summary::price_band_color;

/// Live NEM and WEM snapshot: regional prices, interconnectors, fuel mix.
#[function_component(MarketOverview)]
pub fn market_overview() -> Html {
    let summary = use_elec_summary();
    let pulse = use_market_pulse(true);
    let fuel_mix = use_fuel_mix(RegionScope::Nem, FuelMixPeriod::Current, true);
    let renewables = use_renewable_penetration(RegionScope::Nem);

    let Some(summary_data) = summary.data() else {
        return html! { <Status ..StatusProps::from_state("live market data", &summary) /> };
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h2>{"Market Overview"}</h2>
                <span class="page-subtitle">{"Real-time NEM + WEM"}</span>
            </div>

            <div class="summary-grid kpi-grid">
                { for summary_data.regions.iter().map(|r| html! {
                    <KpiCard
                        label={region_label(&r.region_id)}
                        value={r.price}
                        unit="$/MWh"
                        subtitle={AttrValue::from(format!("Demand: {:.0} MW", r.demand))}
                        color={r.price_color()}
                    />
                }) }
                if let Some(wem) = pulse.data() {
                    <KpiCard
                        label="WA (WEM)"
                        value={wem.latest_price()}
                        unit="$/MWh"
                        subtitle={AttrValue::from(format!("Gen: {:.0} MW", wem.latest_demand()))}
                        color={price_band_color(wem.latest_price())}
                    />
                }
                if let Some(snapshot) = renewables.data() {
                    <KpiCard
                        label="NEM Renewables"
                        value={snapshot.current_pct}
                        unit="%"
                        subtitle={AttrValue::from(format!(
                            "Range {:.1}% - {:.1}%",
                            snapshot.min_pct, snapshot.max_pct
                        ))}
                    />
                }
            </div>

            <div class="two-col">
                <div class="card">
                    <h3 class="card-title">{"NEM Interconnector Flows"}</h3>
                    { interconnector_table(summary_data) }
                </div>
                <div class="card">
                    <h3 class="card-title">{"NEM Fuel Mix (Current)"}</h3>
                    <Status ..StatusProps::from_state("fuel mix data", &fuel_mix) />
                    if let Some(mix) = fuel_mix.data() {
                        { fuel_share_grid(mix, FuelMixPeriod::Current.unit()) }
                    }
                </div>
                if let Some(wem) = pulse.data() {
                    <div class="card">
                        <h3 class="card-title">{"WA (WEM) Latest Interval"}</h3>
                        { wem_snapshot(wem) }
                    </div>
                }
            </div>
        </div>
    }
}

fn wem_snapshot(pulse: &MarketPulse) -> Html {
    let Some(latest) = pulse.points().last() else {
        return html! { <p class="no-data">{"No WEM data available"}</p> };
    };
    let generation = if latest.has_actual() {
        format!("{:.0} MW", latest.best_generation())
    } else {
        format!("{:.0} MW (forecast)", latest.best_generation())
    };

    html! {
        <table class="flow-table">
            <tbody>
                <tr><td>{"Interval"}</td><td>{&latest.timestamp}</td></tr>
                <tr><td>{"Generation"}</td><td>{generation}</td></tr>
                <tr><td>{"Forecast"}</td><td>{format!("{:.0} MW", latest.forecast_mw)}</td></tr>
                <tr><td>{"Non-scheduled"}</td><td>{format!("{:.0} MW", latest.non_scheduled_generation())}</td></tr>
                <tr>
                    <td>{"Outages"}</td>
                    <td>{format!(
                        "{:.0} MW ({:.0} planned, {:.0} forced)",
                        latest.total_outage_mw, latest.planned_outage_mw, latest.forced_outage_mw
                    )}</td>
                </tr>
            </tbody>
        </table>
    }
}

/// State label for a region id; unknown ids pass through.
pub(super) fn region_label(region_id: &str) -> AttrValue {
    region_id
        .parse::<Region>()
        .map_or_else(|_| AttrValue::from(region_id.to_string()), |r| AttrValue::Static(r.label()))
}

/// Percentage breakdown with one bar per fuel.
pub fn fuel_share_grid(mix: &FuelMix, unit: &str) -> Html {
    if mix.is_empty() {
        return html! { <p class="no-data">{"No fuel mix data available"}</p> };
    }

    html! {
        <div class="fuel-pct-grid">
            <p class="card-subtitle">{format!("Total: {:.0} {unit}", mix.total())}</p>
            { for mix.entries().iter().zip(mix.shares()).map(|(entry, (_, pct))| html! {
                <div class="fuel-pct-item">
                    <div class="fuel-pct-bar-bg">
                        <div
                            class="fuel-pct-bar-fill"
                            style={format!("width: {pct:.1}%; background-color: {}", entry.color())}
                        />
                    </div>
                    <span class="fuel-pct-label">{&entry.fuel_type}</span>
                    <span class="fuel-pct-value">{format!("{pct:.1}%")}</span>
                </div>
            }) }
        </div>
    }
}
