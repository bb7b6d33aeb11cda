use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::kpi_card::KpiCard;
use super::price_demand_chart::{ChartData, PriceDemandChart};
use super::region_selector::RegionSelector;
use super::status::{Status, StatusProps};
use crate::hooks::use_market_data::{use_market_pulse, use_price_and_demand};
use crate::hooks::use_theme::use_theme;
use crate::models::comparison::{PriceDemandComparison, effective_comparison_region};
use crate::models::market_pulse::MarketPulse;
use crate::models::price_demand::PriceDemandSeries;
use crate::models::region::{PriceRegion, Region, RegionScope, TimeScale};
use crate::models::summary::price_band_color;
use crate::models::theme::Theme;

/// Rows of the aligned comparison table, most recent last.
const TABLE_ROWS: usize = 12;

/// Price and demand KPIs for a NEM region, with an optional side-by-side
/// comparison aligned on timestamps. WA switches to the WEM market pulse,
/// which has no comparison mode.
#[function_component(PriceDemandView)]
pub fn price_demand_view() -> Html {
    let theme = use_theme();
    let source = use_state(PriceRegion::default);
    let region_b = use_state(|| Region::Vic1);
    let time_scale = use_state(TimeScale::default);
    let compare = use_state(|| false);

    let nem_region = source.nem_region();
    let is_wem = nem_region.is_none();
    let region = nem_region.unwrap_or_default();
    let effective_compare = *compare && !is_wem;
    let effective_b = if effective_compare {
        effective_comparison_region(region, *region_b, Region::all())
    } else {
        *region_b
    };

    let series = use_price_and_demand(region, *time_scale, !is_wem);
    let series_b = use_price_and_demand(effective_b, *time_scale, effective_compare);
    let pulse = use_market_pulse(is_wem);
    let dark_mode = theme.effective_theme == Theme::Dark;

    let options_b: Vec<RegionScope> = Region::all()
        .iter()
        .copied()
        .filter(|r| *r != region)
        .map(RegionScope::from)
        .collect();

    let on_source = {
        let source = source.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            match target.value().parse::<PriceRegion>() {
                Ok(choice) => source.set(choice),
                Err(err) => tracing::warn!(error = %err, "ignoring unknown region option"),
            }
        })
    };
    let on_region_b = {
        let region_b = region_b.clone();
        Callback::from(move |scope: RegionScope| {
            if let RegionScope::Region(region) = scope {
                region_b.set(region);
            }
        })
    };
    let on_compare = {
        let compare = compare.clone();
        Callback::from(move |_: Event| compare.set(!*compare))
    };
    let on_time_scale = {
        let time_scale = time_scale.clone();
        Callback::from(move |_: MouseEvent| {
            time_scale.set(match *time_scale {
                TimeScale::FiveMinute => TimeScale::ThirtyMinute,
                TimeScale::ThirtyMinute => TimeScale::FiveMinute,
            });
        })
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h2>{"Price & Demand"}</h2>
                <div class="page-controls">
                    <select class="region-selector" onchange={on_source} aria-label="Select region">
                        { for PriceRegion::all().iter().map(|r| html! {
                            <option value={r.id()} selected={r == &*source}>{r.label()}</option>
                        }) }
                    </select>
                    if !is_wem {
                        <button class="time-scale-toggle" onclick={on_time_scale}>{time_scale.code()}</button>
                    }
                    <label class="compare-toggle">
                        <input type="checkbox" checked={effective_compare} disabled={is_wem} onchange={on_compare} />
                        {"Compare"}
                    </label>
                    if effective_compare {
                        <span class="region-label">{"vs"}</span>
                        <RegionSelector options={options_b} selected={RegionScope::from(effective_b)} on_change={on_region_b} />
                    }
                </div>
            </div>

            if is_wem {
                <Status ..StatusProps::from_state("WEM market data", &pulse) />
                if let Some(wem) = pulse.data() {
                    { wem_cards(wem) }
                    <div class="card">
                        <PriceDemandChart
                            title="WA (WEM) - Price & Generation"
                            data={ChartData::from_market_pulse(wem)}
                            {dark_mode}
                        />
                    </div>
                    <div class="card">
                        <h3 class="card-title">{"Generation & Outages"}</h3>
                        { wem_table(wem) }
                    </div>
                }
            } else {
                <Status ..StatusProps::from_state("price and demand data", &series) />
                if let Some(a) = series.data() {
                    { stats_cards(region.label(), a) }
                    if effective_compare {
                        <Status ..StatusProps::from_state("comparison data", &series_b) />
                        if let Some(b) = series_b.data() {
                            { stats_cards(effective_b.label(), b) }
                            { comparison_section(region, effective_b, *time_scale, a, b, dark_mode) }
                        }
                    } else {
                        <div class="card">
                            <PriceDemandChart
                                title={format!("{} - Price & Demand ({})", region.label(), time_scale.code())}
                                data={ChartData::from_series(a)}
                                {dark_mode}
                            />
                        </div>
                    }
                }
            }
        </div>
    }
}

fn stats_cards(label: &'static str, series: &PriceDemandSeries) -> Html {
    if series.is_empty() {
        return html! { <p class="no-data">{format!("No price data for {label}")}</p> };
    }
    let stats = series.stats();

    html! {
        <div class="summary-grid">
            <KpiCard
                label={format!("{label} latest price")}
                value={stats.latest_price}
                unit="$/MWh"
                color={price_band_color(stats.latest_price)}
            />
            <KpiCard label={format!("{label} average price")} value={stats.avg_price} unit="$/MWh"
                subtitle={AttrValue::from(stats.price_range)} />
            <KpiCard label={format!("{label} demand")} value={stats.latest_demand} unit="MW" />
        </div>
    }
}

fn wem_cards(pulse: &MarketPulse) -> Html {
    if pulse.points().is_empty() {
        return html! { <p class="no-data">{"No WEM data available"}</p> };
    }

    html! {
        <div class="summary-grid">
            <KpiCard
                label="Current Price"
                value={pulse.latest_price()}
                unit="$/MWh"
                color={price_band_color(pulse.latest_price())}
            />
            <KpiCard label="Current Gen" value={pulse.current_generation()} unit="MW" />
            <KpiCard label="Avg Price" value={pulse.average_price()} unit="$/MWh" />
        </div>
    }
}

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

fn comparison_section(
    region_a: Region,
    region_b: Region,
    time_scale: TimeScale,
    a: &PriceDemandSeries,
    b: &PriceDemandSeries,
    dark_mode: bool,
) -> Html {
    let comparison = PriceDemandComparison::build(a, b);
    let (label_a, label_b) = (region_a.label(), region_b.label());
    let data = ChartData::from_comparison(
        &comparison,
        (label_a, region_a.color()),
        (label_b, region_b.color()),
    );
    let skip = comparison.timestamps.len().saturating_sub(TABLE_ROWS);

    html! {
        <>
            <div class="card">
                <PriceDemandChart
                    title={format!("{label_a} vs {label_b} - Price & Demand ({})", time_scale.code())}
                    {data}
                    {dark_mode}
                />
            </div>
            <table class="comparison-table">
                <thead>
                    <tr>
                        <th>{"Interval"}</th>
                        <th>{format!("{label_a} $/MWh")}</th>
                        <th>{format!("{label_b} $/MWh")}</th>
                        <th>{format!("{label_a} MW")}</th>
                        <th>{format!("{label_b} MW")}</th>
                    </tr>
                </thead>
                <tbody>
                    { for (skip..comparison.timestamps.len()).map(|i| html! {
                        <tr>
                            <td>{&comparison.timestamps[i]}</td>
                            <td>{cell(comparison.price_a[i])}</td>
                            <td>{cell(comparison.price_b[i])}</td>
                            <td>{cell(comparison.demand_a[i])}</td>
                            <td>{cell(comparison.demand_b[i])}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </>
    }
}

/// Latest WEM intervals. Generation not yet measured shows the forecast,
/// marked as such.
fn wem_table(pulse: &MarketPulse) -> Html {
    let points = pulse.points();
    let skip = points.len().saturating_sub(TABLE_ROWS);

    html! {
        <table class="comparison-table">
            <thead>
                <tr>
                    <th>{"Interval"}</th>
                    <th>{"$/MWh"}</th>
                    <th>{"Generation MW"}</th>
                    <th>{"Forecast MW"}</th>
                    <th>{"Non-Sched MW"}</th>
                    <th>{"RTD MW"}</th>
                    <th>{"Outages MW"}</th>
                </tr>
            </thead>
            <tbody>
                { for points[skip..].iter().map(|p| html! {
                    <tr>
                        <td>{&p.timestamp}</td>
                        <td>{format!("{:.2}", p.price)}</td>
                        <td class={classes!((!p.has_actual()).then_some("forecast"))}>
                            {format!("{:.0}", p.best_generation())}
                            if !p.has_actual() {
                                {" (fcst)"}
                            }
                        </td>
                        <td>{format!("{:.0}", p.forecast_mw)}</td>
                        <td>{format!("{:.0}", p.non_scheduled_generation())}</td>
                        <td>{format!("{:.0}", p.real_time_dispatch_generation_mw)}</td>
                        <td title={format!("Planned {:.0} / Forced {:.0}", p.planned_outage_mw, p.forced_outage_mw)}>
                            {format!("{:.0}", p.total_outage_mw)}
                        </td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
