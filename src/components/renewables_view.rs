use std::rc::Rc;
use yew::prelude::*;

use super::fuel_mix_chart::{FuelMixChart, SeriesLabel};
use super::kpi_card::KpiCard;
use super::market_overview::fuel_share_grid;
use super::region_selector::RegionSelector;
use super::status::{Status, StatusProps};
use crate::hooks::use_market_data::{use_fuel_mix, use_renewable_penetration};
use crate::hooks::use_theme::use_theme;
use crate::models::comparison::{FuelMixComparison, effective_comparison_region};
use crate::models::generation::FuelMix;
use crate::models::region::{FuelMixPeriod, Region, RegionScope};
use crate::models::theme::Theme;

const RENEWABLE_COLOR: &str = "#22c55e";

/// Renewable share of the current fuel mix for a region, split into
/// renewable and non-renewable sources, next to the market-wide records.
#[function_component(RenewablesView)]
pub fn renewables_view() -> Html {
    let theme = use_theme();
    let scope = use_state(|| RegionScope::Nem);
    let scope_b = use_state(|| RegionScope::Region(Region::Vic1));
    let compare = use_state(|| false);

    let options = RegionScope::all();
    let effective_b = if *compare {
        effective_comparison_region(*scope, *scope_b, &options)
    } else {
        *scope_b
    };

    // Min/max records are market-wide whatever the scope
    let penetration = use_renewable_penetration(*scope);
    let mix = use_fuel_mix(*scope, FuelMixPeriod::Current, true);
    let mix_b = use_fuel_mix(effective_b, FuelMixPeriod::Current, *compare);

    let on_scope = {
        let scope = scope.clone();
        Callback::from(move |s: RegionScope| scope.set(s))
    };
    let on_scope_b = {
        let scope_b = scope_b.clone();
        Callback::from(move |s: RegionScope| scope_b.set(s))
    };
    let on_compare = {
        let compare = compare.clone();
        Callback::from(move |_: Event| compare.set(!*compare))
    };

    let dark_mode = theme.effective_theme == Theme::Dark;
    let series_a = SeriesLabel {
        name: scope.label().to_string(),
        color: scope.color(),
    };
    let series_b = compare.then(|| SeriesLabel {
        name: effective_b.label().to_string(),
        color: effective_b.color(),
    });
    let mix_b_data = mix_b.data().filter(|_| *compare);
    let options_b: Vec<RegionScope> = options.iter().copied().filter(|s| s != &*scope).collect();

    html! {
        <div class="page">
            <div class="page-header">
                <h2>{"Renewable Penetration"}</h2>
                <div class="page-controls">
                    <RegionSelector options={options.clone()} selected={*scope} on_change={on_scope} />
                    <label class="compare-toggle">
                        <input type="checkbox" checked={*compare} onchange={on_compare} />
                        {"Compare"}
                    </label>
                    if *compare {
                        <span class="region-label">{"vs"}</span>
                        <RegionSelector options={options_b} selected={effective_b} on_change={on_scope_b} />
                    }
                </div>
            </div>

            <Status ..StatusProps::from_state("renewables data", &mix) />
            <Status ..StatusProps::from_state("renewable records", &penetration) />
            if *compare {
                <Status ..StatusProps::from_state("comparison data", &mix_b) />
            }

            if let Some(a) = mix.data() {
                <div class="summary-grid">
                    <KpiCard
                        label={format!("{} Current", scope.label())}
                        value={a.renewable_pct()}
                        unit="%"
                        color={RENEWABLE_COLOR}
                    />
                    if let Some(b) = mix_b_data {
                        <KpiCard
                            label={format!("{} Current", effective_b.label())}
                            value={b.renewable_pct()}
                            unit="%"
                            color={RENEWABLE_COLOR}
                        />
                    }
                    if !*compare {
                        if let Some(records) = penetration.data() {
                            <KpiCard
                                label="Min (NEM Record)"
                                value={records.min_pct}
                                unit="%"
                                subtitle={AttrValue::from(records.min_timestamp.clone())}
                                color="#ef4444"
                            />
                            <KpiCard
                                label="Max (NEM Record)"
                                value={records.max_pct}
                                unit="%"
                                subtitle={AttrValue::from(records.max_timestamp.clone())}
                                color="#3b82f6"
                            />
                        }
                    }
                </div>

                { sources_section(a, mix_b_data.map(|b| &**b), &series_a, series_b.as_ref(), dark_mode) }
            }

            if !*compare {
                if let Some(records) = penetration.data() {
                    <div class="card">
                        <h3 class="card-title">{"NEM Sources at Record Renewable Share"}</h3>
                        { fuel_share_grid(&records.breakdown_mix(), "MW") }
                    </div>
                }
            }
        </div>
    }
}

/// Renewable and non-renewable sources side by side, one chart each.
fn sources_section(
    a: &FuelMix,
    b: Option<&FuelMix>,
    series_a: &SeriesLabel,
    series_b: Option<&SeriesLabel>,
    dark_mode: bool,
) -> Html {
    let (renewable_a, other_a) = a.split_renewable();
    let (renewable_b, other_b) = b.map(FuelMix::split_renewable).unwrap_or_default();

    let card = |title: &'static str, chart_id: &'static str, a: &FuelMix, b: &FuelMix| {
        let comparison = FuelMixComparison::build(a, b);
        if comparison.rows.is_empty() {
            return html! {
                <div class="card">
                    <h3 class="card-title">{title}</h3>
                    <p class="no-data">{"No data available"}</p>
                </div>
            };
        }
        html! {
            <div class="card">
                <FuelMixChart
                    comparison={Rc::new(comparison)}
                    series_a={series_a.clone()}
                    series_b={series_b.cloned()}
                    unit="MW"
                    {dark_mode}
                    {chart_id}
                    {title}
                />
            </div>
        }
    };

    html! {
        <div class="two-col">
            { card("Renewable Sources", "renewable-sources-chart", &renewable_a, &renewable_b) }
            { card("Non-Renewable Sources", "non-renewable-sources-chart", &other_a, &other_b) }
        </div>
    }
}
