use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::fuel_mix_chart::{FuelMixChart, SeriesLabel};
use super::market_overview::fuel_share_grid;
use super::region_selector::RegionSelector;
use super::status::{Status, StatusProps};
use crate::hooks::use_market_data::use_fuel_mix;
use crate::hooks::use_theme::use_theme;
use crate::models::comparison::{FuelMixComparison, effective_comparison_region};
use crate::models::generation::FuelMix;
use crate::models::region::{FuelMixPeriod, Region, RegionScope};
use crate::models::theme::Theme;

/// Fuel mix for one region, optionally compared against a second one.
#[function_component(FuelMixView)]
pub fn fuel_mix_view() -> Html {
    let theme = use_theme();
    let scope = use_state(|| RegionScope::Nem);
    let scope_b = use_state(|| RegionScope::Region(Region::Vic1));
    let period = use_state(FuelMixPeriod::default);
    let compare = use_state(|| false);

    let options = RegionScope::all();
    let effective_b = if *compare {
        effective_comparison_region(*scope, *scope_b, &options)
    } else {
        *scope_b
    };

    let mix = use_fuel_mix(*scope, *period, true);
    let mix_b = use_fuel_mix(effective_b, *period, *compare);

    let on_period = {
        let period = period.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Some(p) = FuelMixPeriod::all().iter().find(|p| p.code() == target.value()) {
                period.set(*p);
            }
        })
    };
    let on_compare = {
        let compare = compare.clone();
        Callback::from(move |_: Event| compare.set(!*compare))
    };
    let on_scope = {
        let scope = scope.clone();
        Callback::from(move |s: RegionScope| scope.set(s))
    };
    let on_scope_b = {
        let scope_b = scope_b.clone();
        Callback::from(move |s: RegionScope| scope_b.set(s))
    };

    let unit = period.unit();
    let comparison = match (mix.data(), *compare) {
        (Some(a), true) => mix_b.data().map(|b| Rc::new(FuelMixComparison::build(a, b))),
        (Some(a), false) => Some(Rc::new(FuelMixComparison::build(a, &FuelMix::default()))),
        (None, _) => None,
    };
    let series_b = compare.then(|| SeriesLabel {
        name: effective_b.label().to_string(),
        color: effective_b.color(),
    });
    let options_b: Vec<RegionScope> = options.iter().copied().filter(|s| s != &*scope).collect();

    html! {
        <div class="page">
            <div class="page-header">
                <h2>{"Fuel Mix"}</h2>
                <div class="page-controls">
                    <RegionSelector options={options.clone()} selected={*scope} on_change={on_scope} />
                    <select class="period-picker" onchange={on_period} aria-label="Select time range">
                        { for FuelMixPeriod::all().iter().map(|p| html! {
                            <option value={p.code()} selected={p == &*period}>{p.code()}</option>
                        }) }
                    </select>
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

            <Status ..StatusProps::from_state("fuel mix data", &mix) />
            if *compare {
                <Status ..StatusProps::from_state("comparison data", &mix_b) />
            }

            if let Some(comparison) = comparison {
                <div class="card">
                    <FuelMixChart
                        {comparison}
                        series_a={SeriesLabel { name: scope.label().to_string(), color: scope.color() }}
                        {series_b}
                        unit={unit}
                        dark_mode={theme.effective_theme == Theme::Dark}
                    />
                </div>
            }

            if !*compare {
                if let Some(mix) = mix.data() {
                    <div class="card">{ fuel_share_grid(mix, unit) }</div>
                }
            }
        </div>
    }
}
