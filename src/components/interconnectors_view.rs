use yew::prelude::*;

use super::market_overview::region_label;
use super::status::{Status, StatusProps};
use crate::hooks::use_market_data::use_elec_summary;
use crate::models::summary::{InterconnectorFlow, MarketSummary, utilisation_color};

/// Live flows between NEM regions with limits and utilisation.
#[function_component(InterconnectorsView)]
pub fn interconnectors_view() -> Html {
    let summary = use_elec_summary();

    html! {
        <div class="page">
            <div class="page-header">
                <h2>{"Interconnector Flows"}</h2>
                <span class="page-subtitle">{"Live power flow between NEM regions"}</span>
            </div>

            <Status ..StatusProps::from_state("interconnector data", &summary) />
            if let Some(summary) = summary.data() {
                <div class="card">
                    <h3 class="card-title">{"Interconnector Details"}</h3>
                    { interconnector_table(summary) }
                </div>
            }
        </div>
    }
}

/// One row per interconnector. An import region that could not be
/// inferred shows as `?`.
pub fn interconnector_table(summary: &MarketSummary) -> Html {
    if summary.interconnectors.is_empty() {
        return html! { <p class="no-data">{"No interconnector data available"}</p> };
    }

    html! {
        <table class="flow-table">
            <thead>
                <tr>
                    <th>{"Interconnector"}</th>
                    <th>{"From"}</th>
                    <th>{"To"}</th>
                    <th>{"Flow (MW)"}</th>
                    <th>{"Export Limit"}</th>
                    <th>{"Import Limit"}</th>
                    <th>{"Utilisation"}</th>
                </tr>
            </thead>
            <tbody>
                { for summary.interconnectors.iter().map(flow_row) }
            </tbody>
        </table>
    }
}

fn flow_row(ic: &InterconnectorFlow) -> Html {
    let pct = ic.utilisation_pct();
    let to = if ic.import_region.is_empty() {
        AttrValue::Static("?")
    } else {
        region_label(&ic.import_region)
    };

    html! {
        <tr>
            <td class="ic-name">{&ic.interconnector_id}</td>
            <td>{region_label(&ic.export_region)}</td>
            <td>{to}</td>
            <td class={if ic.mw_flow >= 0.0 { "positive" } else { "negative" }}>
                {format!("{:.0} MW", ic.mw_flow)}
            </td>
            <td>{format!("{:.0} MW", ic.export_limit)}</td>
            <td>{format!("{:.0} MW", ic.import_limit)}</td>
            <td>
                <div class="util-bar">
                    <div
                        class="util-fill"
                        style={format!("width: {:.0}%; background-color: {}", pct.min(100.0), utilisation_color(pct))}
                    />
                    <span>{format!("{pct:.0}%")}</span>
                </div>
            </td>
        </tr>
    }
}
