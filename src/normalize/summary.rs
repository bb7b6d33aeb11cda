use super::aliases::summary as alias;
use super::{envelope, field, number_or_zero, text, text_or_empty};
use crate::models::region::Region;
use crate::models::summary::{InterconnectorFlow, MarketSummary, RegionSummary};
use serde_json::Value;
use std::collections::HashSet;

/// Normalizes the `elecSummary` payload (`{data:{summary:[...]}}`).
///
/// Each region embeds its interconnector flows, either as a JSON-encoded
/// string or as an array. The first region to mention an interconnector owns
/// its export side; the import side is inferred from the interconnector name.
pub fn normalize_summary(raw: &Value) -> MarketSummary {
    let mut regions = Vec::new();
    let mut interconnectors: Vec<InterconnectorFlow> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for record in envelope(raw, "summary") {
        let region_id = text_or_empty(record, alias::REGION_ID);

        for flow in parse_flows(record, &region_id) {
            let Some(name) = text(&flow, alias::FLOW_NAME) else {
                continue;
            };
            if !seen.insert(name.clone()) {
                continue;
            }
            interconnectors.push(InterconnectorFlow {
                interconnector_id: name,
                export_region: region_id.clone(),
                import_region: String::new(),
                mw_flow: number_or_zero(&flow, alias::FLOW_VALUE),
                export_limit: number_or_zero(&flow, alias::FLOW_EXPORT_LIMIT),
                import_limit: number_or_zero(&flow, alias::FLOW_IMPORT_LIMIT),
            });
        }

        regions.push(RegionSummary::new(
            region_id,
            number_or_zero(record, alias::PRICE),
            number_or_zero(record, alias::DEMAND),
            number_or_zero(record, alias::NET_INTERCHANGE),
            number_or_zero(record, alias::SCHEDULED_GENERATION),
            number_or_zero(record, alias::SEMI_SCHEDULED_GENERATION),
        ));
    }

    let candidates = candidate_regions(&regions);
    for ic in &mut interconnectors {
        ic.import_region = infer_import_region(&ic.interconnector_id, &ic.export_region, &candidates)
            .unwrap_or_default()
            .to_string();
    }

    MarketSummary {
        regions,
        interconnectors,
    }
}

/// Embedded flow list of one region. A list that cannot be decoded counts as
/// empty so one bad region never sinks the whole summary.
fn parse_flows(record: &Value, region_id: &str) -> Vec<Value> {
    match field(record, alias::INTERCONNECTOR_FLOWS) {
        None => Vec::new(),
        Some(Value::Array(flows)) => flows.clone(),
        Some(Value::String(encoded)) => match serde_json::from_str::<Vec<Value>>(encoded) {
            Ok(flows) => flows,
            Err(e) => {
                tracing::warn!(region = region_id, error = %e, "failed to parse interconnector flows");
                Vec::new()
            }
        },
        Some(other) => {
            tracing::warn!(region = region_id, payload = %other, "unexpected interconnector flows payload");
            Vec::new()
        }
    }
}

/// Canonical regions first, then any other region the payload reported.
fn candidate_regions(regions: &[RegionSummary]) -> Vec<String> {
    let mut ids: Vec<String> = Region::all().iter().map(|r| r.id().to_string()).collect();
    for region in regions {
        if !region.region_id.is_empty() && !ids.contains(&region.region_id) {
            ids.push(region.region_id.clone());
        }
    }
    ids
}

/// First candidate, other than the export region, whose id appears in the
/// interconnector name either whole (`QLD1` in `NSW1-QLD1`) or without its
/// numeric suffix (`SA` in `V-SA`).
///
/// Names that match several candidates resolve to the earliest one in
/// candidate order.
pub fn infer_import_region<'a>(
    interconnector_id: &str,
    export_region: &str,
    candidates: &'a [String],
) -> Option<&'a str> {
    candidates
        .iter()
        .filter(|id| id.as_str() != export_region)
        .find(|id| {
            let stem = id.trim_end_matches(|c: char| c.is_ascii_digit());
            interconnector_id.contains(id.as_str())
                || (!stem.is_empty() && interconnector_id.contains(stem))
        })
        .map(String::as_str)
}
