#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use nem_dashboard::hooks::use_query::{Dispatch, QueryState, plan_dispatch, settle};
    use nem_dashboard::models::{
        comparison::{FuelMixComparison, PriceDemandComparison, effective_comparison_region},
        error::AppError,
        historical::for_region,
        region::{FuelMixPeriod, Region, RegionScope, TimeScale},
        theme::{MemoryThemeStore, Theme, ThemeStore, initial_theme},
    };
    use nem_dashboard::services::query::{Query, QueryCache};
    use nem_dashboard::services::queries::{
        AveragePricesQuery, ElecSummaryQuery, FuelMixQuery, MarketPulseQuery, PriceAndDemandQuery,
        RenewablePenetrationQuery,
    };
    use serde_json::{Value, json};
    use std::cell::Cell;
    use std::rc::Rc;

    // ===== Fixtures =====

    fn elec_summary_response() -> Value {
        let flows = |v: Value| Value::String(v.to_string());
        json!({ "data": { "summary": [
            {
                "regionId": "NSW1", "price": 85.42, "totalDemand": 8500,
                "scheduledGeneration": 7200, "semischeduledGeneration": 1800, "netInterchange": -500,
                "interconnectorFlows": flows(json!([
                    { "name": "NSW1-QLD1", "value": 300, "exportlimit": 1200, "importlimit": -800 },
                    { "name": "VIC1-NSW1", "value": -200, "exportlimit": 1600, "importlimit": -1000 },
                ])),
            },
            {
                "regionId": "QLD1", "price": 72.15, "totalDemand": 6200,
                "scheduledGeneration": 5800, "semischeduledGeneration": 900, "netInterchange": 300,
                "interconnectorFlows": flows(json!([
                    { "name": "NSW1-QLD1", "value": -300, "exportlimit": 800, "importlimit": -1200 },
                ])),
            },
            {
                "regionId": "VIC1", "price": 45.30, "totalDemand": 5100,
                "scheduledGeneration": 4200, "semischeduledGeneration": 1200, "netInterchange": 200,
                "interconnectorFlows": flows(json!([
                    { "name": "VIC1-NSW1", "value": 200, "exportlimit": 1000, "importlimit": -1600 },
                    { "name": "V-SA", "value": -150, "exportlimit": 600, "importlimit": -500 },
                    { "name": "T-V-MNSP1", "value": 100, "exportlimit": 600, "importlimit": -500 },
                ])),
            },
            {
                "regionId": "SA1", "price": -12.50, "totalDemand": 1800,
                "scheduledGeneration": 800, "semischeduledGeneration": 1200, "netInterchange": -200,
                "interconnectorFlows": flows(json!([
                    { "name": "V-SA", "value": 150, "exportlimit": 500, "importlimit": -600 },
                ])),
            },
            {
                "regionId": "TAS1", "price": 55.00, "totalDemand": 1100,
                "scheduledGeneration": 900, "semischeduledGeneration": 300, "netInterchange": -100,
                "interconnectorFlows": flows(json!([
                    { "name": "T-V-MNSP1", "value": -100, "exportlimit": 500, "importlimit": -600 },
                ])),
            },
        ]}})
    }

    fn price_and_demand_response() -> Value {
        json!({ "data": { "items": [
            { "settlementDate": "2025-01-15T10:00:00", "rrp": 85.42, "totalDemand": 8500, "scheduledGeneration": 7200, "semiScheduledGeneration": 1800, "netInterchange": -500 },
            { "settlementDate": "2025-01-15T10:05:00", "rrp": 87.10, "totalDemand": 8600, "scheduledGeneration": 7300, "semiScheduledGeneration": 1850, "netInterchange": -550 },
            { "settlementDate": "2025-01-15T10:10:00", "rrp": 82.30, "totalDemand": 8400, "scheduledGeneration": 7100, "semiScheduledGeneration": 1750, "netInterchange": -450 },
        ]}})
    }

    fn fuel_mix_response() -> Value {
        json!({ "data": { "items": [
            { "fuelType": "Black Coal", "state": "NSW1", "supply": 4200 },
            { "fuelType": "Solar", "state": "NSW1", "supply": 1800 },
            { "fuelType": "Wind", "state": "NSW1", "supply": 900 },
            { "fuelType": "Gas", "state": "NSW1", "supply": 600 },
            { "fuelType": "Hydro", "state": "NSW1", "supply": 400 },
            { "fuelType": "Black Coal", "state": "QLD1", "supply": 3800 },
            { "fuelType": "Solar", "state": "QLD1", "supply": 2200 },
            { "fuelType": "Gas", "state": "QLD1", "supply": 500 },
        ]}})
    }

    fn renewable_penetration_response() -> Value {
        json!({ "data": { "items": [
            { "type": "Max", "fuelType": "Black Coal", "supply": 2000, "dateTime": "2025-01-15T13:00:00" },
            { "type": "Max", "fuelType": "Solar", "supply": 4500, "dateTime": "2025-01-15T13:00:00" },
            { "type": "Max", "fuelType": "Wind", "supply": 2200, "dateTime": "2025-01-15T13:00:00" },
            { "type": "Max", "fuelType": "Hydro", "supply": 800, "dateTime": "2025-01-15T13:00:00" },
            { "type": "Min", "fuelType": "Black Coal", "supply": 5000, "dateTime": "2025-01-15T03:00:00" },
            { "type": "Min", "fuelType": "Solar", "supply": 0, "dateTime": "2025-01-15T03:00:00" },
            { "type": "Min", "fuelType": "Wind", "supply": 800, "dateTime": "2025-01-15T03:00:00" },
            { "type": "Min", "fuelType": "Gas", "supply": 1200, "dateTime": "2025-01-15T03:00:00" },
        ]}})
    }

    fn daily_average_prices_response() -> Value {
        json!({ "data": { "items": [
            { "day": "2025-01-13", "regionId": "NSW1", "avgRrp": "78.50", "peakRrp": "120.30" },
            { "day": "2025-01-14", "regionId": "NSW1", "avgRrp": "82.10", "peakRrp": "135.40" },
            { "day": "2025-01-13", "regionId": "QLD1", "avgRrp": "65.20", "peakRrp": "98.70" },
        ]}})
    }

    fn market_pulse_response() -> Value {
        json!({ "data": { "items": [
            {
                "tradingDayInterval": "2025-01-15T10:00:00", "price": 65.20,
                "forecastMw": 3200, "forecastEoiMw": 3150,
                "actualTotalGeneration": 3100, "actualNsgMw": 450, "forecastNsgMw": 440,
                "rtdTotalGeneration": 3080, "totalOutageMw": 320, "plannedOutageMw": 200, "forcedOutageMw": 120,
            },
            {
                "tradingDayInterval": "2025-01-15T10:30:00", "price": 67.80,
                "forecastMw": 3250,
                "actualTotalGeneration": null, "actualNsgMw": null, "forecastNsgMw": 460,
                "rtdTotalGeneration": 3120, "totalOutageMw": 310, "plannedOutageMw": 190, "forcedOutageMw": 120,
            },
        ]}})
    }

    // ===== Market Summary =====

    #[test]
    fn test_summary_regions_from_fixture() {
        let summary = ElecSummaryQuery.select(&elec_summary_response());

        assert_eq!(summary.regions.len(), 5);
        let nsw = &summary.regions[0];
        assert_eq!(nsw.region_id, "NSW1");
        assert_eq!(nsw.price, 85.42);
        assert_eq!(nsw.demand, 8500.0);
        assert_eq!(nsw.generation, 7200.0 + 1800.0);
        assert_eq!(summary.region("SA1").map(|r| r.price), Some(-12.5));
    }

    #[test]
    fn test_summary_interconnectors_deduplicated() {
        let summary = ElecSummaryQuery.select(&elec_summary_response());

        let ids: Vec<&str> = summary
            .interconnectors
            .iter()
            .map(|ic| ic.interconnector_id.as_str())
            .collect();
        assert_eq!(ids, ["NSW1-QLD1", "VIC1-NSW1", "V-SA", "T-V-MNSP1"]);

        let nsw_qld = summary.interconnector("NSW1-QLD1").unwrap();
        assert_eq!(nsw_qld.export_region, "NSW1");
        assert_eq!(nsw_qld.import_region, "QLD1");
        assert_eq!(nsw_qld.mw_flow, 300.0);
        assert_eq!(nsw_qld.export_limit, 1200.0);
        assert_eq!(nsw_qld.import_limit, -800.0);
    }

    #[test]
    fn test_summary_import_region_inference() {
        let summary = ElecSummaryQuery.select(&elec_summary_response());

        let vic_nsw = summary.interconnector("VIC1-NSW1").unwrap();
        assert_eq!(vic_nsw.export_region, "NSW1");
        assert_eq!(vic_nsw.import_region, "VIC1");

        let v_sa = summary.interconnector("V-SA").unwrap();
        assert_eq!(v_sa.export_region, "VIC1");
        assert_eq!(v_sa.import_region, "SA1");

        // No region id or stem appears in the name
        assert_eq!(summary.interconnector("T-V-MNSP1").unwrap().import_region, "");
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = ElecSummaryQuery.select(&elec_summary_response());
        let value = serde_json::to_value(&summary.regions[0]).unwrap();
        assert_eq!(value["regionId"], "NSW1");
        assert_eq!(value["semiScheduledGeneration"], 1800.0);
    }

    // ===== Price and Demand =====

    #[test]
    fn test_price_and_demand_from_fixture() {
        let query = PriceAndDemandQuery {
            region: Region::Nsw1,
            time_scale: TimeScale::FiveMinute,
        };
        let series = query.select(&price_and_demand_response());

        assert_eq!(series.len(), 3);
        let first = &series.points()[0];
        assert_eq!(first.timestamp, "2025-01-15T10:00:00");
        assert_eq!(first.price, 85.42);
        assert_eq!(first.semi_scheduled_gen, 1800.0);

        let stats = series.stats();
        assert_eq!(stats.latest_price, 82.30);
        assert_eq!(stats.latest_demand, 8400.0);
        assert!((stats.avg_price - (85.42 + 87.10 + 82.30) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_price_comparison_aligns_timestamps() {
        let query = PriceAndDemandQuery {
            region: Region::Nsw1,
            time_scale: TimeScale::FiveMinute,
        };
        let a = query.select(&price_and_demand_response());
        let b = query.select(&json!({ "data": { "items": [
            { "settlementDate": "2025-01-15T10:05:00", "rrp": 40.0, "totalDemand": 5000 },
            { "settlementDate": "2025-01-15T10:15:00", "rrp": 41.0, "totalDemand": 5100 },
        ]}}));

        let cmp = PriceDemandComparison::build(&a, &b);
        assert_eq!(cmp.timestamps.len(), 4);
        assert_eq!(cmp.price_a, [Some(85.42), Some(87.10), Some(82.30), None]);
        assert_eq!(cmp.price_b, [None, Some(40.0), None, Some(41.0)]);
        assert_eq!(cmp.demand_b[3], Some(5100.0));
    }

    // ===== Fuel Mix =====

    #[test]
    fn test_fuel_mix_nem_aggregates_states() {
        let query = FuelMixQuery {
            scope: RegionScope::Nem,
            period: FuelMixPeriod::Current,
        };
        let mix = query.select(&fuel_mix_response());

        assert_eq!(mix.entries()[0].fuel_type, "Black Coal");
        assert_eq!(mix.get("Black Coal"), Some(8000.0));
        assert_eq!(mix.get("Solar"), Some(4000.0));
        assert_eq!(mix.get("Gas"), Some(1100.0));
        assert_eq!(mix.total(), 14400.0);
    }

    #[test]
    fn test_fuel_mix_comparison_union() {
        let nsw = FuelMixQuery {
            scope: Region::Nsw1.into(),
            period: FuelMixPeriod::Current,
        }
        .select(&fuel_mix_response());
        let qld = FuelMixQuery {
            scope: Region::Qld1.into(),
            period: FuelMixPeriod::Current,
        }
        .select(&fuel_mix_response());

        let cmp = FuelMixComparison::build(&nsw, &qld);
        let (names, a, b) = cmp.series_data();
        assert_eq!(names, ["Black Coal", "Solar", "Wind", "Gas", "Hydro"]);
        assert_eq!(a, [4200.0, 1800.0, 900.0, 600.0, 400.0]);
        assert_eq!(b, [3800.0, 2200.0, 0.0, 500.0, 0.0]);
    }

    #[test]
    fn test_effective_comparison_region() {
        let options = RegionScope::all();
        let nsw = RegionScope::Region(Region::Nsw1);
        assert_eq!(effective_comparison_region(RegionScope::Nem, RegionScope::Nem, &options), nsw);
        assert_eq!(effective_comparison_region(nsw, RegionScope::Nem, &options), RegionScope::Nem);
    }

    // ===== Renewables =====

    #[test]
    fn test_renewable_penetration_from_fixture() {
        let snapshot = RenewablePenetrationQuery {
            scope: RegionScope::Nem,
        }
        .select(&renewable_penetration_response());

        assert!((snapshot.max_pct - 7500.0 / 9500.0 * 100.0).abs() < 1e-9);
        assert!((snapshot.min_pct - 800.0 / 7000.0 * 100.0).abs() < 1e-9);
        assert_eq!(snapshot.current_pct, snapshot.max_pct);
        assert_eq!(snapshot.max_timestamp, "2025-01-15T13:00:00");
        assert_eq!(snapshot.fuel_breakdown.len(), 4);
    }

    #[test]
    fn test_region_renewable_split_from_fuel_mix() {
        let nsw = FuelMixQuery {
            scope: Region::Nsw1.into(),
            period: FuelMixPeriod::Current,
        }
        .select(&fuel_mix_response());

        let (renewable, other) = nsw.split_renewable();
        assert_eq!(renewable.total(), 3100.0);
        assert_eq!(other.total(), 4800.0);
        assert!((nsw.renewable_pct() - 3100.0 / 7900.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_record_breakdown_as_mix() {
        let snapshot = RenewablePenetrationQuery {
            scope: RegionScope::Nem,
        }
        .select(&renewable_penetration_response());

        let mix = snapshot.breakdown_mix();
        assert_eq!(mix.entries()[0].fuel_type, "Solar");
        assert_eq!(mix.total(), 9500.0);
    }

    // ===== Historical Averages =====

    #[test]
    fn test_daily_averages_coerce_text() {
        let points = AveragePricesQuery::daily("2025", "1").select(&daily_average_prices_response());

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].period, "2025-01-13");
        assert_eq!(points[0].avg_price, 78.5);
        assert_eq!(points[0].peak_price, Some(120.3));
        assert_eq!(for_region(&points, "NSW1").count(), 2);
    }

    #[test]
    fn test_annual_averages_use_year_as_period() {
        let raw = json!({ "data": { "items": [
            { "year": "2025", "regionId": "NSW1", "avgRrp": "80.00", "peakRrp": "140.00" },
            { "year": "2024", "regionId": "NSW1", "avgRrp": "72.50" },
        ]}});
        let points = AveragePricesQuery::annual().select(&raw);

        assert_eq!(points[0].period, "2025");
        assert_eq!(points[1].avg_price, 72.5);
        assert_eq!(points[1].peak_price, None);
    }

    // ===== Market Pulse =====

    #[test]
    fn test_market_pulse_keeps_null_actuals() {
        let pulse = MarketPulseQuery.select(&market_pulse_response());

        assert_eq!(pulse.points().len(), 2);
        assert_eq!(pulse.points()[0].actual_generation_mw, Some(3100.0));
        assert_eq!(pulse.points()[1].actual_generation_mw, None);
        assert_eq!(pulse.points()[1].actual_non_scheduled_gen_mw, None);
        assert_eq!(pulse.latest_price(), 67.80);
        assert_eq!(pulse.latest_demand(), 3100.0);

        let value = serde_json::to_value(&pulse.points()[1]).unwrap();
        assert!(value["actualGenerationMw"].is_null());
    }

    #[test]
    fn test_market_pulse_forecast_fallback() {
        let raw = json!({ "data": { "items": [
            { "tradingDayInterval": "2025-01-15T11:00:00", "price": 60, "forecastEoiMw": 3150 },
        ]}});
        let pulse = MarketPulseQuery.select(&raw);
        assert_eq!(pulse.points()[0].forecast_mw, 3150.0);
        assert_eq!(pulse.points()[0].total_outage_mw, 0.0);
    }

    // ===== Query Cache =====

    #[test]
    fn test_cache_serves_normalized_view_from_one_fetch() {
        let cache = QueryCache::new();
        let calls = Rc::new(Cell::new(0));
        let stale = chrono::Duration::minutes(5);

        let nem = FuelMixQuery {
            scope: RegionScope::Nem,
            period: FuelMixPeriod::Current,
        };
        let qld = FuelMixQuery {
            scope: Region::Qld1.into(),
            ..nem
        };

        let fetch = |query: &FuelMixQuery| {
            let calls = calls.clone();
            block_on(cache.fetch(query.endpoint().key(), stale, move || {
                calls.set(calls.get() + 1);
                async { Ok(fuel_mix_response()) }
            }))
            .map(|raw| query.select(&raw))
        };

        assert_eq!(fetch(&nem).unwrap().get("Black Coal"), Some(8000.0));
        assert_eq!(calls.get(), 1);

        // Different region parameter, different cache entry
        assert_eq!(fetch(&qld).unwrap().get("Black Coal"), Some(3800.0));
        assert_eq!(calls.get(), 2);

        assert_eq!(fetch(&nem).unwrap().get("Black Coal"), Some(8000.0));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_cache_surfaces_upstream_error() {
        let cache = QueryCache::new();
        let key = ElecSummaryQuery.endpoint().key();

        let err = block_on(cache.fetch(key.clone(), chrono::Duration::minutes(5), || async {
            Err(AppError::Upstream {
                status: 404,
                status_text: "Not Found".into(),
                path: "/NEM/v1/PWS/NEMDashboard/elecSummary".into(),
            })
        }))
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "AEMO API error: 404 Not Found (/NEM/v1/PWS/NEMDashboard/elecSummary)"
        );
        assert!(cache.get(&key).is_none());
    }

    // ===== Query State =====

    #[test]
    fn test_query_state_transitions() {
        let idle: QueryState<u32> = QueryState::Idle;
        assert!(!idle.is_loading());
        assert!(idle.data().is_none());

        let loaded = QueryState::Loaded(Rc::new(7u32));
        assert_eq!(loaded.data().map(|d| **d), Some(7));
        assert_ne!(loaded, QueryState::Loading);
    }

    #[test]
    fn test_region_change_then_failure_surfaces_error() {
        let nsw = PriceAndDemandQuery {
            region: Region::Nsw1,
            time_scale: TimeScale::FiveMinute,
        };
        let vic = PriceAndDemandQuery {
            region: Region::Vic1,
            ..nsw
        };
        let shown = QueryState::Loaded(Rc::new(nsw.select(&price_and_demand_response())));

        let dispatch = plan_dispatch(true, Some(&nsw), &vic, &shown);
        assert!(matches!(dispatch, Dispatch::Load));
        let next = settle(&dispatch, Err(AppError::Network("connection reset".into())), false);
        assert_eq!(
            next,
            Some(QueryState::Error("Network error: connection reset".to_string()))
        );

        // Polling the same region keeps the series on screen
        let dispatch = plan_dispatch(true, Some(&nsw), &nsw, &shown);
        assert_eq!(
            settle(&dispatch, Err(AppError::Network("connection reset".into())), false),
            None
        );
    }

    // ===== Theme =====

    #[test]
    fn test_theme_defaults_to_dark_and_persists() {
        let store = MemoryThemeStore::default();
        assert_eq!(initial_theme(&store), Theme::Dark);

        let next = initial_theme(&store).toggled(Theme::Dark);
        store.save(next).unwrap();
        assert_eq!(initial_theme(&store), Theme::Light);
    }
}
