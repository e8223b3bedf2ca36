#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::pin::pin;
    use std::rc::Rc;
    use std::task::{Context, Poll, Waker};

    use taxi_dashboard::components::status::ChartPhase;
    use taxi_dashboard::config::Config;
    use taxi_dashboard::hooks::use_fetch::{FetchCycle, FetchState, run_cycle};
    use taxi_dashboard::models::{
        chart_config::{
            SeriesConfig, corporate_patterns_chart, passenger_trips_chart, pickup_hotspots_chart,
            premium_trips_chart,
        },
        chart_id::ChartId,
        error::AppError,
        filters::{FilterAction, FilterField, Filters, ZeroInputPolicy},
        trips::{PickupHotspot, RoutePattern, TripRecord},
    };
    use taxi_dashboard::services::api::ApiConfig;

    // Helper: runs a future that never actually waits to completion
    fn run_ready<F: Future>(fut: F) -> F::Output {
        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(output) => output,
            Poll::Pending => panic!("future was expected to be ready"),
        }
    }

    fn hotspots_response() -> &'static str {
        r#"[
            {"trip_id": 1, "pickup_location_id": 132, "trip_count": 412},
            {"trip_id": 2, "pickup_location_id": 138, "trip_count": 377},
            {"trip_id": 3, "pickup_location_id": 161, "pickup_zone": "Midtown Center", "trip_count": 290},
            {"trip_id": 4, "pickup_location_id": 237, "trip_count": 288},
            {"trip_id": 5, "pickup_location_id": 236, "trip_count": 251}
        ]"#
    }

    fn create_test_trips() -> Vec<TripRecord> {
        serde_json::from_str(
            r#"[
                {"trip_id": 11, "trip_distance": 18.2, "fare_amount": 72.5, "passenger_count": 1},
                {"trip_id": 12, "trip_distance": 10.4, "fare_amount": 55.0, "passenger_count": 2},
                {"trip_id": 13, "trip_distance": 25.9, "fare_amount": 98.25, "passenger_count": 1}
            ]"#,
        )
        .unwrap()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_http_display() {
        let error = AppError::Http {
            status: 503,
            body: "Service Unavailable".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP 503: Service Unavailable");
    }

    #[test]
    fn test_app_error_timeout_display() {
        let error = AppError::Timeout("operation timed out".to_string());
        assert_eq!(error.to_string(), "Request timeout: operation timed out");
    }

    // ===== End-to-end: hotspots fetch to chart =====

    #[test]
    fn test_hotspots_scenario_renders_five_categories_in_order() {
        let url = ApiConfig::builder()
            .base_url("http://localhost:8009")
            .build()
            .top_pickups_url(5, 30);
        assert_eq!(url, "http://localhost:8009/hotspots/pickup?limit=5&days=30");

        let state = std::cell::RefCell::new(FetchState::Loading);
        let cycle = FetchCycle::new();
        let applied = run_ready(run_cycle(
            &cycle,
            async {
                serde_json::from_str::<Vec<PickupHotspot>>(hotspots_response())
                    .map_err(|e| AppError::Decode(e.to_string()))
            },
            |outcome| *state.borrow_mut() = outcome,
        ));
        assert!(applied);

        let state = state.into_inner();
        assert_eq!(ChartPhase::of(&state), ChartPhase::Ready);

        let rows = state.data().unwrap();
        let config = pickup_hotspots_chart(rows, 30);
        assert_eq!(
            config.categories(),
            &["132", "138", "Midtown Center", "237", "236"]
        );
        assert_eq!(config.title, "Top Pickup Hotspots (last 30 days)");
    }

    // ===== ChartPhase Tests =====

    #[test]
    fn test_empty_result_shows_no_data() {
        let state: FetchState<Vec<TripRecord>> = FetchState::Loaded(Rc::new(Vec::new()));
        assert_eq!(ChartPhase::of(&state), ChartPhase::Empty);
    }

    #[test]
    fn test_loading_and_error_phases() {
        let loading: FetchState<Vec<RoutePattern>> = FetchState::Loading;
        assert_eq!(ChartPhase::of(&loading), ChartPhase::Loading);

        let failed: FetchState<Vec<RoutePattern>> =
            FetchState::Error(AppError::Network("connection refused".to_string()));
        assert_eq!(
            ChartPhase::of(&failed),
            ChartPhase::Error("Network error: connection refused".to_string())
        );
    }

    #[test]
    fn test_fetch_state_accessors() {
        let loaded = FetchState::Loaded(Rc::new(create_test_trips()));
        assert!(!loaded.is_loading());
        assert_eq!(loaded.data().map(|d| d.len()), Some(3));
        assert!(loaded.error().is_none());

        let loading: FetchState<Vec<TripRecord>> = FetchState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());
        assert!(loading.error().is_none());
    }

    // ===== Chart Derivation Tests =====

    #[test]
    fn test_premium_scatter_preserves_length_and_order() {
        let trips = create_test_trips();
        let config = premium_trips_chart(&trips);

        let SeriesConfig::Scatter(series) = &config.series else {
            panic!("premium trips should be a scatter chart");
        };
        assert_eq!(series.points.len(), trips.len());
        for (point, trip) in series.points.iter().zip(&trips) {
            assert_eq!(point.x, trip.trip_distance);
            assert_eq!(point.y, trip.fare_amount);
            assert_eq!(point.label, format!("Trip {}", trip.trip_id));
        }
    }

    #[test]
    fn test_corporate_columns_preserve_length_and_order() {
        let routes: Vec<RoutePattern> = serde_json::from_str(
            r#"[
                {"pickup_location_id": 186, "dropoff_location_id": 230, "trip_count": 98, "avg_fare": 14.2},
                {"pickup_location_id": 48, "dropoff_location_id": 68, "pickup_zone": "Clinton East", "trip_count": 51, "avg_fare": 9.8}
            ]"#,
        )
        .unwrap();

        let config = corporate_patterns_chart(&routes);
        assert_eq!(config.categories(), &["186 → 230", "Clinton East → 68"]);

        let SeriesConfig::Column(series) = &config.series else {
            panic!("corporate patterns should be a column chart");
        };
        assert_eq!(series.values, vec![98.0, 51.0]);
        assert_eq!(series.overlay.as_ref().unwrap().values.len(), routes.len());
    }

    #[test]
    fn test_passenger_columns_use_fares() {
        let trips = create_test_trips();
        let config = passenger_trips_chart(&trips, 1);

        let SeriesConfig::Column(series) = &config.series else {
            panic!("passenger trips should be a column chart");
        };
        assert_eq!(series.categories, vec!["Trip 11", "Trip 12", "Trip 13"]);
        assert_eq!(series.values, vec![72.5, 55.0, 98.25]);
    }

    // ===== Filter Tests =====

    #[test]
    fn test_min_fare_zero_input() {
        let action = FilterField::MinFare.action("0", ZeroInputPolicy::UseFallback);
        assert_eq!(action, FilterAction::SetMinFare(0.0));

        let filters = Filters::default().apply(action);
        assert_eq!(filters.premium.min_fare, 0.0);
    }

    #[test]
    fn test_limit_zero_input_depends_on_policy() {
        assert_eq!(
            FilterField::PremiumLimit.action("0", ZeroInputPolicy::UseFallback),
            FilterAction::SetPremiumLimit(1)
        );
        assert_eq!(
            FilterField::PremiumLimit.action("0", ZeroInputPolicy::Accept),
            FilterAction::SetPremiumLimit(0)
        );
    }

    #[test]
    fn test_default_policy_keeps_compatibility() {
        assert_eq!(Config::ZERO_INPUT_POLICY, ZeroInputPolicy::UseFallback);
    }

    // ===== Navigation Tests =====

    #[test]
    fn test_every_chart_is_navigable() {
        let keys: Vec<&str> = ChartId::all().iter().map(ChartId::key).collect();
        assert_eq!(
            keys,
            vec![
                "corporatePatterns",
                "topPickups",
                "premiumTrips",
                "tripsByPassenger"
            ]
        );
    }
}
