use yew::prelude::*;

use crate::components::chart::ChartCanvas;
use crate::components::status::{ChartPhase, Status};
use crate::hooks::use_fetch::use_fetch;
use crate::models::chart_config;
use crate::models::filters::PremiumFilter;
use crate::services::api::get_premium_trips;

const CHART_ID: &str = "premium-trips-chart";

#[derive(Properties, PartialEq)]
pub struct PremiumTripsProps {
    pub filter: PremiumFilter,
}

/// Fare against distance for trips above both thresholds.
#[function_component(PremiumTrips)]
pub fn premium_trips(props: &PremiumTripsProps) -> Html {
    let state = use_fetch(props.filter, |filter: &PremiumFilter| {
        get_premium_trips(filter.limit, filter.min_fare, filter.min_distance)
    });

    let config = use_memo(state.data().cloned(), |data| {
        chart_config::premium_trips_chart(data.as_ref().map(|rows| rows.as_slice()).unwrap_or_default())
    });

    match ChartPhase::of(&*state) {
        ChartPhase::Ready => html! {
            <div class="card">
                <ChartCanvas id={CHART_ID} {config} />
            </div>
        },
        phase => html! { <Status subject="premium trips" {phase} /> },
    }
}
