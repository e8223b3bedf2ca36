use yew::prelude::*;

use crate::components::chart::ChartCanvas;
use crate::components::status::{ChartPhase, Status};
use crate::hooks::use_fetch::use_fetch;
use crate::models::chart_config;
use crate::models::filters::PassengerFilter;
use crate::services::api::get_trips_by_passenger_count;

const CHART_ID: &str = "passenger-trips-chart";

#[derive(Properties, PartialEq)]
pub struct PassengerTripsProps {
    pub filter: PassengerFilter,
}

#[function_component(PassengerTrips)]
pub fn passenger_trips(props: &PassengerTripsProps) -> Html {
    let state = use_fetch(props.filter, |filter: &PassengerFilter| {
        get_trips_by_passenger_count(filter.passenger_count, filter.limit)
    });

    let config = use_memo(
        (state.data().cloned(), props.filter.passenger_count),
        |(data, passenger_count)| {
            chart_config::passenger_trips_chart(
                data.as_ref().map(|rows| rows.as_slice()).unwrap_or_default(),
                *passenger_count,
            )
        },
    );

    match ChartPhase::of(&*state) {
        ChartPhase::Ready => html! {
            <div class="card">
                <ChartCanvas id={CHART_ID} {config} />
            </div>
        },
        phase => html! { <Status subject="trips by passenger count" {phase} /> },
    }
}
