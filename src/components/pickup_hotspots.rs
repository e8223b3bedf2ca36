use yew::prelude::*;

use crate::components::chart::ChartCanvas;
use crate::components::status::{ChartPhase, Status};
use crate::hooks::use_fetch::use_fetch;
use crate::models::chart_config;
use crate::models::filters::HotspotsFilter;
use crate::services::api::get_top_pickups;

const CHART_ID: &str = "pickup-hotspots-chart";

#[derive(Properties, PartialEq)]
pub struct PickupHotspotsProps {
    pub filter: HotspotsFilter,
}

/// Horizontal bar chart of the busiest pickup locations in the day window.
#[function_component(PickupHotspots)]
pub fn pickup_hotspots(props: &PickupHotspotsProps) -> Html {
    let state = use_fetch(props.filter, |filter: &HotspotsFilter| {
        get_top_pickups(filter.limit, filter.days)
    });

    let config = use_memo(
        (state.data().cloned(), props.filter.days),
        |(data, days)| {
            chart_config::pickup_hotspots_chart(
                data.as_ref().map(|rows| rows.as_slice()).unwrap_or_default(),
                *days,
            )
        },
    );

    match ChartPhase::of(&*state) {
        ChartPhase::Ready => html! {
            <div class="card">
                <ChartCanvas id={CHART_ID} {config} />
            </div>
        },
        phase => html! { <Status subject="hotspots" {phase} /> },
    }
}
