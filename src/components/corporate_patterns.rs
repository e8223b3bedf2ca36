use yew::prelude::*;

use crate::components::chart::ChartCanvas;
use crate::components::status::{ChartPhase, Status};
use crate::hooks::use_fetch::use_fetch;
use crate::models::chart_config;
use crate::models::filters::PatternsFilter;
use crate::services::api::get_corporate_patterns;

const CHART_ID: &str = "corporate-patterns-chart";

#[derive(Properties, PartialEq)]
pub struct CorporatePatternsProps {
    pub filter: PatternsFilter,
}

/// Column chart of the most frequent pickup → dropoff routes.
#[function_component(CorporatePatterns)]
pub fn corporate_patterns(props: &CorporatePatternsProps) -> Html {
    let state = use_fetch(props.filter, |filter: &PatternsFilter| {
        get_corporate_patterns(filter.limit)
    });

    let config = use_memo(state.data().cloned(), |data| {
        chart_config::corporate_patterns_chart(data.as_ref().map(|rows| rows.as_slice()).unwrap_or_default())
    });

    match ChartPhase::of(&*state) {
        ChartPhase::Ready => html! {
            <div class="card">
                <ChartCanvas id={CHART_ID} {config} />
            </div>
        },
        phase => html! { <Status subject="corporate patterns" {phase} /> },
    }
}
