use yew::prelude::*;

use crate::components::corporate_patterns::CorporatePatterns;
use crate::components::filter_panel::FilterPanel;
use crate::components::navbar::Navbar;
use crate::components::passenger_trips::PassengerTrips;
use crate::components::pickup_hotspots::PickupHotspots;
use crate::components::premium_trips::PremiumTrips;
use crate::hooks::use_active_chart::use_active_chart;
use crate::hooks::use_filters::use_filters;
use crate::models::chart_id::ChartId;

/// Owns filter state and the chart selection; renders exactly the active chart.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let active = use_active_chart();
    let filters = use_filters();

    let chart = match active.active {
        ChartId::CorporatePatterns => html! {
            <CorporatePatterns filter={filters.filters.patterns} />
        },
        ChartId::TopPickups => html! {
            <PickupHotspots filter={filters.filters.hotspots} />
        },
        ChartId::PremiumTrips => html! {
            <PremiumTrips filter={filters.filters.premium} />
        },
        ChartId::TripsByPassenger => html! {
            <PassengerTrips filter={filters.filters.passenger} />
        },
    };

    html! {
        <div class="dashboard">
            <Navbar active={active.active} on_select={active.select.clone()} />
            <FilterPanel filters={filters.filters} on_change={filters.dispatch.clone()} />
            <div class="chart-area">
                {chart}
            </div>
        </div>
    }
}
