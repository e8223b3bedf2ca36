use gloo_storage::Storage;
use yew::prelude::*;

use crate::config::Config;
use crate::models::chart_id::ChartId;

/// Handle returned by `use_active_chart` hook
#[derive(Clone, PartialEq)]
pub struct ActiveChartHandle {
    pub active: ChartId,
    pub select: Callback<ChartId>,
}

/// Custom hook for the selected chart with localStorage persistence
#[hook]
pub fn use_active_chart() -> ActiveChartHandle {
    // Load selection from localStorage, fallback to the first chart
    let active = use_state(|| load_active_chart().unwrap_or_default());

    // Effect: Persist selection to localStorage on change
    {
        let active_value = *active;
        use_effect_with(active_value, move |active| {
            save_active_chart(*active);
            || ()
        });
    }

    let select = {
        let active = active.clone();
        Callback::from(move |chart| active.set(chart))
    };

    ActiveChartHandle {
        active: *active,
        select,
    }
}

fn load_active_chart() -> Option<ChartId> {
    let key: String = gloo_storage::LocalStorage::get(Config::ACTIVE_CHART_KEY).ok()?;
    match key.parse() {
        Ok(chart) => Some(chart),
        Err(e) => {
            gloo::console::warn!(&format!("Ignoring stored chart: {e}"));
            None
        }
    }
}

fn save_active_chart(chart: ChartId) {
    if let Err(e) = gloo_storage::LocalStorage::set(Config::ACTIVE_CHART_KEY, chart.to_string()) {
        gloo::console::warn!(&format!("Failed to save active chart: {e:?}"));
    }
}
