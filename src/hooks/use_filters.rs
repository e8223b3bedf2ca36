use gloo_storage::Storage;
use yew::prelude::*;

use crate::config::Config;
use crate::models::filters::{FilterAction, Filters};

/// Handle returned by `use_filters` hook
#[derive(Clone, PartialEq)]
pub struct FiltersHandle {
    pub filters: Filters,
    pub dispatch: Callback<FilterAction>,
}

/// Filter values for every chart, restored from and saved to localStorage
#[hook]
pub fn use_filters() -> FiltersHandle {
    let filters = use_reducer(|| load_filters().unwrap_or_default());

    {
        let current = *filters;
        use_effect_with(current, move |filters| {
            save_filters(filters);
            || ()
        });
    }

    let dispatch = {
        let filters = filters.clone();
        Callback::from(move |action| filters.dispatch(action))
    };

    FiltersHandle {
        filters: *filters,
        dispatch,
    }
}

fn load_filters() -> Option<Filters> {
    gloo_storage::LocalStorage::get::<Filters>(Config::FILTERS_KEY)
        .ok()
        .map(|filters| filters.normalized(Config::ZERO_INPUT_POLICY))
}

fn save_filters(filters: &Filters) {
    if let Err(e) = gloo_storage::LocalStorage::set(Config::FILTERS_KEY, filters) {
        gloo::console::warn!(&format!("Failed to save filters: {e:?}"));
    }
}
