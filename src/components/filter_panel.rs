use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::filters::{FilterAction, FilterField, Filters};

/// Inputs grouped by the chart they drive.
const GROUPS: &[(&str, &[FilterField])] = &[
    ("Corporate Patterns", &[FilterField::PatternsLimit]),
    (
        "Premium Trips",
        &[
            FilterField::PremiumLimit,
            FilterField::MinFare,
            FilterField::MinDistance,
        ],
    ),
    (
        "Pickup Hotspots",
        &[FilterField::HotspotsLimit, FilterField::HotspotsDays],
    ),
    (
        "Trips by Passenger Count",
        &[FilterField::PassengerCount, FilterField::PassengerLimit],
    ),
];

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub filters: Filters,
    pub on_change: Callback<FilterAction>,
}

/// Controlled form for every chart's numeric filters.
#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let on_reset = props.on_change.reform(|_: MouseEvent| FilterAction::Reset);

    html! {
        <div class="filters">
            {
                GROUPS.iter().map(|(title, fields)| html! {
                    <div class="filter-group" key={*title}>
                        <h3>{*title}</h3>
                        {
                            fields.iter().map(|field| html! {
                                <NumberField
                                    field={*field}
                                    value={field.value(&props.filters)}
                                    on_change={props.on_change.clone()}
                                />
                            }).collect::<Html>()
                        }
                    </div>
                }).collect::<Html>()
            }
            <button class="filter-reset" onclick={on_reset}>{"Reset filters"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NumberFieldProps {
    field: FilterField,
    value: f64,
    on_change: Callback<FilterAction>,
}

#[function_component(NumberField)]
fn number_field(props: &NumberFieldProps) -> Html {
    let field = props.field;
    let oninput = props.on_change.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        field.action(&input.value(), Config::ZERO_INPUT_POLICY)
    });

    html! {
        <label>
            {field.label()}
            <input
                type="number"
                min={field.min().to_string()}
                step={field.step().to_string()}
                value={props.value.to_string()}
                {oninput}
            />
        </label>
    }
}
