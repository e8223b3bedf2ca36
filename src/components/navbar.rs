use yew::prelude::*;

use crate::models::chart_id::ChartId;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub active: ChartId,
    pub on_select: Callback<ChartId>,
}

/// Chart selection list
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class="navbar" aria-label="Select chart">
            <h2>{"NYC Taxi Dashboard"}</h2>
            <ul class="nav-links">
                {
                    ChartId::all().iter().map(|chart| {
                        let chart = *chart;
                        let onclick = props.on_select.reform(move |_: MouseEvent| chart);
                        let class = classes!((chart == props.active).then_some("active"));
                        html! {
                            <li key={chart.key()} {class} {onclick}>{chart.label()}</li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        </nav>
    }
}
