use crate::hooks::use_fetch::FetchState;
use yew::prelude::*;

/// Which of the mutually exclusive views a chart card shows.
#[derive(Clone, PartialEq, Debug)]
pub enum ChartPhase {
    Loading,
    Error(String),
    /// The fetch succeeded with an empty sequence.
    Empty,
    /// Non-empty data, draw the chart.
    Ready,
}

impl ChartPhase {
    pub fn of<T>(state: &FetchState<Vec<T>>) -> Self {
        match state {
            FetchState::Loading => Self::Loading,
            FetchState::Error(e) => Self::Error(e.to_string()),
            FetchState::Loaded(rows) if rows.is_empty() => Self::Empty,
            FetchState::Loaded(_) => Self::Ready,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    /// What is being loaded, e.g. "premium trips".
    pub subject: AttrValue,
    pub phase: ChartPhase,
}

/// Placeholder card shown instead of a chart.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.phase {
        ChartPhase::Loading => html! {
            <div class="card status loading">
                <div class="spinner"></div>
                <p>{format!("Loading {}…", props.subject)}</p>
            </div>
        },
        ChartPhase::Error(msg) => html! {
            <div class="card status error">
                <p>{"Error: "}{msg}</p>
            </div>
        },
        ChartPhase::Empty => html! {
            <div class="card status empty">
                <p>{"No data."}</p>
            </div>
        },
        ChartPhase::Ready => html! {},
    }
}
