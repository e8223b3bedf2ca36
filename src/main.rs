use yew::prelude::*;

use taxi_dashboard::components::Dashboard;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="app-container">
            <main class="app-main">
                <Dashboard />
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
