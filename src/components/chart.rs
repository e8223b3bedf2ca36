use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    datatype::DataPointItem,
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, LineStyle, LineStyleType, SplitLine,
        TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Line, Scatter},
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::chart_config::{CategorySeries, ChartConfig, ScatterSeries, SeriesConfig};
use crate::utils::debounce::debounced_resize_listener;

const TITLE_COLOR: &str = "#1f2937";
const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";

#[derive(Properties, PartialEq)]
pub struct ChartCanvasProps {
    /// DOM id of the element the chart is drawn into; unique per chart.
    pub id: AttrValue,
    pub config: Rc<ChartConfig>,
}

/// Draws a `ChartConfig` and redraws it when the window is resized.
#[function_component(ChartCanvas)]
pub fn chart_canvas(props: &ChartCanvasProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.config.clone(), props.id.clone(), container_ref),
            |(config, id, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, id, config);

                    let config = config.clone();
                    let id = id.clone();
                    debounced_resize_listener(Config::RESIZE_DEBOUNCE_MS, move || {
                        render_chart(&container, &id, &config);
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.id.clone()} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, id: &str, config: &ChartConfig) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(config);
    if let Err(e) = WasmRenderer::new(width, height).render(id, &chart) {
        gloo::console::error!(&format!("Render error: {e:?}"));
    }
}

/// Translates a `ChartConfig` into charming's option tree.
pub fn build_chart(config: &ChartConfig) -> CharmingChart {
    let chart = CharmingChart::new()
        .title(
            Title::new()
                .text(config.title.as_str())
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(TITLE_COLOR)),
        )
        .grid(
            Grid::new()
                .left("6%")
                .right("6%")
                .bottom("12%")
                .contain_label(true),
        );

    match &config.series {
        SeriesConfig::Column(series) => column_chart(chart, config, series),
        SeriesConfig::Bar(series) => bar_chart(chart, config, series),
        SeriesConfig::Scatter(series) => scatter_chart(chart, config, series),
    }
}

fn column_chart(chart: CharmingChart, config: &ChartConfig, series: &CategorySeries) -> CharmingChart {
    let chart = chart
        .tooltip(axis_tooltip(&config.tooltip))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name(config.x_axis_name.as_str())
                .data(series.categories.clone())
                .axis_label(AxisLabel::new().rotate(30).color(AXIS_COLOR)),
        )
        .y_axis(value_axis(&config.y_axis_name))
        .series(
            Bar::new()
                .name(series.name.as_str())
                .data(series.values.clone())
                .bar_width("60%"),
        );

    match &series.overlay {
        Some(overlay) => chart
            .legend(Legend::new().bottom(0))
            .y_axis(value_axis(&overlay.axis_name))
            .series(
                Line::new()
                    .name(overlay.name.as_str())
                    .y_axis_index(1)
                    // NaN is drawn as a gap
                    .data(
                        overlay
                            .values
                            .iter()
                            .map(|v| v.unwrap_or(f64::NAN))
                            .collect::<Vec<f64>>(),
                    ),
            ),
        None => chart,
    }
}

fn bar_chart(chart: CharmingChart, config: &ChartConfig, series: &CategorySeries) -> CharmingChart {
    chart
        .tooltip(axis_tooltip(&config.tooltip))
        .x_axis(value_axis(&config.x_axis_name))
        .y_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name(config.y_axis_name.as_str())
                .data(series.categories.clone())
                .axis_label(AxisLabel::new().color(AXIS_COLOR)),
        )
        .series(
            Bar::new()
                .name(series.name.as_str())
                .data(series.values.clone())
                .bar_width("60%"),
        )
}

fn scatter_chart(chart: CharmingChart, config: &ChartConfig, series: &ScatterSeries) -> CharmingChart {
    // Named items so `{b}` in the tooltip resolves to the point label
    let points: Vec<DataPointItem> = series
        .points
        .iter()
        .map(|p| DataPointItem::new(vec![p.x, p.y]).name(p.label.as_str()))
        .collect();

    chart
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .formatter(config.tooltip.as_str()),
        )
        .x_axis(value_axis(&config.x_axis_name))
        .y_axis(value_axis(&config.y_axis_name))
        .series(
            Scatter::new()
                .name(series.name.as_str())
                .symbol_size(8)
                .data(points),
        )
}

fn axis_tooltip(formatter: &str) -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
        .formatter(formatter)
}

fn value_axis(name: &str) -> Axis {
    Axis::new()
        .type_(AxisType::Value)
        .name(name)
        .axis_label(AxisLabel::new().color(AXIS_COLOR))
        .split_line(
            SplitLine::new().line_style(
                LineStyle::new()
                    .color(GRID_COLOR)
                    .type_(LineStyleType::Dashed),
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chart_config::{pickup_hotspots_chart, premium_trips_chart};
    use crate::models::trips::{PickupHotspot, TripRecord};

    #[test]
    fn test_scatter_points_carry_trip_labels() {
        let trips: Vec<TripRecord> = serde_json::from_str(
            r#"[{"trip_id": 4242, "trip_distance": 12.5, "fare_amount": 61.0}]"#,
        )
        .unwrap();

        let rendered = build_chart(&premium_trips_chart(&trips)).to_string();
        assert!(rendered.contains("Trip 4242"));
        assert!(rendered.contains("{b}"));
    }

    #[test]
    fn test_bar_chart_lists_categories() {
        let hotspots: Vec<PickupHotspot> = serde_json::from_str(
            r#"[{"pickup_location_id": 132, "pickup_zone": "JFK Airport", "trip_count": 412}]"#,
        )
        .unwrap();

        let rendered = build_chart(&pickup_hotspots_chart(&hotspots, 7)).to_string();
        assert!(rendered.contains("JFK Airport"));
        assert!(rendered.contains("last 7 days"));
    }
}
