use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Bar,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::comparison::FuelMixComparison;
use crate::utils::debounce::{RESIZE_DEBOUNCE_MS, create_debounced_resize_listener};


/// One bar series: region label and colour.
#[derive(Clone, PartialEq, Debug)]
pub struct SeriesLabel {
    pub name: String,
    pub color: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FuelMixChartProps {
    pub comparison: Rc<FuelMixComparison>,
    pub series_a: SeriesLabel,
    /// Second region; `None` draws a single series.
    #[prop_or_default]
    pub series_b: Option<SeriesLabel>,
    pub unit: AttrValue,
    pub dark_mode: bool,
    /// DOM id of the chart; distinct per chart on one page.
    #[prop_or(AttrValue::Static("fuel-mix-chart"))]
    pub chart_id: AttrValue,
    #[prop_or(AttrValue::Static("Generation by Fuel Type"))]
    pub title: AttrValue,
}

#[derive(Clone, PartialEq)]
struct ChartInput {
    categories: Vec<String>,
    values_a: Vec<f64>,
    values_b: Vec<f64>,
    series_a: SeriesLabel,
    series_b: Option<SeriesLabel>,
    unit: String,
    dark_mode: bool,
    chart_id: String,
    title: String,
}

#[function_component(FuelMixChart)]
pub fn fuel_mix_chart(props: &FuelMixChartProps) -> Html {
    let container_ref = use_node_ref();
    let input = {
        let (categories, values_a, values_b) = props.comparison.series_data();
        ChartInput {
            categories,
            values_a,
            values_b,
            series_a: props.series_a.clone(),
            series_b: props.series_b.clone(),
            unit: props.unit.to_string(),
            dark_mode: props.dark_mode,
            chart_id: props.chart_id.to_string(),
            title: props.title.to_string(),
        }
    };

    {
        let container_ref = container_ref.clone();
        use_effect_with((input, container_ref), |(input, container_ref)| {
            let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                render_chart(&container, input);

                let input = input.clone();
                create_debounced_resize_listener(
                    move || render_chart(&container, &input),
                    RESIZE_DEBOUNCE_MS,
                )
            });

            move || drop(listener)
        });
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.chart_id.clone()} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, input: &ChartInput) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 || input.categories.is_empty() {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(&input.chart_id, &build_chart(input)) {
        tracing::error!(error = ?e, "fuel mix chart render failed");
    }
}

fn build_chart(input: &ChartInput) -> CharmingChart {
    let (title_color, axis_color, grid_color) = if input.dark_mode {
        ("#e4e4e7", "#a1a1aa", "#404040")
    } else {
        ("#1f2937", "#6b7280", "#e5e7eb")
    };

    let title = match &input.series_b {
        Some(b) => format!("{}: {} vs {}", input.title, input.series_a.name, b.name),
        None => input.title.clone(),
    };

    let mut chart = CharmingChart::new()
        .title(
            Title::new()
                .text(title)
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(input.categories.clone())
                .axis_label(AxisLabel::new().rotate(30).color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(input.unit.clone())
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Bar::new()
                .name(input.series_a.name.clone())
                .item_style(ItemStyle::new().color(input.series_a.color))
                .data(input.values_a.clone()),
        );

    if let Some(b) = &input.series_b {
        chart = chart.legend(Legend::new()).series(
            Bar::new()
                .name(b.name.clone())
                .item_style(ItemStyle::new().color(b.color))
                .data(input.values_b.clone()),
        );
    }

    chart
}
