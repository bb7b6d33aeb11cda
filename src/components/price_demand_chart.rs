use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle,
        LineStyleType, SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::comparison::PriceDemandComparison;
use crate::models::market_pulse::MarketPulse;
use crate::models::price_demand::PriceDemandSeries;
use crate::utils::debounce::{RESIZE_DEBOUNCE_MS, create_debounced_resize_listener};

const PRICE_COLOR: &str = "#f59e0b";
const DEMAND_COLOR: &str = "#4a90d9";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValueAxis {
    /// Left axis, $/MWh.
    Price,
    /// Right axis, MW.
    Power,
}

/// One line on the price/demand chart.
#[derive(Clone, PartialEq, Debug)]
pub struct LineSeries {
    pub name: String,
    pub color: &'static str,
    pub axis: ValueAxis,
    /// `None` leaves a gap in the line.
    pub values: Vec<Option<f64>>,
    pub dashed: bool,
    pub filled: bool,
}

impl LineSeries {
    fn new(name: impl Into<String>, color: &'static str, axis: ValueAxis, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            color,
            axis,
            values,
            dashed: false,
            filled: false,
        }
    }

    fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    fn filled(mut self) -> Self {
        self.filled = true;
        self
    }
}

/// Category axis plus the lines drawn over it.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ChartData {
    pub categories: Vec<String>,
    pub lines: Vec<LineSeries>,
}

impl ChartData {
    /// Price and demand of one NEM region.
    pub fn from_series(series: &PriceDemandSeries) -> Self {
        let (categories, prices, demand) = series.series_data();
        Self {
            categories,
            lines: vec![
                LineSeries::new("Price ($/MWh)", PRICE_COLOR, ValueAxis::Price, prices.into_iter().map(Some).collect()),
                LineSeries::new("Demand (MW)", DEMAND_COLOR, ValueAxis::Power, demand.into_iter().map(Some).collect())
                    .filled(),
            ],
        }
    }

    /// Two regions on shared timestamps; demand lines are dashed.
    pub fn from_comparison(
        comparison: &PriceDemandComparison,
        (label_a, color_a): (&str, &'static str),
        (label_b, color_b): (&str, &'static str),
    ) -> Self {
        Self {
            categories: comparison.timestamps.clone(),
            lines: vec![
                LineSeries::new(format!("{label_a} Price"), color_a, ValueAxis::Price, comparison.price_a.clone()),
                LineSeries::new(format!("{label_b} Price"), color_b, ValueAxis::Price, comparison.price_b.clone()),
                LineSeries::new(format!("{label_a} Demand"), color_a, ValueAxis::Power, comparison.demand_a.clone())
                    .dashed(),
                LineSeries::new(format!("{label_b} Demand"), color_b, ValueAxis::Power, comparison.demand_b.clone())
                    .dashed(),
            ],
        }
    }

    /// WEM price with measured, forecast and non-scheduled generation.
    pub fn from_market_pulse(pulse: &MarketPulse) -> Self {
        let columns = pulse.columns();
        Self {
            categories: columns.timestamps,
            lines: vec![
                LineSeries::new("Price ($/MWh)", PRICE_COLOR, ValueAxis::Price, columns.price.into_iter().map(Some).collect()),
                LineSeries::new("Actual Gen (MW)", "#22c55e", ValueAxis::Power, columns.actual_generation).filled(),
                LineSeries::new("Forecast (MW)", "#3b82f6", ValueAxis::Power, columns.forecast.into_iter().map(Some).collect())
                    .dashed(),
                LineSeries::new(
                    "Non-Sched Gen (MW)",
                    "#FFD565",
                    ValueAxis::Power,
                    columns.non_scheduled.into_iter().map(Some).collect(),
                )
                .filled(),
            ],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PriceDemandChartProps {
    pub title: AttrValue,
    pub data: ChartData,
    pub dark_mode: bool,
    #[prop_or(AttrValue::Static("price-demand-chart"))]
    pub chart_id: AttrValue,
}

#[derive(Clone, PartialEq)]
struct ChartInput {
    title: String,
    data: ChartData,
    dark_mode: bool,
    chart_id: String,
}

/// Dual-axis line chart: prices on the left, megawatts on the right.
#[function_component(PriceDemandChart)]
pub fn price_demand_chart(props: &PriceDemandChartProps) -> Html {
    let container_ref = use_node_ref();
    let input = ChartInput {
        title: props.title.to_string(),
        data: props.data.clone(),
        dark_mode: props.dark_mode,
        chart_id: props.chart_id.to_string(),
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

    if width == 0 || height == 0 || input.data.categories.is_empty() {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(&input.chart_id, &build_chart(input)) {
        tracing::error!(error = ?e, chart = %input.chart_id, "price chart render failed");
    }
}

fn build_chart(input: &ChartInput) -> CharmingChart {
    let (title_color, axis_color, grid_color) = if input.dark_mode {
        ("#e4e4e7", "#a1a1aa", "#404040")
    } else {
        ("#1f2937", "#6b7280", "#e5e7eb")
    };

    let chart = CharmingChart::new()
        .title(
            Title::new()
                .text(input.title.clone())
                .left("center")
                .text_style(TextStyle::new().font_size(14).color(title_color)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Cross)),
        )
        .legend(Legend::new().bottom(0))
        .grid(
            Grid::new()
                .left("8%")
                .right("8%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(input.data.categories.clone())
                .axis_label(AxisLabel::new().color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("$/MWh")
                .position("left")
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("MW")
                .position("right")
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(SplitLine::new().show(false)),
        );

    input.data.lines.iter().fold(chart, |chart, line| {
        let mut series = Line::new()
            .name(line.name.clone())
            .show_symbol(false)
            .connect_nulls(false)
            .y_axis_index(match line.axis {
                ValueAxis::Price => 0.0,
                ValueAxis::Power => 1.0,
            })
            .item_style(ItemStyle::new().color(line.color))
            .line_style(if line.dashed {
                LineStyle::new().width(1.5).type_(LineStyleType::Dashed)
            } else {
                LineStyle::new().width(2)
            })
            .data(line.values.clone());
        if line.filled {
            series = series.area_style(AreaStyle::new().opacity(0.15));
        }
        chart.series(series)
    })
}
