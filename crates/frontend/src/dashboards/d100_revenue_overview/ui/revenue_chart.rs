use contracts::dashboards::d100_revenue_overview::{Bucket, RevenueSeriesResponse};
use contracts::enums::TimeRange;
use leptos::prelude::*;

use super::plot::{self, ChartType, PlotArea};
use crate::shared::chart_format::{
    format_axis_label, format_revenue, format_revenue_tick, format_thousands,
    format_tooltip_label,
};
use crate::shared::components::ui::Select;
use crate::shared::config::get_config;

const TICK_COUNT: usize = 5;

fn time_range_options() -> Vec<(&'static str, &'static str)> {
    TimeRange::all()
        .into_iter()
        .map(|r| (r.code(), r.display_name()))
        .collect()
}

fn num(value: f64) -> String {
    format!("{:.1}", value)
}

/// Native SVG tooltip text for one point
fn tooltip_text(bucket: &Bucket) -> String {
    format!(
        "{}\nRevenue: {}\nOrders: {}",
        format_tooltip_label(&bucket.label),
        format_revenue(bucket.revenue),
        format_thousands(i64::from(bucket.orders))
    )
}

/// Revenue and orders chart with time range and chart type switches
///
/// Owns only view state; the series itself is loaded by the dashboard.
#[component]
pub fn RevenueChart(
    #[prop(into)]
    series: Signal<Option<RevenueSeriesResponse>>,
    #[prop(into)]
    loading: Signal<bool>,
    time_range: RwSignal<TimeRange>,
) -> impl IntoView {
    let chart_type = RwSignal::new(get_config().chart.default_chart_type);

    let on_range_change = Callback::new(move |code: String| match code.parse::<TimeRange>() {
        Ok(range) => time_range.set(range),
        Err(e) => log::error!("Ignoring time range change: {}", e),
    });

    view! {
        <div class="chart-card">
            <div class="chart-card__header">
                <div>
                    <h3 class="chart-card__title">"Revenue Overview"</h3>
                    <p class="chart-card__subtitle">"Revenue and orders"</p>
                </div>

                <div class="chart-card__controls">
                    <div class="chart-card__legend">
                        <span class="legend-dot legend-dot--revenue"></span>
                        <span>"Revenue"</span>
                        <span class="legend-dot legend-dot--orders"></span>
                        <span>"Orders"</span>
                    </div>

                    <div class="tabs">
                        {ChartType::all()
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if chart_type.get() == t { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
                                        }
                                        on:click=move |_| chart_type.set(t)
                                    >
                                        {t.display_name()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Select
                        label="Range"
                        value=Signal::derive(move || time_range.get().code().to_string())
                        on_change=on_range_change
                        options=time_range_options()
                    />
                </div>
            </div>

            <div class="chart-card__body">
                {move || {
                    if loading.get() {
                        return view! {
                            <div class="chart-card__loading">
                                <div class="spinner"></div>
                                <p>"Loading chart data..."</p>
                            </div>
                        }
                        .into_any();
                    }
                    match series.get() {
                        Some(response) => render_plot(&response, chart_type.get()),
                        None => view! { <div class="chart-card__empty">"No data"</div> }.into_any(),
                    }
                }}
            </div>
        </div>
    }
}

fn render_plot(response: &RevenueSeriesResponse, chart_type: ChartType) -> AnyView {
    let area = PlotArea::default();
    let layout = plot::layout(&response.buckets, &area, chart_type);
    let right_edge = area.width - area.right;

    let revenue_axis = layout
        .revenue_domain
        .ticks(TICK_COUNT)
        .into_iter()
        .map(|tick| {
            let y = num(area.y_for(tick, layout.revenue_domain));
            view! {
                <g class="chart__grid">
                    <line x1=num(area.left) y1=y.clone() x2=num(right_edge) y2=y.clone()></line>
                    <text x=num(area.left - 6.0) y=y text-anchor="end" class="chart__tick">
                        {format_revenue_tick(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let orders_axis = layout
        .orders_domain
        .ticks(TICK_COUNT)
        .into_iter()
        .map(|tick| {
            view! {
                <text
                    x=num(right_edge + 6.0)
                    y=num(area.y_for(tick, layout.orders_domain))
                    text-anchor="start"
                    class="chart__tick"
                >
                    {format!("{:.0}", tick)}
                </text>
            }
        })
        .collect_view();

    let x_labels = response
        .buckets
        .iter()
        .zip(&layout.points)
        .map(|(bucket, point)| {
            view! {
                <text x=num(point.x) y=num(area.height - 10.0) text-anchor="middle" class="chart__tick">
                    {format_axis_label(&bucket.label)}
                </text>
            }
        })
        .collect_view();

    let marks = match chart_type {
        ChartType::Line => {
            let dots = response
                .buckets
                .iter()
                .zip(&layout.points)
                .map(|(bucket, point)| {
                    view! {
                        <g class="chart__point">
                            <title>{tooltip_text(bucket)}</title>
                            <circle class="chart__dot chart__dot--revenue" cx=num(point.x) cy=num(point.revenue_y) r="4"></circle>
                            <circle class="chart__dot chart__dot--orders" cx=num(point.x) cy=num(point.orders_y) r="4"></circle>
                        </g>
                    }
                })
                .collect_view();

            view! {
                <polyline
                    class="chart__line chart__line--revenue"
                    fill="none"
                    points=plot::polyline_points(&layout.points, |p| p.revenue_y)
                ></polyline>
                <polyline
                    class="chart__line chart__line--orders"
                    fill="none"
                    points=plot::polyline_points(&layout.points, |p| p.orders_y)
                ></polyline>
                {dots}
            }
            .into_any()
        }
        ChartType::Bar => {
            let preferred = if response.time_range == TimeRange::Week { 20.0 } else { 10.0 };
            let width = plot::bar_width(preferred, layout.band_width);
            let baseline = area.baseline();

            response
                .buckets
                .iter()
                .zip(&layout.points)
                .map(|(bucket, point)| {
                    view! {
                        <g class="chart__point">
                            <title>{tooltip_text(bucket)}</title>
                            <rect
                                class="chart__bar chart__bar--revenue"
                                x=num(point.x - width)
                                y=num(point.revenue_y)
                                width=num(width)
                                height=num(baseline - point.revenue_y)
                            ></rect>
                            <rect
                                class="chart__bar chart__bar--orders"
                                x=num(point.x)
                                y=num(point.orders_y)
                                width=num(width)
                                height=num(baseline - point.orders_y)
                            ></rect>
                        </g>
                    }
                })
                .collect_view()
                .into_any()
        }
    };

    view! {
        <svg
            class="chart__svg"
            viewBox=format!("0 0 {} {}", area.width, area.height)
            preserveAspectRatio="none"
        >
            {revenue_axis}
            {orders_axis}
            {marks}
            {x_labels}
        </svg>
    }
    .into_any()
}
