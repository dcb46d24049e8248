//! Line chart of sales over time, drawn as inline SVG.

#[cfg(test)]
#[path = "sales_chart_test.rs"]
mod sales_chart_test;

use leptos::prelude::*;

use crate::net::types::ChartDataPoint;
use crate::util::format::format_brl;
use crate::util::i18n::{Locale, Text};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 300.0;
const PADDING: f64 = 24.0;

/// Map data points into SVG coordinates inside a `width` x `height` box.
///
/// Points are spaced evenly along x in input order. The y range always
/// includes zero; a single point sits in the horizontal center.
pub fn plot_points(points: &[ChartDataPoint], width: f64, height: f64, padding: f64) -> Vec<(f64, f64)> {
    let lo = points.iter().map(|p| p.value).fold(0.0_f64, f64::min);
    let hi = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let span = if hi > lo { hi - lo } else { 1.0 };
    let inner_w = width - 2.0 * padding;
    let inner_h = height - 2.0 * padding;
    #[allow(clippy::cast_precision_loss)]
    let step = if points.len() > 1 { inner_w / (points.len() - 1) as f64 } else { 0.0 };

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            #[allow(clippy::cast_precision_loss)]
            let x = if points.len() == 1 { width / 2.0 } else { padding + step * i as f64 };
            let y = padding + (1.0 - (p.value - lo) / span) * inner_h;
            (x, y)
        })
        .collect()
}

/// Render coordinates as an SVG `points` attribute.
pub fn polyline_attr(coords: &[(f64, f64)]) -> String {
    coords.iter().map(|(x, y)| format!("{x:.1},{y:.1}")).collect::<Vec<_>>().join(" ")
}

#[component]
pub fn SalesChart(points: Vec<ChartDataPoint>) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let coords = plot_points(&points, WIDTH, HEIGHT, PADDING);
    let line = polyline_attr(&coords);
    let markers = points
        .iter()
        .zip(&coords)
        .map(|(p, &(x, y))| {
            view! {
                <g class="sales-chart__point">
                    <circle cx=x cy=y r="4"></circle>
                    <text class="sales-chart__value" x=x y={y - 8.0} text-anchor="middle">
                        {format_brl(p.value)}
                    </text>
                    <text class="sales-chart__label" x=x y={HEIGHT - 4.0} text-anchor="middle">
                        {p.date.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <section class="sales-chart">
            <h3 class="sales-chart__title">{move || locale.get().text(Text::ChartTitle)}</h3>
            <svg class="sales-chart__canvas" viewBox={format!("0 0 {WIDTH} {HEIGHT}")} role="img">
                <line
                    class="sales-chart__axis"
                    x1=PADDING
                    y1={HEIGHT - PADDING}
                    x2={WIDTH - PADDING}
                    y2={HEIGHT - PADDING}
                ></line>
                <polyline class="sales-chart__line" points=line fill="none"></polyline>
                {markers}
            </svg>
            <p class="sales-chart__legend">{move || locale.get().text(Text::ChartSeries)}</p>
        </section>
    }
}
