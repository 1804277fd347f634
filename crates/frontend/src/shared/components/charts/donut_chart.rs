use leptos::prelude::*;

use super::geometry::{donut_arc, palette_color, slice_angles};
use crate::shared::number_format::format_decimal;

const SIZE: f64 = 220.0;
const OUTER_RADIUS: f64 = 100.0;
const INNER_RADIUS: f64 = 60.0;

/// Share-of-total chart with a legend
#[component]
pub fn DonutChart(
    title: String,
    /// (label, value) pairs; values must be non-negative
    slices: Vec<(String, f64)>,
) -> impl IntoView {
    let values: Vec<f64> = slices.iter().map(|(_, v)| *v).collect();
    let angles = slice_angles(&values);

    if angles.is_empty() {
        return view! {
            <div class="chart-card">
                <div class="chart-card__title">{title}</div>
                <div class="chart-card__empty">"Sem dados para o período selecionado"</div>
            </div>
        }
        .into_any();
    }

    let total: f64 = values.iter().sum();
    let center = SIZE / 2.0;

    let arcs = angles
        .iter()
        .enumerate()
        .filter(|(_, (start, end))| end > start)
        .map(|(i, (start, end))| {
            let d = donut_arc(center, center, OUTER_RADIUS, INNER_RADIUS, *start, *end);
            view! { <path d=d fill=palette_color(i) stroke="#fff" stroke-width="1" /> }
        })
        .collect_view();

    let legend = slices
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let percent = format!("{}%", format_decimal(value / total * 100.0, 1));
            let swatch = format!("background: {};", palette_color(i));
            view! {
                <li class="chart-legend__item">
                    <span class="chart-legend__swatch" style=swatch></span>
                    <span class="chart-legend__label">{label}</span>
                    <span class="chart-legend__value">{percent}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="chart-card">
            <div class="chart-card__title">{title}</div>
            <div class="chart-donut">
                <svg
                    viewBox=format!("0 0 {} {}", SIZE, SIZE)
                    class="chart chart--donut"
                    style="width: 220px; height: 220px;"
                >
                    {arcs}
                </svg>
                <ul class="chart-legend">{legend}</ul>
            </div>
        </div>
    }
    .into_any()
}
