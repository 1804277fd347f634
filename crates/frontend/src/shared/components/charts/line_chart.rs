use leptos::prelude::*;

use super::geometry::{line_path, nice_max, scale};
use crate::shared::number_format::format_compact;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 280.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 32.0;
const Y_TICKS: usize = 4;
const X_LABELS: usize = 6;

/// Line chart of a single series over evenly spaced categories (days)
#[component]
pub fn LineChart(
    title: String,
    /// X axis labels, one per value
    labels: Vec<String>,
    values: Vec<f64>,
    #[prop(default = "#667eea")] color: &'static str,
) -> impl IntoView {
    if values.is_empty() {
        return view! {
            <div class="chart-card">
                <div class="chart-card__title">{title}</div>
                <div class="chart-card__empty">"Sem dados para o período selecionado"</div>
            </div>
        }
        .into_any();
    }

    let plot_width = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let max = nice_max(values.iter().cloned().fold(0.0, f64::max));
    let path = line_path(&values, plot_width, plot_height, max);

    let y_ticks: Vec<(f64, String)> = (0..=Y_TICKS)
        .map(|i| {
            let value = max * i as f64 / Y_TICKS as f64;
            (MARGIN_TOP + plot_height - scale(value, max, plot_height), format_compact(value))
        })
        .collect();

    let n = labels.len();
    let step = (n / X_LABELS).max(1);
    let x_ticks: Vec<(f64, String)> = labels
        .into_iter()
        .enumerate()
        .filter(|(i, _)| i % step == 0)
        .map(|(i, label)| {
            let x = if n > 1 {
                MARGIN_LEFT + plot_width * i as f64 / (n - 1) as f64
            } else {
                MARGIN_LEFT + plot_width / 2.0
            };
            (x, label)
        })
        .collect();

    view! {
        <div class="chart-card">
            <div class="chart-card__title">{title}</div>
            <svg
                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                class="chart chart--line"
                style="width: 100%; height: auto;"
            >
                {y_ticks.into_iter().map(|(y, label)| {
                    view! {
                        <line
                            x1=MARGIN_LEFT.to_string()
                            y1=y.to_string()
                            x2=(CHART_WIDTH - MARGIN_RIGHT).to_string()
                            y2=y.to_string()
                            stroke="#e2e8f0"
                            stroke-width="1"
                        />
                        <text
                            x=(MARGIN_LEFT - 8.0).to_string()
                            y=y.to_string()
                            text-anchor="end"
                            dominant-baseline="middle"
                            font-size="11"
                            fill="#718096"
                        >
                            {label}
                        </text>
                    }
                }).collect_view()}

                {x_ticks.into_iter().map(|(x, label)| {
                    view! {
                        <text
                            x=x.to_string()
                            y=(CHART_HEIGHT - MARGIN_BOTTOM + 18.0).to_string()
                            text-anchor="middle"
                            font-size="11"
                            fill="#718096"
                        >
                            {label}
                        </text>
                    }
                }).collect_view()}

                <g transform=format!("translate({},{})", MARGIN_LEFT, MARGIN_TOP)>
                    <path
                        d=path
                        fill="none"
                        stroke=color
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    />
                </g>
            </svg>
        </div>
    }
    .into_any()
}
