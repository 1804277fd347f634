use leptos::prelude::*;

use super::geometry::{nice_max, palette_color, scale};
use crate::shared::number_format::format_compact;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 56.0;
const BAR_GAP: f64 = 0.25;

/// One bar; bars with the same `group` share a colour
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub group: String,
    pub value: f64,
}

/// Distinct groups in first-appearance order
pub fn bar_groups(bars: &[BarDatum]) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    for bar in bars {
        if !groups.contains(&bar.group) {
            groups.push(bar.group.clone());
        }
    }
    groups
}

/// Vertical bar chart coloured by group
#[component]
pub fn BarChart(title: String, bars: Vec<BarDatum>) -> impl IntoView {
    if bars.is_empty() {
        return view! {
            <div class="chart-card">
                <div class="chart-card__title">{title}</div>
                <div class="chart-card__empty">"Sem dados para o período selecionado"</div>
            </div>
        }
        .into_any();
    }

    let groups = bar_groups(&bars);
    let color_of = |group: &str| {
        let index = groups.iter().position(|g| g == group).unwrap_or(0);
        palette_color(index)
    };

    let plot_width = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let max = nice_max(bars.iter().map(|b| b.value).fold(0.0, f64::max));
    let slot = plot_width / bars.len() as f64;
    let bar_width = slot * (1.0 - BAR_GAP);
    let baseline = MARGIN_TOP + plot_height;

    let rects = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let height = scale(bar.value, max, plot_height);
            let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
            let label_x = x + bar_width / 2.0;
            let label_y = baseline + 14.0;
            view! {
                <rect
                    x=format!("{:.2}", x)
                    y=format!("{:.2}", baseline - height)
                    width=format!("{:.2}", bar_width)
                    height=format!("{:.2}", height)
                    fill=color_of(&bar.group)
                    rx="3"
                />
                <text
                    x=format!("{:.2}", label_x)
                    y=format!("{:.2}", label_y)
                    text-anchor="end"
                    font-size="10"
                    fill="#4a5568"
                    transform=format!("rotate(-30 {:.2} {:.2})", label_x, label_y)
                >
                    {bar.label.clone()}
                </text>
            }
        })
        .collect_view();

    let y_labels = [0.0, 0.5, 1.0]
        .into_iter()
        .map(|fraction| {
            let value = max * fraction;
            let y = baseline - scale(value, max, plot_height);
            view! {
                <text
                    x=(MARGIN_LEFT - 8.0).to_string()
                    y=format!("{:.2}", y)
                    text-anchor="end"
                    dominant-baseline="middle"
                    font-size="11"
                    fill="#718096"
                >
                    {format_compact(value)}
                </text>
            }
        })
        .collect_view();

    let legend = groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let swatch = format!("background: {};", palette_color(i));
            view! {
                <li class="chart-legend__item">
                    <span class="chart-legend__swatch" style=swatch></span>
                    <span class="chart-legend__label">{group.clone()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="chart-card">
            <div class="chart-card__title">{title}</div>
            <svg
                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                class="chart chart--bar"
                style="width: 100%; height: auto;"
            >
                <line
                    x1=MARGIN_LEFT.to_string()
                    y1=baseline.to_string()
                    x2=(CHART_WIDTH - MARGIN_RIGHT).to_string()
                    y2=baseline.to_string()
                    stroke="#cbd5e0"
                    stroke-width="1"
                />
                {y_labels}
                {rects}
            </svg>
            <ul class="chart-legend chart-legend--inline">{legend}</ul>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(label: &str, group: &str, value: f64) -> BarDatum {
        BarDatum {
            label: label.to_string(),
            group: group.to_string(),
            value,
        }
    }

    #[test]
    fn test_bar_groups_first_appearance() {
        let bars = vec![
            bar("Salvador", "SP", 10.0),
            bar("Brasília", "RJ", 9.0),
            bar("Salvador", "SP", 8.0),
        ];
        assert_eq!(bar_groups(&bars), vec!["SP".to_string(), "RJ".to_string()]);
    }
}
