use contracts::shared::indicators::{IndicatorStatus, IndicatorValue, ValueFormat};
use leptos::prelude::*;

use crate::shared::number_format::{format_integer, format_money};

pub fn format_value(value: f64, format: &ValueFormat) -> String {
    match format {
        ValueFormat::Money { currency } => format_money(value, currency),
        ValueFormat::Integer => format_integer(value),
    }
}

fn icon_glyph(name: &str) -> &'static str {
    match name {
        "package" => "📦",
        "money" => "💰",
        "target" => "🎯",
        "users" => "👥",
        _ => "📊",
    }
}

/// KPI card for one computed indicator
#[component]
pub fn StatCard(indicator: IndicatorValue) -> impl IntoView {
    let status_class = match indicator.status {
        IndicatorStatus::Neutral => "stat-card",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
    };

    let formatted = match indicator.value {
        Some(v) => format_value(v, &indicator.format),
        None => "sem dados".to_string(),
    };

    let subtitle_view = indicator.subtitle.map(|s| {
        view! { <div class="stat-card__subtitle">{s}</div> }
    });

    view! {
        <div class=status_class data-indicator=indicator.id.0>
            <div class="stat-card__icon">{icon_glyph(&indicator.icon)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{indicator.label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
