//! Single KPI card.

use leptos::prelude::*;
use serde::Deserialize;

use crate::util::format::{change_class, format_compact, format_currency, format_number, format_percent, format_signed_percent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricFormat {
    #[default]
    Number,
    Currency,
    Percent,
    Compact,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricCardData {
    #[serde(alias = "title")]
    pub label: String,
    pub value: f64,
    pub format: MetricFormat,
    /// Period-over-period change, in percent.
    pub change: Option<f64>,
    pub caption: Option<String>,
}

pub fn format_metric(value: f64, format: MetricFormat) -> String {
    match format {
        MetricFormat::Number => format_number(value, 2),
        MetricFormat::Currency => format_currency(value),
        MetricFormat::Percent => format_percent(value),
        MetricFormat::Compact => format_compact(value),
    }
}

#[component]
pub fn MetricCard(data: MetricCardData) -> impl IntoView {
    view! {
        <div class="widget widget--metric">
            <span class="metric__label">{data.label}</span>
            <span class="metric__value">{format_metric(data.value, data.format)}</span>
            {data
                .change
                .map(|pct| {
                    view! { <span class=format!("metric__change {}", change_class(pct))>{format_signed_percent(pct)}</span> }
                })}
            {data.caption.map(|c| view! { <span class="metric__caption">{c}</span> })}
        </div>
    }
}
