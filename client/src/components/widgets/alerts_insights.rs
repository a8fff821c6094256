//! Alerts and insights list with per-item dismissal.

#[cfg(test)]
#[path = "alerts_insights_test.rs"]
mod alerts_insights_test;

use std::collections::HashSet;

use leptos::prelude::*;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    #[default]
    Low,
    #[serde(other)]
    Info,
}

impl Severity {
    fn class(self) -> &'static str {
        match self {
            Self::High => "alert--high",
            Self::Medium => "alert--medium",
            Self::Low => "alert--low",
            Self::Info => "alert--info",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// `"alert"` or `"insight"`.
    pub kind: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertsInsightsData {
    pub title: Option<String>,
    pub alerts: Vec<AlertItem>,
    pub insights: Vec<AlertItem>,
}

/// Alerts first, most severe first; insights after, in input order.
pub fn ordered_items(data: &AlertsInsightsData) -> Vec<AlertItem> {
    let mut alerts = data.alerts.clone();
    alerts.sort_by_key(|a| a.severity);
    alerts.extend(data.insights.iter().cloned());
    alerts
}

#[component]
pub fn AlertsInsights(data: AlertsInsightsData) -> impl IntoView {
    let title = data.title.clone().unwrap_or_else(|| "Alerts & Insights".to_owned());
    let items = ordered_items(&data);
    let dismissed = RwSignal::new(HashSet::<usize>::new());
    let total = items.len();

    view! {
        <div class="widget widget--alerts">
            <header class="widget__header">
                <h3>{title}</h3>
                <span class="widget__badge">
                    {move || format!("{}", total - dismissed.with(HashSet::len))}
                </span>
            </header>
            <ul class="alerts">
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(idx, item)| {
                        let class = format!("alert {}", item.severity.class());
                        view! {
                            <li class=class hidden=move || dismissed.with(|d| d.contains(&idx))>
                                <div class="alert__body">
                                    <strong>{item.title}</strong>
                                    <p>{item.description}</p>
                                </div>
                                <button
                                    class="alert__dismiss"
                                    title="Dismiss"
                                    on:click=move |_| {
                                        dismissed.update(|d| {
                                            d.insert(idx);
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            {move || {
                (total > 0 && dismissed.with(HashSet::len) == total)
                    .then(|| view! { <p class="widget__empty">"All caught up."</p> })
            }}
        </div>
    }
}
