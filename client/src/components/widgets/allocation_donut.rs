//! Allocation donut chart with a hover-highlight legend.

use leptos::prelude::*;
use serde::Deserialize;

use crate::util::chart_math::{donut_segments, percent_of, ring_path};
use crate::util::format::format_percent;

const PALETTE: [&str; 8] = ["#2563eb", "#16a34a", "#f59e0b", "#dc2626", "#7c3aed", "#0891b2", "#db2777", "#65a30d"];
const SIZE: f64 = 160.0;
const OUTER: f64 = 72.0;
const INNER: f64 = 46.0;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AllocationSlice {
    pub label: String,
    pub value: f64,
    pub color: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AllocationDonutData {
    pub title: Option<String>,
    #[serde(alias = "allocations", alias = "data")]
    pub slices: Vec<AllocationSlice>,
}

#[component]
pub fn AllocationDonut(data: AllocationDonutData) -> impl IntoView {
    let title = data.title.unwrap_or_else(|| "Allocation".to_owned());
    let values: Vec<f64> = data.slices.iter().map(|s| s.value).collect();
    let total: f64 = values.iter().copied().filter(|v| *v > 0.0).sum();
    let segments = donut_segments(&values);
    let hovered = RwSignal::new(None::<usize>);
    let center = SIZE / 2.0;

    let colored: Vec<(AllocationSlice, String)> = data
        .slices
        .into_iter()
        .enumerate()
        .map(|(i, slice)| {
            let color = slice.color.clone().unwrap_or_else(|| PALETTE[i % PALETTE.len()].to_owned());
            (slice, color)
        })
        .collect();

    let arcs = segments
        .iter()
        .zip(&colored)
        .enumerate()
        .filter(|(_, (segment, _))| segment.sweep_deg > 0.0)
        .map(|(i, (segment, (_, color)))| {
            let path = ring_path(center, center, OUTER, INNER, *segment);
            view! {
                <path
                    d=path
                    fill=color.clone()
                    class="donut__arc"
                    class:donut__arc--active=move || hovered.get() == Some(i)
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                />
            }
        })
        .collect::<Vec<_>>();

    let legend = colored
        .into_iter()
        .enumerate()
        .map(|(i, (slice, color))| {
            let share = format_percent(percent_of(slice.value.max(0.0), total));
            view! {
                <li
                    class="legend__item"
                    class:legend__item--active=move || hovered.get() == Some(i)
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                >
                    <span class="legend__swatch" style=format!("background:{color}")></span>
                    <span class="legend__label">{slice.label}</span>
                    <span class="legend__value">{share}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="widget widget--donut">
            <h3 class="widget__title">{title}</h3>
            <div class="donut">
                <svg class="donut__chart" viewBox=format!("0 0 {SIZE} {SIZE}") width=SIZE.to_string() height=SIZE.to_string()>
                    {arcs}
                </svg>
                <ul class="legend">{legend}</ul>
            </div>
        </div>
    }
}
