//! Performance line chart with a range selector.

#[cfg(test)]
#[path = "performance_chart_test.rs"]
mod performance_chart_test;

use leptos::prelude::*;
use serde::Deserialize;

use crate::util::chart_math::{polyline, scale_points};
use crate::util::format::{change_class, format_signed_percent};

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 180.0;
const PAD: f64 = 8.0;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PerformancePoint {
    pub date: String,
    pub value: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PerformanceChartData {
    pub title: Option<String>,
    #[serde(alias = "data")]
    pub points: Vec<PerformancePoint>,
    pub benchmark: Vec<PerformancePoint>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Range {
    Month,
    Quarter,
    Year,
    All,
}

impl Range {
    pub const ALL: [Self; 4] = [Self::Month, Self::Quarter, Self::Year, Self::All];

    pub fn label(self) -> &'static str {
        match self {
            Self::Month => "1M",
            Self::Quarter => "3M",
            Self::Year => "1Y",
            Self::All => "All",
        }
    }

    /// Trailing points kept, assuming one point per trading day.
    fn window(self) -> Option<usize> {
        match self {
            Self::Month => Some(21),
            Self::Quarter => Some(63),
            Self::Year => Some(252),
            Self::All => None,
        }
    }
}

/// Trailing window of `points` for `range`.
pub fn windowed(points: &[PerformancePoint], range: Range) -> &[PerformancePoint] {
    match range.window() {
        Some(n) if n < points.len() => &points[points.len() - n..],
        _ => points,
    }
}

/// Percent change from first to last point.
pub fn period_return(points: &[PerformancePoint]) -> Option<f64> {
    let first = points.first()?.value;
    let last = points.last()?.value;
    (first != 0.0).then(|| (last - first) / first * 100.0)
}

#[component]
pub fn PerformanceChart(data: PerformanceChartData) -> impl IntoView {
    let title = data.title.unwrap_or_else(|| "Performance".to_owned());
    let range = RwSignal::new(Range::All);
    let points = StoredValue::new(data.points);
    let benchmark = StoredValue::new(data.benchmark);

    let line = move |series: &[PerformancePoint]| {
        let values: Vec<f64> = windowed(series, range.get()).iter().map(|p| p.value).collect();
        polyline(&scale_points(&values, WIDTH, HEIGHT, PAD))
    };

    let change = move || points.with_value(|p| period_return(windowed(p, range.get())));

    view! {
        <div class="widget widget--chart">
            <header class="widget__header">
                <h3>{title}</h3>
                {move || {
                    change()
                        .map(|pct| {
                            view! { <span class=format!("chart__return {}", change_class(pct))>{format_signed_percent(pct)}</span> }
                        })
                }}
                <div class="segmented">
                    {Range::ALL
                        .into_iter()
                        .map(|r| {
                            view! {
                                <button
                                    class="segmented__item"
                                    class:segmented__item--active=move || range.get() == r
                                    on:click=move |_| range.set(r)
                                >
                                    {r.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </header>
            <svg class="chart" viewBox=format!("0 0 {WIDTH} {HEIGHT}")>
                <polyline class="chart__line chart__line--benchmark" points=move || benchmark.with_value(|b| line(b))/>
                <polyline class="chart__line" points=move || points.with_value(|p| line(p))/>
            </svg>
        </div>
    }
}
