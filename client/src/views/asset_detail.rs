//! Detail tab for one asset.
//!
//! Each detail tab is keyed by the asset it was opened for, so two detail
//! tabs of the same type keep showing their own asset. A tab without a
//! recorded asset falls back to the workspace's `selected_asset`.

use leptos::prelude::*;
use schema::{Asset, AssetType};

use crate::state::workspace::WorkspaceState;
use crate::util::format::{
    change_class, format_compact, format_currency, format_number, format_percent, format_signed_percent,
};

/// Label/value rows for the fields specific to `asset`.
fn detail_rows(asset: &Asset) -> Vec<(&'static str, String)> {
    let optional = |value: Option<f64>, render: fn(f64) -> String| value.map_or_else(|| "—".to_owned(), render);
    match asset {
        Asset::Bonds(b) => vec![
            ("Price (% of par)", format_number(b.price_of_par, 3)),
            ("Yield to maturity", format_percent(b.yield_to_maturity)),
            ("Coupon", format_percent(b.coupon_rate)),
            ("Maturity", b.maturity_date.clone()),
            ("Rating", b.rating.clone()),
        ],
        Asset::Stocks(s) => vec![
            ("Price", format_currency(s.price)),
            ("P/E", optional(s.pe_ratio, |v| format_number(v, 1))),
            ("Market cap", format_compact(s.market_cap)),
            ("Dividend yield", optional(s.dividend_yield, format_percent)),
        ],
        Asset::Etfs(e) => vec![
            ("Price", format_currency(e.price)),
            ("Expense ratio", format_percent(e.expense_ratio)),
            ("AUM", format_compact(e.aum)),
        ],
        Asset::Commodities(c) => vec![
            ("Price", format!("{} / {}", format_currency(c.price), c.unit)),
            ("Change", format_signed_percent(c.change_percent)),
        ],
    }
}

#[component]
pub fn AssetDetailView(asset_type: AssetType, tab_id: String) -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();
    let asset = Memo::new(move |_| {
        workspace.with(|ws| ws.asset_for_tab(&tab_id).or(ws.selected_asset.as_ref()).cloned())
    });

    move || {
        let Some(asset) = asset.get() else {
            return view! {
                <div class="view view--detail view--empty">
                    {format!("Select an asset from {} to see its details.", asset_type.label())}
                </div>
            }
            .into_any();
        };
        let common = asset.common().clone();
        let change = match &asset {
            Asset::Commodities(c) => Some(c.change_percent),
            _ => None,
        };
        let rows = detail_rows(&asset);
        view! {
            <div class="view view--detail">
                <header class="detail__header">
                    <h2 class="view__title">{common.name}</h2>
                    <span class="detail__ticker mono">{common.ticker}</span>
                    {change.map(|c| view! { <span class=format!("detail__change {}", change_class(c))>{format_signed_percent(c)}</span> })}
                    {common.is_held.then(|| view! { <span class="badge">"Held"</span> })}
                </header>
                <dl class="detail__fields">
                    <dt>"Type"</dt>
                    <dd>{asset.asset_type().label()}</dd>
                    <dt>"Region"</dt>
                    <dd>{common.region}</dd>
                    <dt>"Sector"</dt>
                    <dd>{common.sector}</dd>
                    {rows
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect::<Vec<_>>()}
                </dl>
            </div>
        }
        .into_any()
    }
}
