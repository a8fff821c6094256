//! Asset catalog table for one asset type.
//!
//! Filter and sort live in view-local signals; clicking a row opens (or
//! refocuses) the asset's detail tab.

use leptos::prelude::*;
use schema::{Asset, AssetCommon, AssetType};

use crate::state::explore::{ExploreFilter, ExploreSort, SortKey, distinct_values, filter_and_sort, sample_assets};
use crate::state::workspace::WorkspaceState;
use crate::util::format::{format_compact, format_currency, format_number, format_percent, format_signed_percent};

fn region(common: &AssetCommon) -> &str {
    &common.region
}

fn sector(common: &AssetCommon) -> &str {
    &common.sector
}

/// Heading and cell text for the type-specific column.
fn detail_column(asset_type: AssetType) -> &'static str {
    match asset_type {
        AssetType::Bonds => "Yield",
        AssetType::Stocks => "Mkt cap",
        AssetType::Etfs => "Expense",
        AssetType::Commodities => "Change",
    }
}

fn detail_cell(asset: &Asset) -> String {
    match asset {
        Asset::Bonds(b) => format_percent(b.yield_to_maturity),
        Asset::Stocks(s) => format_compact(s.market_cap),
        Asset::Etfs(e) => format_percent(e.expense_ratio),
        Asset::Commodities(c) => format_signed_percent(c.change_percent),
    }
}

fn price_cell(asset: &Asset) -> String {
    match asset {
        Asset::Bonds(b) => format_number(b.price_of_par, 2),
        other => format_currency(other.price()),
    }
}

#[component]
fn FilterSelect(label: &'static str, options: Vec<String>, value: Signal<String>, on_pick: Callback<String>) -> impl IntoView {
    view! {
        <label class="explore__filter">
            <span>{label}</span>
            <select prop:value=move || value.get() on:change=move |ev| on_pick.run(event_target_value(&ev))>
                <option value="">"Any"</option>
                {options
                    .into_iter()
                    .map(|opt| {
                        let text = opt.clone();
                        view! { <option value=opt>{text}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

#[component]
pub fn ExploreView(asset_type: AssetType) -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();
    let catalog = StoredValue::new(sample_assets());
    let filter = RwSignal::new(ExploreFilter::default());
    let sort = RwSignal::new(ExploreSort::default());

    let regions = catalog.with_value(|assets| distinct_values(assets, asset_type, region));
    let sectors = catalog.with_value(|assets| distinct_values(assets, asset_type, sector));
    let rows = Memo::new(move |_| {
        let (f, s) = (filter.get(), sort.get());
        catalog.with_value(|assets| filter_and_sort(assets, asset_type, &f, s))
    });

    let open = move |asset: Asset| {
        if let Some(Err(err)) = workspace.try_update(|ws| ws.open_asset(asset)) {
            leptos::logging::warn!("failed to open asset tab: {err}");
        }
    };

    view! {
        <div class="view view--explore">
            <h2 class="view__title">{asset_type.label()}</h2>
            <div class="explore__filters">
                <input
                    class="explore__search"
                    type="search"
                    placeholder="Search name or ticker"
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <FilterSelect
                    label="Region"
                    options=regions
                    value=Signal::derive(move || filter.with(|f| f.region.clone()))
                    on_pick=Callback::new(move |v| filter.update(|f| f.region = v))
                />
                <FilterSelect
                    label="Sector"
                    options=sectors
                    value=Signal::derive(move || filter.with(|f| f.sector.clone()))
                    on_pick=Callback::new(move |v| filter.update(|f| f.sector = v))
                />
                <label class="explore__held">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.with(|f| f.held_only)
                        on:change=move |ev| filter.update(|f| f.held_only = event_target_checked(&ev))
                    />
                    "Held only"
                </label>
            </div>
            <table class="explore__table">
                <thead>
                    <tr>
                        {SortKey::ALL
                            .into_iter()
                            .map(|key| {
                                view! {
                                    <th class="sortable" on:click=move |_| sort.update(|s| s.toggle(key))>
                                        {move || format!("{}{}", key.label(), sort.get().marker(key))}
                                    </th>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <th>{detail_column(asset_type)}</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="6" class="explore__empty">"No assets match the filters"</td>
                                </tr>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|asset| {
                                let common = asset.common().clone();
                                let price = price_cell(&asset);
                                let detail = detail_cell(&asset);
                                view! {
                                    <tr class="explore__row" class:explore__row--held=common.is_held on:click=move |_| open(asset.clone())>
                                        <td>{common.name}</td>
                                        <td class="mono">{common.ticker}</td>
                                        <td>{common.region}</td>
                                        <td>{common.sector}</td>
                                        <td class="num">{price}</td>
                                        <td class="num">{detail}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}
