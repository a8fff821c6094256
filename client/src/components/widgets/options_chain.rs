//! Options chain with call/put filter and expiry picker.

#[cfg(test)]
#[path = "options_chain_test.rs"]
mod options_chain_test;

use leptos::prelude::*;
use serde::Deserialize;

use crate::util::format::{format_currency, format_number, format_percent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionSide {
    #[default]
    Call,
    Put,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionContract {
    #[serde(alias = "type")]
    pub side: OptionSide,
    pub strike: f64,
    pub expiry: String,
    pub bid: f64,
    pub ask: f64,
    pub last: f64,
    pub volume: u64,
    pub open_interest: u64,
    /// Implied volatility, in percent.
    pub implied_volatility: f64,
    pub delta: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionsChainData {
    #[serde(alias = "symbol")]
    pub underlying: String,
    pub underlying_price: f64,
    pub contracts: Vec<OptionContract>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SideFilter {
    #[default]
    Both,
    Calls,
    Puts,
}

impl SideFilter {
    pub const ALL: [Self; 3] = [Self::Both, Self::Calls, Self::Puts];

    pub fn label(self) -> &'static str {
        match self {
            Self::Both => "All",
            Self::Calls => "Calls",
            Self::Puts => "Puts",
        }
    }

    fn admits(self, side: OptionSide) -> bool {
        match self {
            Self::Both => true,
            Self::Calls => side == OptionSide::Call,
            Self::Puts => side == OptionSide::Put,
        }
    }
}

/// Distinct expiries in first-seen order.
pub fn expiries(contracts: &[OptionContract]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for c in contracts {
        if !out.contains(&c.expiry) {
            out.push(c.expiry.clone());
        }
    }
    out
}

/// Contracts for `expiry` (all when `None`) admitted by `filter`, by strike.
pub fn visible_contracts(contracts: &[OptionContract], filter: SideFilter, expiry: Option<&str>) -> Vec<OptionContract> {
    let mut rows: Vec<OptionContract> = contracts
        .iter()
        .filter(|c| filter.admits(c.side) && expiry.is_none_or(|e| c.expiry == e))
        .cloned()
        .collect();
    rows.sort_by(|a, b| a.strike.total_cmp(&b.strike).then_with(|| (a.side == OptionSide::Put).cmp(&(b.side == OptionSide::Put))));
    rows
}

/// Whether a contract is in the money at `spot`.
pub fn in_the_money(contract: &OptionContract, spot: f64) -> bool {
    match contract.side {
        OptionSide::Call => contract.strike < spot,
        OptionSide::Put => contract.strike > spot,
    }
}

#[component]
pub fn OptionsChain(data: OptionsChainData) -> impl IntoView {
    let spot = data.underlying_price;
    let expiry_list = expiries(&data.contracts);
    let contracts = data.contracts;
    let side = RwSignal::new(SideFilter::Both);
    let expiry = RwSignal::new(expiry_list.first().cloned());

    let rows = move || {
        let selected = expiry.get();
        visible_contracts(&contracts, side.get(), selected.as_deref())
            .into_iter()
            .map(|c| {
                let itm = in_the_money(&c, spot);
                let side_label = match c.side {
                    OptionSide::Call => "C",
                    OptionSide::Put => "P",
                };
                view! {
                    <tr class:chain__row--itm=itm>
                        <td>{side_label}</td>
                        <td class="num">{format_number(c.strike, 2)}</td>
                        <td class="num">{format_number(c.bid, 2)}</td>
                        <td class="num">{format_number(c.ask, 2)}</td>
                        <td class="num">{format_number(c.last, 2)}</td>
                        <td class="num">{c.volume}</td>
                        <td class="num">{c.open_interest}</td>
                        <td class="num">{format_percent(c.implied_volatility)}</td>
                        <td class="num">{format_number(c.delta, 2)}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="widget widget--options">
            <header class="widget__header">
                <h3>{format!("{} options", data.underlying)}</h3>
                <span class="chain__spot">{format!("Spot {}", format_currency(spot))}</span>
            </header>
            <div class="chain__controls">
                <div class="segmented">
                    {SideFilter::ALL
                        .into_iter()
                        .map(|f| {
                            view! {
                                <button
                                    class="segmented__item"
                                    class:segmented__item--active=move || side.get() == f
                                    on:click=move |_| side.set(f)
                                >
                                    {f.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <select
                    class="chain__expiry"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        expiry.set((!value.is_empty()).then_some(value));
                    }
                >
                    <option value="">"All expiries"</option>
                    {expiry_list
                        .into_iter()
                        .map(|e| {
                            let label = e.clone();
                            let value = e.clone();
                            view! {
                                <option value=value selected=move || expiry.get().as_deref() == Some(e.as_str())>
                                    {label}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <table class="table chain">
                <thead>
                    <tr>
                        <th>"Side"</th>
                        <th class="num">"Strike"</th>
                        <th class="num">"Bid"</th>
                        <th class="num">"Ask"</th>
                        <th class="num">"Last"</th>
                        <th class="num">"Vol"</th>
                        <th class="num">"OI"</th>
                        <th class="num">"IV"</th>
                        <th class="num">"Delta"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
