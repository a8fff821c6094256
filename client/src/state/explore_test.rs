use super::*;

fn tickers(rows: &[Asset]) -> Vec<&str> {
    rows.iter().map(|a| a.common().ticker.as_str()).collect()
}

#[test]
fn sample_catalog_ids_are_unique() {
    let assets = sample_assets();
    let ids: BTreeSet<_> = assets.iter().map(Asset::id).collect();
    assert_eq!(ids.len(), assets.len());
    for asset_type in AssetType::ALL {
        assert!(assets.iter().any(|a| a.asset_type() == asset_type));
    }
}

#[test]
fn filter_restricts_to_asset_type() {
    let rows = filter_and_sort(&sample_assets(), AssetType::Etfs, &ExploreFilter::default(), ExploreSort::default());
    assert!(rows.iter().all(|a| a.asset_type() == AssetType::Etfs));
    assert_eq!(rows.len(), 4);
}

#[test]
fn search_matches_name_or_ticker_case_insensitively() {
    let filter = ExploreFilter { search: "  apple ".into(), ..ExploreFilter::default() };
    let rows = filter_and_sort(&sample_assets(), AssetType::Stocks, &filter, ExploreSort::default());
    assert_eq!(tickers(&rows), ["AAPL"]);

    let filter = ExploreFilter { search: "msf".into(), ..ExploreFilter::default() };
    let rows = filter_and_sort(&sample_assets(), AssetType::Stocks, &filter, ExploreSort::default());
    assert_eq!(tickers(&rows), ["MSFT"]);
}

#[test]
fn region_sector_and_held_filters_combine() {
    let filter = ExploreFilter {
        region: "North America".into(),
        sector: "Technology".into(),
        held_only: true,
        ..ExploreFilter::default()
    };
    let sort = ExploreSort { key: SortKey::Ticker, direction: SortDirection::Ascending };
    let rows = filter_and_sort(&sample_assets(), AssetType::Stocks, &filter, sort);
    assert_eq!(tickers(&rows), ["AAPL", "MSFT"]);
}

#[test]
fn price_sort_descending() {
    let sort = ExploreSort { key: SortKey::Price, direction: SortDirection::Descending };
    let rows = filter_and_sort(&sample_assets(), AssetType::Commodities, &ExploreFilter::default(), sort);
    let prices: Vec<f64> = rows.iter().map(Asset::price).collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(tickers(&rows)[0], "XAU");
}

#[test]
fn toggle_flips_direction_on_same_key_and_resets_on_new_key() {
    let mut sort = ExploreSort::default();
    sort.toggle(SortKey::Name);
    assert_eq!(sort.direction, SortDirection::Descending);
    assert_eq!(sort.marker(SortKey::Name), " ▼");

    sort.toggle(SortKey::Price);
    assert_eq!(sort, ExploreSort { key: SortKey::Price, direction: SortDirection::Ascending });
    assert_eq!(sort.marker(SortKey::Name), "");
}

#[test]
fn distinct_values_are_sorted_and_scoped() {
    let regions = distinct_values(&sample_assets(), AssetType::Bonds, |c| c.region.as_str());
    assert_eq!(regions, ["Europe", "North America"]);
}
