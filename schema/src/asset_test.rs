use super::*;
use serde_json::json;

#[test]
fn bond_decodes_from_tagged_json() {
    let asset: Asset = serde_json::from_value(json!({
        "assetType": "bonds",
        "id": "ust-10y",
        "name": "US Treasury 10Y",
        "ticker": "UST10",
        "region": "US",
        "sector": "Government",
        "isHeld": true,
        "priceOfPar": 98.4,
        "yieldToMaturity": 4.21
    }))
    .unwrap();
    assert_eq!(asset.asset_type(), AssetType::Bonds);
    assert_eq!(asset.id(), "ust-10y");
    assert!(asset.common().is_held);
    let Asset::Bonds(bond) = asset else {
        panic!("expected bond");
    };
    assert!((bond.yield_to_maturity - 4.21).abs() < f64::EPSILON);
    assert!(bond.rating.is_empty());
}

#[test]
fn stock_round_trips_tag() {
    let stock = Asset::Stocks(Stock {
        common: AssetCommon {
            id: "acme".into(),
            name: "Acme Corp".into(),
            ticker: "ACME".into(),
            region: "US".into(),
            sector: "Industrials".into(),
            is_held: false,
        },
        price: 101.5,
        pe_ratio: Some(18.2),
        market_cap: 4.0e10,
        dividend_yield: None,
    });
    let value = serde_json::to_value(&stock).unwrap();
    assert_eq!(value["assetType"], "stocks");
    assert_eq!(value["ticker"], "ACME");
    assert_eq!(value["peRatio"], 18.2);
}

#[test]
fn unknown_asset_type_is_rejected() {
    let err = serde_json::from_value::<Asset>(json!({ "assetType": "crypto", "id": "x" }));
    assert!(err.is_err());
}

#[test]
fn asset_type_tags_match_serde() {
    for ty in AssetType::ALL {
        assert_eq!(serde_json::to_value(ty).unwrap(), json!(ty.as_str()));
    }
}
