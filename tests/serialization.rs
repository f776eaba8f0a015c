use kdj_screener::{Comparison, JFilter, KdjConfig, KdjValue, PriceBar, annotate};
use serde_json::json;

#[test]
fn kdj_value_uses_short_field_names() {
    let value = KdjValue::from_kd(50.0, 50.0);
    assert_eq!(
        serde_json::to_value(value).unwrap(),
        json!({ "k": 50.0, "d": 50.0, "j": 50.0 })
    );
}

#[test]
fn annotated_bar_flattens_bar_fields() {
    let bars = vec![PriceBar::new("600519", 1, 1700.0, 1650.0, 1688.0).with_name("Moutai")];
    let annotated = annotate(&bars, KdjConfig::default());

    let value = serde_json::to_value(annotated[0]).unwrap();

    assert_eq!(value["symbol"], "600519");
    assert_eq!(value["name"], "Moutai");
    assert_eq!(value["close"], 1688.0);
    assert_eq!(value["kdj"]["j"], 50.0);
}

#[test]
fn price_bar_name_is_optional_on_input() {
    let bar: PriceBar = serde_json::from_value(json!({
        "symbol": "000001",
        "open_time": 1,
        "open": 10.0,
        "high": 11.0,
        "low": 9.5,
        "close": 10.5,
        "volume": 1000.0,
    }))
    .unwrap();

    assert_eq!(bar.name, None);
    assert_eq!(bar.symbol, "000001");
}

#[test]
fn filter_round_trips_through_json() {
    let filter: JFilter =
        serde_json::from_value(json!({ "comparison": "at_most", "threshold": 3.0 })).unwrap();

    assert_eq!(filter, JFilter::at_most(3.0));
    assert_eq!(filter.comparison(), Comparison::AtMost);
}
