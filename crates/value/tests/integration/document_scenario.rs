//! A service reads its settings from a loosely-typed JSON document.

use chrono::{TimeZone, Utc};
use pliant_value::{Dyn, Map, Value, ValueKind};
use pretty_assertions::assert_eq;
use serde_json::json;

fn settings() -> Dyn {
    Dyn::from(json!({
        "listen": { "host": "0.0.0.0", "port": "8080" },
        "workers": 64,
        "timeout_ms": "1500.7",
        "debug": 1,
        "log_level": "Info",
        "region": "eu-west",
        "started": "2006-01-02",
        "rotated": "Mon, 02 Jan 2006 15:04:05 GMT",
        "ratio": "not a number",
        "upstreams": [
            { "url": "http://a", "weight": "0x0A" },
            { "url": "http://b", "weight": -3 }
        ],
        "tags": null
    }))
}

#[test]
fn typed_settings_from_untyped_document() {
    let s = settings();

    assert_eq!(s.key("listen").key("host").to_text(), Ok("0.0.0.0".to_owned()));
    assert_eq!(s.key("listen").key("port").to_u16(), Ok(8080));
    assert_eq!(s.key("workers").clip(1, 32).to_u32(), Ok(32));
    assert_eq!(s.key("timeout_ms").to_f64(), Ok(1500.7));
    assert_eq!(s.key("debug").to_bool(), Ok(true));
    assert_eq!(
        s.key("log_level").lower().one_of(["debug", "info", "warn"]).text_or_zero(),
        "info"
    );
    assert_eq!(s.len(), Ok(11));
    assert_eq!(s.key("upstreams").len(), Ok(2));
}

#[test]
fn table_lookup_translates_codes() {
    let regions = Map::from([
        ("eu-west".to_owned(), Value::text("Dublin")),
        ("us-east".to_owned(), Value::text("Virginia")),
    ]);
    let s = settings();

    assert_eq!(s.key("region").lookup(&regions).to_text(), Ok("Dublin".to_owned()));
    assert_eq!(
        s.key("workers").lookup(&regions).error().map(ToString::to_string),
        Some("key not found: 64".to_owned())
    );
}

#[test]
fn timestamps_from_text() {
    let s = settings();

    let started = s.key("started").to_time().unwrap();
    assert_eq!(started, Utc.with_ymd_and_hms(2006, 1, 2, 0, 0, 0).unwrap());

    let rotated = s.key("rotated").to_time().unwrap();
    assert_eq!(rotated.timestamp(), 1_136_214_245);
    assert!(s.key("rotated").to_i64().is_err());
    assert_eq!(
        Dyn::new(rotated).to_text(),
        Ok("2006-01-02T15:04:05Z".to_owned())
    );
}

#[test]
fn malformed_fields_fall_back() {
    let s = settings();

    assert_eq!(s.key("ratio").f64_or_zero(), 0.0);
    // Unparseable text is a payload until a conversion step fails on it.
    assert_eq!(s.key("ratio").catch(0.5).to_f64().unwrap_err().to_string(), "type conversion error");
    assert_eq!(s.key("ratio").limit(0, 1).catch(0.5).to_f64(), Ok(0.5));
    assert_eq!(s.key("missing").key("deeper").index(3).catch("dflt").text_or_zero(), "dflt");
    assert!(!s.key("tags").is_err());
    assert_eq!(s.key("tags").raw().map(Value::kind), Ok(ValueKind::Null));
    assert_eq!(s.key("tags").len_or_zero(), 0);
}

#[test]
fn sequence_of_records() {
    let ups = settings().key("upstreams");

    let weights: Vec<i64> = (0..ups.len_or_zero() as isize)
        .map(|i| {
            let raw = ups.index(i).key("weight").i64_or_zero();
            Dyn::new(raw).limit(0, 100).catch(1).i64_or_zero()
        })
        .collect();
    assert_eq!(weights, vec![10, 1]);

    // Float conversion has no base prefixes, only integer conversion does.
    assert!(ups.index(0).key("weight").limit(0, 100).is_err());

    let err = ups.index(1).key("weight").limit(0, 100).into_result().unwrap_err();
    assert_eq!(err.to_string(), "lower limit overflow");
}
