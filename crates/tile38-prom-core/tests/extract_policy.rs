//! Stat coercion policy.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::{json, Value};

use tile38_prom_core::stats::{extract, StatValue, StatsMap};
use tile38_prom_core::CATALOG;

fn stats(v: Value) -> StatsMap {
    match v {
        Value::Object(m) => m,
        other => panic!("not an object: {other}"),
    }
}

#[test]
fn booleans_map_to_one_and_zero() {
    let m = stats(json!({"t": true, "f": false}));
    assert_eq!(extract(&m, "t"), 1.0);
    assert_eq!(extract(&m, "f"), 0.0);
}

#[test]
fn numbers_pass_through_untouched() {
    let m = stats(json!({"i": 42, "neg": -3, "frac": 0.25, "big": 18446744073709551615u64}));
    assert_eq!(extract(&m, "i"), 42.0);
    assert_eq!(extract(&m, "neg"), -3.0);
    assert_eq!(extract(&m, "frac"), 0.25);
    assert_eq!(extract(&m, "big"), 18446744073709551615u64 as f64);
}

#[test]
fn absent_and_non_scalar_are_nan() {
    let m = stats(json!({"s": "7", "a": [1], "o": {"x": 1}, "n": null}));
    for key in ["missing", "s", "a", "o", "n"] {
        assert!(extract(&m, key).is_nan(), "key={key}");
    }
}

#[test]
fn nan_is_distinct_from_zero() {
    let m = stats(json!({"zero": 0}));
    assert_eq!(extract(&m, "zero"), 0.0);
    assert!(extract(&m, "other").is_nan());
}

#[test]
fn lookup_classifies() {
    let m = stats(json!({"b": true, "n": 1.5, "s": "x"}));
    assert_eq!(StatValue::lookup(&m, "b"), StatValue::Bool(true));
    assert_eq!(StatValue::lookup(&m, "n"), StatValue::Number(1.5));
    assert_eq!(StatValue::lookup(&m, "s"), StatValue::Other);
    assert_eq!(StatValue::lookup(&m, "zzz"), StatValue::Missing);
}

#[test]
fn every_catalog_key_handles_bool_values() {
    let mut t = StatsMap::new();
    let mut f = StatsMap::new();
    for spec in CATALOG {
        t.insert(spec.key.to_string(), Value::Bool(true));
        f.insert(spec.key.to_string(), Value::Bool(false));
    }
    for spec in CATALOG {
        assert_eq!(extract(&t, spec.key), 1.0, "key={}", spec.key);
        assert_eq!(extract(&f, spec.key), 0.0, "key={}", spec.key);
    }
}
