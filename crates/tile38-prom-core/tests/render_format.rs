//! Exposition format tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashSet;

use serde_json::{json, Value};

use tile38_prom_core::catalog::{self, MetricKind, MetricSpec};
use tile38_prom_core::render::{format_sample, metric_name, render, render_catalog};
use tile38_prom_core::stats::StatsMap;
use tile38_prom_core::CATALOG;

fn stats(v: Value) -> StatsMap {
    match v {
        Value::Object(m) => m,
        other => panic!("not an object: {other}"),
    }
}

const PID: MetricSpec = MetricSpec::gauge("tile38_pid", "The process ID of the server");

#[test]
fn three_lines_without_namespace() {
    let out = render(&PID, 42.0, "");
    assert_eq!(
        out,
        "# HELP tile38_pid The process ID of the server\n\
         # TYPE tile38_pid gauge\n\
         tile38_pid 42\n"
    );
}

#[test]
fn namespace_prefixes_every_line() {
    let out = render(&PID, 42.0, "svc");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "# HELP svc_tile38_pid The process ID of the server");
    assert_eq!(lines[1], "# TYPE svc_tile38_pid gauge");
    assert_eq!(lines[2], "svc_tile38_pid 42");
}

#[test]
fn counter_type_line() {
    let spec = catalog::find("tile38_total_commands_processed").unwrap();
    assert_eq!(spec.kind, MetricKind::Counter);
    let out = render(spec, 10.0, "");
    assert!(out.contains("# TYPE tile38_total_commands_processed counter\n"));
}

#[test]
fn nan_renders_literal_token() {
    let out = render(&PID, f64::NAN, "");
    assert!(out.ends_with("tile38_pid NaN\n"));
}

#[test]
fn sample_formatting_is_shortest_without_exponent() {
    assert_eq!(format_sample(0.0), "0");
    assert_eq!(format_sample(1.0), "1");
    assert_eq!(format_sample(1.5), "1.5");
    assert_eq!(format_sample(0.1), "0.1");
    assert_eq!(format_sample(-2.25), "-2.25");
    assert_eq!(format_sample(1e21), "1000000000000000000000");
    assert_eq!(format_sample(1e-7), "0.0000001");
    assert_eq!(format_sample(f64::INFINITY), "+Inf");
    assert_eq!(format_sample(f64::NEG_INFINITY), "-Inf");
}

#[test]
fn render_is_idempotent() {
    let a = render(&PID, 0.123, "ns");
    let b = render(&PID, 0.123, "ns");
    assert_eq!(a, b);
}

#[test]
fn catalog_keys_are_unique_and_names_do_not_collide() {
    let keys: HashSet<&str> = CATALOG.iter().map(|m| m.key).collect();
    assert_eq!(keys.len(), CATALOG.len());

    for ns in ["", "svc"] {
        let names: HashSet<String> = CATALOG.iter().map(|m| metric_name(ns, m.key).into_owned()).collect();
        assert_eq!(names.len(), CATALOG.len(), "namespace={ns:?}");
    }
}

#[test]
fn mixed_stats_with_missing_field() {
    let cat = [
        *catalog::find("tile38_pid").unwrap(),
        *catalog::find("tile38_read_only").unwrap(),
        *catalog::find("go_goroutines").unwrap(),
        MetricSpec::gauge("missing_field", "Not reported by the server"),
    ];
    let m = stats(json!({"tile38_pid": 42, "tile38_read_only": false, "go_goroutines": 7}));
    let out = render_catalog(&cat, &m, "");

    assert_eq!(out.lines().count(), 12);
    assert_eq!(out.matches("# HELP ").count(), 4);
    assert!(out.contains("\ntile38_pid 42\n"));
    assert!(out.contains("\ntile38_read_only 0\n"));
    assert!(out.contains("\ngo_goroutines 7\n"));
    assert!(out.ends_with("\nmissing_field NaN\n"));
}

#[test]
fn empty_stats_render_every_entry_as_nan() {
    let out = render_catalog(CATALOG, &StatsMap::new(), "");
    assert_eq!(out.lines().count(), CATALOG.len() * 3);
    for spec in CATALOG {
        assert!(out.contains(&format!("\n{} NaN\n", spec.key)), "key={}", spec.key);
    }
}

#[test]
fn output_follows_catalog_order() {
    let out = render_catalog(CATALOG, &StatsMap::new(), "");
    let samples: Vec<&str> = out
        .lines()
        .filter(|l| !l.starts_with('#'))
        .map(|l| l.split(' ').next().unwrap())
        .collect();
    let keys: Vec<&str> = CATALOG.iter().map(|m| m.key).collect();
    assert_eq!(samples, keys);
}
