//! Prometheus text exposition rendering.
//!
//! Each catalog entry becomes exactly three newline-terminated lines:
//! `# HELP`, `# TYPE`, then the sample. Output is deterministic: no
//! timestamps, no labels.

use std::borrow::Cow;
use std::fmt::Write;

use crate::catalog::MetricSpec;
use crate::stats::{extract, StatsMap};

/// Metric name for `key`, prefixed with `namespace_` when a namespace is set.
pub fn metric_name<'a>(namespace: &str, key: &'a str) -> Cow<'a, str> {
    if namespace.is_empty() {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(format!("{namespace}_{key}"))
    }
}

/// Shortest round-trip decimal, never in exponent notation.
pub fn format_sample(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        // f64's Display is shortest round-trip and never switches to exponent form.
        format!("{v}")
    }
}

/// Append one rendered block to `out`.
pub fn render_into(out: &mut String, spec: &MetricSpec, value: f64, namespace: &str) {
    let name = metric_name(namespace, spec.key);
    let _ = writeln!(out, "# HELP {} {}", name, spec.help);
    let _ = writeln!(out, "# TYPE {} {}", name, spec.kind.as_str());
    let _ = writeln!(out, "{} {}", name, format_sample(value));
}

/// Render one catalog entry with its value.
pub fn render(spec: &MetricSpec, value: f64, namespace: &str) -> String {
    let mut out = String::new();
    render_into(&mut out, spec, value, namespace);
    out
}

/// Render every entry of `catalog`, in order, against `stats`.
pub fn render_catalog(catalog: &[MetricSpec], stats: &StatsMap, namespace: &str) -> String {
    let mut out = String::with_capacity(catalog.len() * 128);
    for spec in catalog {
        render_into(&mut out, spec, extract(stats, spec.key), namespace);
    }
    out
}
