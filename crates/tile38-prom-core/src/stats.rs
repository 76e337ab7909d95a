//! Stat extraction with a fixed coercion policy.
//!
//! A missing or non-scalar stat is never an error: it becomes `NaN`, so one
//! bad field cannot abort the rest of a scrape.

use serde_json::{Map, Value};

/// The `stats` object of a `SERVER EXT` reply.
pub type StatsMap = Map<String, Value>;

/// Typed view of a single stats entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    Missing,
    Bool(bool),
    Number(f64),
    /// String, array, object or null.
    Other,
}

impl StatValue {
    /// Classify the entry stored under `key`.
    pub fn lookup(stats: &StatsMap, key: &str) -> Self {
        match stats.get(key) {
            None => StatValue::Missing,
            Some(Value::Bool(b)) => StatValue::Bool(*b),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(f) => StatValue::Number(f),
                None => StatValue::Other,
            },
            Some(_) => StatValue::Other,
        }
    }

    /// Sample value: booleans map to 1/0, numbers pass through, the rest is NaN.
    pub fn sample(self) -> f64 {
        match self {
            StatValue::Bool(true) => 1.0,
            StatValue::Bool(false) => 0.0,
            StatValue::Number(f) => f,
            StatValue::Missing | StatValue::Other => f64::NAN,
        }
    }
}

/// Extract the sample for `key`. Total: never fails.
pub fn extract(stats: &StatsMap, key: &str) -> f64 {
    StatValue::lookup(stats, key).sample()
}
