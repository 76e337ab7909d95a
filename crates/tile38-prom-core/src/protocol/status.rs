//! `SERVER EXT` status document.

use serde_json::Value;

use crate::catalog::MetricSpec;
use crate::error::Result;
use crate::protocol::reply::{parse_reply, strip_elapsed};
use crate::render::render_catalog;
use crate::stats::StatsMap;

/// Validated status reply, reduced to its `stats` object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusDocument {
    stats: StatsMap,
}

impl StatusDocument {
    /// Parse raw reply text. Fails on invalid JSON or `ok != true`.
    pub fn from_reply(raw: &str) -> Result<Self> {
        let mut value = parse_reply(raw)?;
        strip_elapsed(&mut value);
        Ok(Self::from_value(value))
    }

    /// Build from an already validated reply. A missing or non-object
    /// `stats` yields an empty map.
    pub fn from_value(value: Value) -> Self {
        let stats = match value {
            Value::Object(mut map) => match map.remove("stats") {
                Some(Value::Object(stats)) => stats,
                _ => StatsMap::new(),
            },
            _ => StatsMap::new(),
        };
        Self { stats }
    }

    pub fn stats(&self) -> &StatsMap {
        &self.stats
    }

    /// Render `catalog` against this document.
    pub fn render(&self, catalog: &[MetricSpec], namespace: &str) -> String {
        render_catalog(catalog, &self.stats, namespace)
    }
}
