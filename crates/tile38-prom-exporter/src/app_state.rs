//! Shared application state for the exporter.
//!
//! Built once at startup: the catalog is read-only, the status source owns
//! the only shared mutable resource (the connection pool).

use std::sync::Arc;

use tile38_prom_core::error::Result;
use tile38_prom_core::{MetricSpec, CATALOG};

use crate::backend::{StatusSource, Tile38Client};
use crate::config::ExporterConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    namespace: String,
    catalog: &'static [MetricSpec],
    source: Arc<dyn StatusSource>,
}

impl AppState {
    /// Build state backed by a pooled Tile38 client.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: &ExporterConfig) -> Result<Self> {
        let client = Tile38Client::new(&cfg.backend)?;
        Ok(Self::with_source(cfg.metrics.namespace.clone(), Arc::new(client)))
    }

    /// Build state around any status source, using the full catalog.
    pub fn with_source(namespace: impl Into<String>, source: Arc<dyn StatusSource>) -> Self {
        Self::with_catalog(namespace, CATALOG, source)
    }

    pub fn with_catalog(
        namespace: impl Into<String>,
        catalog: &'static [MetricSpec],
        source: Arc<dyn StatusSource>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                namespace: namespace.into(),
                catalog,
                source,
            }),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.inner.namespace
    }

    pub fn catalog(&self) -> &'static [MetricSpec] {
        self.inner.catalog
    }

    pub fn source(&self) -> Arc<dyn StatusSource> {
        Arc::clone(&self.inner.source)
    }
}
