//! Exporter config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use tile38_prom_core::error::{ExporterError, Result};

pub use schema::{BackendSection, ExporterConfig, HttpSection, MetricsSection};

pub fn load_from_file(path: &Path) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path).map_err(|e| {
        ExporterError::Config(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| ExporterError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
