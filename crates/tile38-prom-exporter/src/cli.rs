//! Command line surface.
//!
//! Every option can also come from the environment. A flag given on the
//! command line wins over its environment variable, and both win over the
//! YAML file.

use std::path::PathBuf;

use clap::Parser;
use tile38_prom_core::error::Result;

use crate::config::{self, ExporterConfig};

#[derive(Parser, Debug, Default)]
#[command(
    name = "tile38-prometheus",
    version,
    about = "Serve Tile38 server statistics as Prometheus metrics",
    after_help = "Examples:\n    tile38-prometheus --tile38-addr 10.43.12.45:9851\n    TILE38_ADDR=10.43.12.45:9851 tile38-prometheus"
)]
pub struct Cli {
    /// Optional YAML configuration file
    #[arg(short, long, env = "TILE38_PROM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tile38 AUTH password
    #[arg(long = "tile38-auth", env = "TILE38_AUTH", hide_env_values = true)]
    pub tile38_auth: Option<String>,

    /// Address of the Tile38 instance [default: :9851]
    #[arg(long = "tile38-addr", env = "TILE38_ADDR")]
    pub tile38_addr: Option<String>,

    /// HTTP server listening address [default: :8080]
    #[arg(long = "http-addr", env = "HTTP_ADDR")]
    pub http_addr: Option<String>,

    /// Optional metrics namespace
    #[arg(long, env = "METRICS_NAMESPACE")]
    pub namespace: Option<String>,
}

impl Cli {
    /// Overlay the options that were given onto `cfg`.
    pub fn apply(&self, cfg: &mut ExporterConfig) {
        if let Some(v) = &self.tile38_addr {
            cfg.backend.addr = v.clone();
        }
        if let Some(v) = &self.tile38_auth {
            cfg.backend.auth = Some(v.clone());
        }
        if let Some(v) = &self.http_addr {
            cfg.http.listen = v.clone();
        }
        if let Some(v) = &self.namespace {
            cfg.metrics.namespace = v.clone();
        }
    }

    /// Final configuration: file (or defaults), then overrides, then validation.
    pub fn resolve(&self) -> Result<ExporterConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_file(path)?,
            None => ExporterConfig::default(),
        };
        self.apply(&mut cfg);
        cfg.validate()?;
        Ok(cfg)
    }
}
