use std::net::{SocketAddr, ToSocketAddrs};

use serde::Deserialize;
use tile38_prom_core::error::{ExporterError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    #[serde(default)]
    pub http: HttpSection,

    #[serde(default)]
    pub backend: BackendSection,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        self.http.validate()?;
        self.backend.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for HttpSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl HttpSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    /// Resolved listen address. `:8080` binds all interfaces; host names such
    /// as `localhost:8080` resolve to their first address.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let raw = self.listen.trim();
        let full = if raw.starts_with(':') {
            format!("0.0.0.0{raw}")
        } else {
            raw.to_string()
        };
        let invalid = |e: &dyn std::fmt::Display| {
            ExporterError::Config(format!("http.listen must be host:port ({raw}): {e}"))
        };
        full.to_socket_addrs()
            .map_err(|e| invalid(&e))?
            .next()
            .ok_or_else(|| invalid(&"no address found"))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendSection {
    #[serde(default = "default_backend_addr")]
    pub addr: String,

    /// AUTH password; empty means no authentication.
    #[serde(default)]
    pub auth: Option<String>,

    #[serde(default = "default_pool_max_size")]
    pub pool_max_size: u32,

    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            addr: default_backend_addr(),
            auth: None,
            pool_max_size: default_pool_max_size(),
            connect_timeout_ms: default_connect_timeout_ms(),
            idle_timeout_secs: default_idle_timeout_secs(),
        }
    }
}

impl BackendSection {
    pub fn validate(&self) -> Result<()> {
        self.endpoint()?;
        if !(1..=128).contains(&self.pool_max_size) {
            return Err(ExporterError::Config(
                "backend.pool_max_size must be between 1 and 128".into(),
            ));
        }
        if !(100..=60000).contains(&self.connect_timeout_ms) {
            return Err(ExporterError::Config(
                "backend.connect_timeout_ms must be between 100 and 60000".into(),
            ));
        }
        if self.idle_timeout_secs == 0 {
            return Err(ExporterError::Config(
                "backend.idle_timeout_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Split `addr` into host and port. An empty host (`:9851`) means localhost.
    pub fn endpoint(&self) -> Result<(String, u16)> {
        let raw = self.addr.trim();
        let (host, port) = raw.rsplit_once(':').ok_or_else(|| {
            ExporterError::Config(format!("backend.addr must be host:port ({raw})"))
        })?;
        let port: u16 = port.parse().map_err(|_| {
            ExporterError::Config(format!("backend.addr has an invalid port ({raw})"))
        })?;
        let host = host.trim_start_matches('[').trim_end_matches(']');
        let host = if host.is_empty() { "127.0.0.1" } else { host };
        Ok((host.to_string(), port))
    }

    pub fn auth_secret(&self) -> Option<&str> {
        self.auth.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    /// Prefix for every metric name; empty for none.
    #[serde(default)]
    pub namespace: String,
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        if !is_valid_namespace(&self.namespace) {
            return Err(ExporterError::Config(format!(
                "metrics.namespace must match [a-zA-Z_:][a-zA-Z0-9_:]* ({})",
                self.namespace
            )));
        }
        Ok(())
    }
}

fn is_valid_namespace(ns: &str) -> bool {
    let mut chars = ns.chars();
    match chars.next() {
        None => true,
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
        }
        Some(_) => false,
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_backend_addr() -> String {
    "127.0.0.1:9851".into()
}
fn default_pool_max_size() -> u32 {
    16
}
fn default_connect_timeout_ms() -> u64 {
    5000
}
fn default_idle_timeout_secs() -> u64 {
    240
}
