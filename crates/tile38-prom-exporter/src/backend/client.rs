//! Pooled Tile38 client.

use std::time::Duration;

use async_trait::async_trait;
use bb8::{ErrorSink, Pool, PooledConnection, RunError};
use tokio::sync::broadcast;
use tracing::warn;

use tile38_prom_core::error::{ExporterError, Result};
use tile38_prom_core::StatusDocument;

use super::manager::{self, query_text, Tile38ConnectionManager};
use super::StatusSource;
use crate::config::BackendSection;

/// Logs connection setup failures the pool swallows while a caller waits.
#[derive(Debug, Clone, Copy)]
struct LogErrorSink;

impl ErrorSink<ExporterError> for LogErrorSink {
    fn sink(&self, error: ExporterError) {
        warn!(kind = error.kind().as_str(), error = %error, "tile38 connection setup failed");
    }

    fn boxed_clone(&self) -> Box<dyn ErrorSink<ExporterError>> {
        Box::new(*self)
    }
}

pub struct Tile38Client {
    pool: Pool<Tile38ConnectionManager>,
    addr: String,
    setup_failures: broadcast::Sender<ExporterError>,
}

impl Tile38Client {
    /// Build the client. No connection is opened until the first request.
    pub fn new(cfg: &BackendSection) -> Result<Self> {
        let (host, port) = cfg.endpoint()?;
        let manager =
            Tile38ConnectionManager::new(&host, port, cfg.auth_secret().map(str::to_string))?;
        let addr = manager.addr().to_string();
        let setup_failures = manager.setup_failures();

        let pool = Pool::builder()
            .max_size(cfg.pool_max_size)
            .connection_timeout(Duration::from_millis(cfg.connect_timeout_ms))
            .idle_timeout(Some(Duration::from_secs(cfg.idle_timeout_secs)))
            .test_on_check_out(true)
            .retry_connection(false)
            .error_sink(Box::new(LogErrorSink))
            .build_unchecked(manager);

        Ok(Self { pool, addr, setup_failures })
    }

    /// The guard returns the connection to the pool when dropped, on every path.
    /// A dial, `OUTPUT json` or `AUTH` failure while waiting fails the
    /// checkout at once with that error.
    async fn checkout(&self) -> Result<PooledConnection<'_, Tile38ConnectionManager>> {
        let mut failures = self.setup_failures.subscribe();
        tokio::select! {
            res = self.pool.get() => res.map_err(|e| match e {
                RunError::User(err) => err,
                RunError::TimedOut => ExporterError::Connection(format!(
                    "timed out waiting for a connection to {}",
                    self.addr
                )),
            }),
            Ok(err) = failures.recv() => Err(err),
        }
    }
}

#[async_trait]
impl StatusSource for Tile38Client {
    async fn fetch_status(&self) -> Result<StatusDocument> {
        let mut conn = self.checkout().await?;
        let raw = query_text(&mut *conn, redis::cmd("SERVER").arg("ext")).await?;
        StatusDocument::from_reply(&raw)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.checkout().await?;
        manager::ping(&mut *conn).await
    }
}
