//! Connection lifecycle for the pool.
//!
//! A connection is only handed to the pool after `OUTPUT json` and, when a
//! secret is configured, `AUTH` both succeed. Reuse is gated on `PING`.
//! Setup failures are also published on a broadcast channel so a caller
//! waiting on the pool sees the cause instead of a checkout timeout.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{Client, Cmd, RedisError};
use tokio::sync::broadcast;
use tracing::debug;

use tile38_prom_core::error::{ExporterError, Result};
use tile38_prom_core::protocol::reply::{check_ack, is_pong};

pub struct Tile38ConnectionManager {
    client: Client,
    addr: String,
    auth: Option<String>,
    setup_failures: broadcast::Sender<ExporterError>,
}

impl Tile38ConnectionManager {
    pub fn new(host: &str, port: u16, auth: Option<String>) -> Result<Self> {
        let client = Client::open((host.to_string(), port)).map_err(|e| {
            ExporterError::Config(format!("invalid backend address {host}:{port}: {e}"))
        })?;
        let (setup_failures, _) = broadcast::channel(16);
        Ok(Self {
            client,
            addr: format!("{host}:{port}"),
            auth,
            setup_failures,
        })
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Sender side of the setup failure channel; subscribe before checkout.
    pub(crate) fn setup_failures(&self) -> broadcast::Sender<ExporterError> {
        self.setup_failures.clone()
    }

    async fn establish(&self) -> Result<MultiplexedConnection> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| ExporterError::Connection(format!("dial {}: {e}", self.addr)))?;

        let reply = query_text(&mut conn, redis::cmd("OUTPUT").arg("json")).await?;
        check_ack(&reply)
            .map_err(|e| ExporterError::Connection(format!("output json: {e}")))?;

        if let Some(secret) = &self.auth {
            let reply = query_text(&mut conn, redis::cmd("AUTH").arg(secret)).await?;
            check_ack(&reply).map_err(|e| ExporterError::Connection(format!("auth: {e}")))?;
        }

        debug!(addr = %self.addr, auth = self.auth.is_some(), "tile38 connection established");
        Ok(conn)
    }
}

/// Run `cmd` and return its reply as text. Transport failures map to
/// `Connection`, server-side error replies to `Backend`.
pub(crate) async fn query_text(conn: &mut MultiplexedConnection, cmd: &Cmd) -> Result<String> {
    let reply: String = cmd.query_async(conn).await.map_err(map_redis_error)?;
    Ok(reply)
}

/// Liveness check shared by pool validation and readiness checks.
pub(crate) async fn ping(conn: &mut MultiplexedConnection) -> Result<()> {
    let reply = query_text(conn, &redis::cmd("PING")).await?;
    if is_pong(&reply) {
        Ok(())
    } else {
        Err(ExporterError::Connection(format!("expected PONG, got {reply}")))
    }
}

fn map_redis_error(e: RedisError) -> ExporterError {
    if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout() {
        ExporterError::Connection(e.to_string())
    } else {
        ExporterError::Backend(e.to_string())
    }
}

#[async_trait]
impl bb8::ManageConnection for Tile38ConnectionManager {
    type Connection = MultiplexedConnection;
    type Error = ExporterError;

    async fn connect(&self) -> Result<MultiplexedConnection> {
        let result = self.establish().await;
        if let Err(e) = &result {
            // Err only means no caller is waiting right now.
            let _ = self.setup_failures.send(e.clone());
        }
        result
    }

    async fn is_valid(&self, conn: &mut MultiplexedConnection) -> Result<()> {
        ping(conn).await
    }

    fn has_broken(&self, _conn: &mut MultiplexedConnection) -> bool {
        false
    }
}
