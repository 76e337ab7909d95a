//! Backend access.
//!
//! The HTTP layer only sees `StatusSource`; the Tile38 implementation keeps
//! a `bb8` pool of RESP connections negotiated to JSON output.

pub mod client;
pub mod manager;

use async_trait::async_trait;

use tile38_prom_core::error::Result;
use tile38_prom_core::StatusDocument;

pub use client::Tile38Client;
pub use manager::Tile38ConnectionManager;

/// Something that can produce a status document on demand.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// One status round trip. No retries.
    async fn fetch_status(&self) -> Result<StatusDocument>;

    /// Cheap liveness check.
    async fn ping(&self) -> Result<()>;
}
