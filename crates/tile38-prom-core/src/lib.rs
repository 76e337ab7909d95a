//! tile38-prom core: the translation layer between a Tile38 status reply and
//! Prometheus text exposition.
//!
//! This crate holds the metric catalog, the stat extraction policy, the
//! renderer, reply validation and the shared error surface. It carries no
//! transport or runtime dependencies so it can be tested in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths surface as `ExporterError`/`Result`; a missing stat is
//! not a failure at all and renders as `NaN`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod catalog;
pub mod error;
pub mod protocol;
pub mod render;
pub mod stats;

/// Shared result type.
pub use error::{ExporterError, Result};
pub use catalog::{MetricKind, MetricSpec, CATALOG};
pub use protocol::status::StatusDocument;
