//! tile38-prom exporter library entry.
//!
//! This crate wires configuration, the pooled Tile38 client and the HTTP
//! endpoints into the `tile38-prometheus` service. It is consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod backend;
pub mod cli;
pub mod config;
pub mod ops;
pub mod router;
