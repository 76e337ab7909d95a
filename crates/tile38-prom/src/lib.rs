//! Top-level facade crate for tile38-prom.
//!
//! Re-exports the translation core and the exporter library so users can depend on a single crate.

pub mod core {
    pub use tile38_prom_core::*;
}

pub mod exporter {
    pub use tile38_prom_exporter::*;
}
