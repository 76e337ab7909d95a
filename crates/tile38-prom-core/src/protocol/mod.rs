//! Backend reply handling.
//!
//! With `OUTPUT json` negotiated, every Tile38 reply is a JSON document
//! carrying an `ok` flag, an `err` message on failure and an `elapsed`
//! timing field. This module validates those replies and pulls out the
//! pieces the exporter needs. Parsers never panic: malformed input is
//! reported as `ExporterError`.

pub mod reply;
pub mod status;
