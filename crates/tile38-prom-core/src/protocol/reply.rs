//! Generic JSON reply validation.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ExporterError, Result};

/// Message used when a reply carries neither `ok: true` nor an `err` text.
pub const MISSING_STATUS: &str = "backend reply missing ok status";

/// Whether the reply reports success. Read leniently: `true`, a non-zero
/// number or a string such as `"true"`/`"1"` all count as ok.
fn reply_ok(value: &Value) -> bool {
    match value.get("ok") {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => matches!(s.trim(), "1" | "t" | "T" | "true" | "TRUE" | "True"),
        _ => false,
    }
}

/// Error text of a not-ok reply. Non-string values are kept as their JSON text.
fn reply_err(value: &Value) -> String {
    match value.get("err") {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => MISSING_STATUS.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Parse `raw` as JSON and require an ok status. A not-ok reply becomes a
/// backend error carrying its `err` message verbatim.
pub fn parse_reply(raw: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| ExporterError::Parse(format!("invalid json: {e}")))?;
    if !value.is_object() {
        return Err(ExporterError::Parse("reply is not a json object".into()));
    }
    if !reply_ok(&value) {
        return Err(ExporterError::Backend(reply_err(&value)));
    }
    Ok(value)
}

/// Validate the reply to a setup command (`OUTPUT`, `AUTH`).
///
/// A RESP simple `OK` is accepted as well, since the very first reply on a
/// connection may arrive before JSON output takes effect.
pub fn check_ack(raw: &str) -> Result<()> {
    if raw.trim().eq_ignore_ascii_case("ok") {
        return Ok(());
    }
    parse_reply(raw).map(|_| ())
}

#[derive(Debug, Deserialize)]
struct PingReply {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    ping: Option<String>,
}

/// Whether `raw` is a healthy answer to `PING`, in RESP or JSON form.
pub fn is_pong(raw: &str) -> bool {
    if raw.trim().eq_ignore_ascii_case("pong") {
        return true;
    }
    match serde_json::from_str::<PingReply>(raw) {
        Ok(p) => p.ok && p.ping.as_deref().is_some_and(|s| s.eq_ignore_ascii_case("pong")),
        Err(_) => false,
    }
}

/// Remove the volatile `elapsed` timing field, if present.
pub fn strip_elapsed(value: &mut Value) {
    if let Value::Object(map) = value {
        map.remove("elapsed");
    }
}
