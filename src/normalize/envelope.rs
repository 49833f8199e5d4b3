use serde::Deserialize;
use serde_json::Value;

use super::{NormalizeError, Result};

/// The only status code whose payload is interpreted.
pub const SUCCESS_STATUS: i64 = 200;

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "statusCode")]
    status_code: i64,
    #[serde(rename = "statusText", default)]
    status_text: String,
    #[serde(default)]
    data: Option<Value>,
}

/// Unwraps the status envelope and hands back the embedded payload untouched.
pub(super) fn open(raw: &[u8]) -> Result<Value> {
    let envelope: Envelope = serde_json::from_slice(raw)
        .map_err(|error| NormalizeError::Protocol(error.to_string()))?;
    if envelope.status_code != SUCCESS_STATUS {
        return Err(NormalizeError::Remote {
            code: envelope.status_code,
            text: envelope.status_text,
        });
    }
    envelope
        .data
        .filter(|data| !data.is_null())
        .ok_or_else(|| NormalizeError::Protocol("envelope carries no `data` payload".to_string()))
}
