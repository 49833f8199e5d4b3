use serde_json::Value;

use super::{NormalizeError, Result};

const FIELD: &str = "plr";

/// Normalizes the packet-loss-rate member of the result payload.
///
/// Absent and the string `"0"` both mean 0. A quoted numeral is unquoted and a bare
/// numeral is stringified; both then go through the same decimal integer parse.
pub fn normalize_packet_loss(raw: Option<&Value>) -> Result<u32> {
    let text = match raw {
        None => return Ok(0),
        Some(Value::String(text)) if text == "0" => return Ok(0),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(other) => {
            return Err(NormalizeError::decode(
                FIELD,
                format!("expected a numeral, found `{other}`"),
            ));
        }
    };
    text.parse::<u32>()
        .map_err(|error| NormalizeError::decode(FIELD, format!("`{text}` is not a rate: {error}")))
}
