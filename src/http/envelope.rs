//! The `{"success", "error", "return"}` envelope wrapping every response.

use crate::error::EnvelopeError;
use serde_json::Value;

/// Extract the `return` payload from a raw response body.
///
/// - body not a JSON object → [`EnvelopeError::MalformedResponse`]
/// - no `success` field → [`EnvelopeError::MissingSuccessField`]
/// - `success` not textually `"1"` → [`EnvelopeError::ApplicationFailure`]
///   with the `error` text when there is one
///
/// On success returns the `return` value, or `Value::Null` when absent.
pub fn parse_envelope(raw: &[u8]) -> Result<Value, EnvelopeError> {
    let value: Value = serde_json::from_slice(raw)
        .map_err(|e| EnvelopeError::MalformedResponse(e.to_string()))?;

    let mut envelope = match value {
        Value::Object(envelope) => envelope,
        other => {
            return Err(EnvelopeError::MalformedResponse(format!(
                "expected a JSON object, got {}",
                kind_of(&other)
            )))
        }
    };

    let success = envelope
        .get("success")
        .filter(|v| !v.is_null())
        .ok_or(EnvelopeError::MissingSuccessField)?;

    if token_text(success) != "1" {
        let message = envelope
            .get("error")
            .filter(|v| !v.is_null())
            .map(token_text);
        return Err(EnvelopeError::ApplicationFailure { message });
    }

    Ok(envelope.remove("return").unwrap_or(Value::Null))
}

/// Textual form of a JSON token: strings without quotes, everything else as
/// serialized.
fn token_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
