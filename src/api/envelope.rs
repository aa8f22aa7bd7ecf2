use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{backend_message, ApiError};

/// Strip the `{success, data}` envelope some endpoints wrap their payload in.
///
/// An object is an envelope only when it carries a boolean `success`; any
/// other body is the payload itself. `success: false` becomes
/// [`ApiError::Rejected`].
pub fn unwrap_envelope(body: Value) -> Result<Value, ApiError> {
    match body {
        Value::Object(mut map) if map.get("success").is_some_and(Value::is_boolean) => {
            if map.get("success").and_then(Value::as_bool) == Some(false) {
                let body = Value::Object(map);
                return Err(ApiError::Rejected(
                    backend_message(&body).unwrap_or_else(|| "Request rejected".to_string()),
                ));
            }
            Ok(map.remove("data").unwrap_or(Value::Null))
        }
        other => Ok(other),
    }
}

/// Unwrap then deserialize. An empty payload decodes to `()`.
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    let payload = unwrap_envelope(body)?;
    serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}
