use serde::Deserialize;
use serde_json::Value;

use super::{TransportError, decode_shape};
use crate::domain::SuccessResponse;

#[derive(Debug, Clone, Deserialize)]
struct SuccessJsonResponse {
    success: String,
}

/// Decode the `{"success": "..."}` reply shared by create, edit and delete.
pub fn decode_success_response(value: Value) -> Result<SuccessResponse, TransportError> {
    let parsed: SuccessJsonResponse = decode_shape(value)?;
    Ok(SuccessResponse {
        success: parsed.success,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_success_response_maps_payload() {
        let parsed = decode_success_response(serde_json::json!({"success": "abc123"})).unwrap();
        assert_eq!(parsed.success, "abc123");
    }

    #[test]
    fn decode_success_response_requires_success_field() {
        assert!(decode_success_response(serde_json::json!({"ok": true})).is_err());
    }
}
