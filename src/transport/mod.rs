//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod create;
mod edit;
mod ratelimit;
mod success;
mod timestamp;
mod urls;
mod user;

use serde_json::Value;

pub use create::encode_create_body;
pub use edit::{encode_delete_query, encode_edit_body, encode_edit_query};
pub use ratelimit::{decode_quota_check, decode_ratelimit_response};
pub use success::decode_success_response;
pub use urls::decode_urls_response;
pub use user::decode_user_response;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("unparseable body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unparseable body: expected a JSON object or array")]
    NotStructured,

    #[error("unexpected response shape: {0}")]
    Shape(#[source] serde_json::Error),
}

/// Parse a response body as structured JSON (object or array).
pub fn parse_body(body: &str) -> Result<Value, TransportError> {
    let value: Value = serde_json::from_str(body)?;
    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        _ => Err(TransportError::NotStructured),
    }
}

fn decode_shape<T>(value: Value) -> Result<T, TransportError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(value).map_err(TransportError::Shape)
}
