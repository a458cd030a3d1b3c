use serde::Deserialize;
use serde_json::Value;

use super::{TransportError, decode_shape, parse_body};
use crate::domain::Ratelimit;

#[derive(Debug, Clone, Deserialize)]
struct RatelimitJsonResponse {
    remain: u64,
    #[serde(default)]
    message: String,
}

/// What the pre-flight check needs from a `/ratelimit` reply.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotaCheck {
    pub remain: Option<f64>,
    pub message: Option<String>,
}

impl QuotaCheck {
    /// The quota is exhausted only when `remain` is exactly zero.
    pub fn is_exhausted(&self) -> bool {
        self.remain == Some(0.0)
    }
}

/// Lenient decode used before every call: only the body must be structured JSON.
pub fn decode_quota_check(body: &str) -> Result<QuotaCheck, TransportError> {
    let value = parse_body(body)?;
    Ok(QuotaCheck {
        remain: value.get("remain").and_then(Value::as_f64),
        message: value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned),
    })
}

pub fn decode_ratelimit_response(value: Value) -> Result<Ratelimit, TransportError> {
    let parsed: RatelimitJsonResponse = decode_shape(value)?;
    Ok(Ratelimit {
        remain: parsed.remain,
        message: parsed.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_check_detects_exhausted_quota() {
        let quota = decode_quota_check(r#"{"remain": 0, "message": "slow down"}"#).unwrap();
        assert!(quota.is_exhausted());
        assert_eq!(quota.message.as_deref(), Some("slow down"));

        let quota = decode_quota_check(r#"{"remain": 12}"#).unwrap();
        assert!(!quota.is_exhausted());
    }

    #[test]
    fn quota_check_tolerates_missing_remain() {
        let quota = decode_quota_check(r#"{"detail": "whatever"}"#).unwrap();
        assert_eq!(quota.remain, None);
        assert!(!quota.is_exhausted());
    }

    #[test]
    fn quota_check_rejects_unparseable_body() {
        assert!(decode_quota_check("Too Many Requests").is_err());
    }

    #[test]
    fn decode_ratelimit_response_maps_payload() {
        let value = serde_json::json!({"remain": 42, "message": "ok"});
        let parsed = decode_ratelimit_response(value).unwrap();
        assert_eq!(
            parsed,
            Ratelimit {
                remain: 42,
                message: "ok".to_owned()
            }
        );
    }

    #[test]
    fn decode_ratelimit_response_requires_remain() {
        let err = decode_ratelimit_response(serde_json::json!({"message": "ok"})).unwrap_err();
        assert!(matches!(err, TransportError::Shape(_)));
    }
}
