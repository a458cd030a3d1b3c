use serde::Deserialize;
use serde::de::Error as DeError;

use crate::domain::UnixTimestamp;

/// Timestamp returned by Fasmga as a JSON integer, a JSON float, or `null`.
///
/// Fractional seconds are truncated; negative values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransportTimestamp(Option<u64>);

impl TransportTimestamp {
    pub fn into_domain(self) -> Option<UnixTimestamp> {
        self.0.map(UnixTimestamp::new)
    }
}

impl<'de> Deserialize<'de> for TransportTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: serde_json::Value = Deserialize::deserialize(deserializer)?;

        match raw {
            serde_json::Value::Null => Ok(Self(None)),
            serde_json::Value::Number(number) => {
                if let Some(value) = number.as_u64() {
                    return Ok(Self(Some(value)));
                }
                match number.as_f64() {
                    Some(value) if value.is_finite() && value >= 0.0 => {
                        Ok(Self(Some(value.trunc() as u64)))
                    }
                    _ => Err(D::Error::custom(
                        "expected timestamp to be a non-negative number",
                    )),
                }
            }
            _ => Err(D::Error::custom(
                "expected timestamp field to be JSON number or null",
            )),
        }
    }
}
