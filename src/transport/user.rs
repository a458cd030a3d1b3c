use serde::Deserialize;
use serde_json::Value;

use super::timestamp::TransportTimestamp;
use super::{TransportError, decode_shape};
use crate::domain::User;

#[derive(Debug, Clone, Deserialize)]
struct UserJsonResponse {
    username: String,
    #[serde(default)]
    is_banned: bool,
    #[serde(default, rename = "2fa_enabled")]
    two_factor_enabled: bool,
    #[serde(default)]
    creation_date: TransportTimestamp,
    #[serde(default)]
    is_premium: bool,
}

pub fn decode_user_response(value: Value) -> Result<User, TransportError> {
    let parsed: UserJsonResponse = decode_shape(value)?;
    Ok(User {
        username: parsed.username,
        is_banned: parsed.is_banned,
        two_factor_enabled: parsed.two_factor_enabled,
        creation_date: parsed.creation_date.into_domain(),
        is_premium: parsed.is_premium,
    })
}
