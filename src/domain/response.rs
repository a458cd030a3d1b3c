use crate::domain::value::{UnixTimestamp, UrlId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ratelimit {
    pub remain: u64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub is_banned: bool,
    pub two_factor_enabled: bool,
    pub creation_date: Option<UnixTimestamp>,
    pub is_premium: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityType {
    None,
    Password,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UrlRecord {
    pub id: UrlId,
    pub redirect_url: String,
    pub owner: String,
    pub nsfw: bool,
    pub clicks: u64,
    pub captcha: bool,
    pub delete_date: Option<UnixTimestamp>,
    /// Edit metadata as returned by the API; its shape is not documented.
    pub edit_info: serde_json::Value,
    pub unembedify: bool,
    pub security_type: SecurityType,
    pub creation_date: Option<UnixTimestamp>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: String,
}
