use serde::Deserialize;
use serde_json::Value;

use super::timestamp::TransportTimestamp;
use super::{TransportError, decode_shape};
use crate::domain::{SecurityType, UrlId, UrlRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TransportSecurityType {
    None,
    Password,
}

impl From<TransportSecurityType> for SecurityType {
    fn from(value: TransportSecurityType) -> Self {
        match value {
            TransportSecurityType::None => SecurityType::None,
            TransportSecurityType::Password => SecurityType::Password,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct UrlJsonRecord {
    #[serde(rename = "ID")]
    id: String,
    redirect_url: String,
    #[serde(default)]
    owner: String,
    #[serde(default)]
    nsfw: bool,
    #[serde(default)]
    clicks: u64,
    #[serde(default)]
    captcha: bool,
    #[serde(default)]
    deletedate: TransportTimestamp,
    #[serde(default)]
    editinfo: Value,
    #[serde(default)]
    unembedify: bool,
    securitytype: TransportSecurityType,
    #[serde(default)]
    creationdate: TransportTimestamp,
}

pub fn decode_urls_response(value: Value) -> Result<Vec<UrlRecord>, TransportError> {
    let parsed: Vec<UrlJsonRecord> = decode_shape(value)?;
    parsed
        .into_iter()
        .map(|record| {
            let id = UrlId::new(record.id).map_err(|err| {
                TransportError::Shape(serde::de::Error::custom(format!("url record: {err}")))
            })?;
            // `0` is what the API sends for links without a scheduled deletion.
            let delete_date = record
                .deletedate
                .into_domain()
                .filter(|stamp| stamp.value() != 0);
            Ok(UrlRecord {
                id,
                redirect_url: record.redirect_url,
                owner: record.owner,
                nsfw: record.nsfw,
                clicks: record.clicks,
                captcha: record.captcha,
                delete_date,
                edit_info: record.editinfo,
                unembedify: record.unembedify,
                security_type: record.securitytype.into(),
                creation_date: record.creationdate.into_domain(),
            })
        })
        .collect()
}
