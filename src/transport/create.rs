use serde_json::{Map, Value};

use crate::domain::{CreateUrl, IdStrategy, IdType, TargetUrl, UrlId, UrlPassword};

pub fn encode_create_body(request: &CreateUrl) -> Value {
    let mut body = Map::new();
    body.insert(
        TargetUrl::FIELD.to_owned(),
        Value::from(request.url().as_str()),
    );
    body.insert("nsfw".to_owned(), Value::from(request.nsfw()));

    match request.id() {
        IdStrategy::Custom(id) => {
            body.insert(UrlId::FIELD.to_owned(), Value::from(id.as_str()));
        }
        IdStrategy::Generated(id_type) => {
            body.insert(IdType::FIELD.to_owned(), Value::from(id_type.as_str()));
        }
    }

    if let Some(password) = request.password() {
        body.insert(
            UrlPassword::FIELD.to_owned(),
            Value::from(password.as_str()),
        );
    }
    if let Some(captcha) = request.captcha() {
        body.insert("captcha".to_owned(), Value::from(captcha));
    }
    if let Some(unembedify) = request.unembedify() {
        body.insert("unembedify".to_owned(), Value::from(unembedify));
    }

    Value::Object(body)
}
