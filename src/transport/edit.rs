use serde_json::{Map, Value};

use crate::domain::{EditOptions, EditUrl, UrlId, UrlPassword};

pub fn encode_edit_query(request: &EditUrl) -> Vec<(String, String)> {
    encode_delete_query(request.id())
}

pub fn encode_delete_query(id: &UrlId) -> Vec<(String, String)> {
    vec![(UrlId::FIELD.to_owned(), id.as_str().to_owned())]
}

pub fn encode_edit_body(request: &EditUrl) -> Value {
    let EditOptions {
        nsfw,
        password,
        captcha,
        unembedify,
    } = request.options();

    let mut body = Map::new();
    if let Some(nsfw) = nsfw {
        body.insert("nsfw".to_owned(), Value::from(*nsfw));
    }
    if let Some(password) = password {
        body.insert(
            UrlPassword::FIELD.to_owned(),
            Value::from(password.as_str()),
        );
    }
    if let Some(captcha) = captcha {
        body.insert("captcha".to_owned(), Value::from(*captcha));
    }
    if let Some(unembedify) = unembedify {
        body.insert("unembedify".to_owned(), Value::from(*unembedify));
    }

    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::PasswordUpdate;

    #[test]
    fn encode_edit_query_params() {
        let request = EditUrl::new(
            "aBCde",
            EditOptions {
                nsfw: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            encode_edit_query(&request),
            vec![("id".to_owned(), "aBCde".to_owned())]
        );
    }

    #[test]
    fn encode_edit_body_omits_absent_fields() {
        let request = EditUrl::new(
            "aBCde",
            EditOptions {
                captcha: Some(false),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(encode_edit_body(&request), json!({"captcha": false}));
    }

    #[test]
    fn encode_edit_body_sends_remove_sentinel() {
        let request = EditUrl::new(
            "aBCde",
            EditOptions {
                password: Some(PasswordUpdate::Remove),
                unembedify: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            encode_edit_body(&request),
            json!({"password": "#remove#", "unembedify": true})
        );
    }
}
