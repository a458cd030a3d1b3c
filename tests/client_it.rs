use httpmock::prelude::*;
use serde_json::json;

use fasmga::{
    EditOptions, ErrorKind, FasmgaClient, FasmgaError, IdType, PasswordUpdate, ShortOptions,
    ValidationError,
};

const TOKEN: &str = "integration-token";

fn build_client(server: &MockServer) -> FasmgaClient {
    FasmgaClient::builder(TOKEN)
        .base_url(server.base_url())
        .build()
        .expect("client should build against the mock server")
}

async fn mock_ratelimit(server: &MockServer, remain: u64) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/ratelimit")
                .header("Authorization", TOKEN);
            then.status(200)
                .header("content-type", "application/json")
                .body(format!(r#"{{"remain": {remain}, "message": "quota"}}"#));
        })
        .await
}

#[tokio::test]
async fn short_creates_url_with_generated_id() {
    let server = MockServer::start_async().await;
    let ratelimit = mock_ratelimit(&server, 5).await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/create")
                .header("Authorization", TOKEN)
                .json_body(json!({
                    "url": "https://example.com",
                    "nsfw": false,
                    "idtype": "aBCde"
                }));
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"success": "abc123"}"#);
        })
        .await;
    let client = build_client(&server);

    let response = client
        .short(ShortOptions::generated(
            "https://example.com",
            false,
            IdType::MixedCase,
        ))
        .await
        .expect("short should succeed");

    assert_eq!(response.success, "abc123");
    ratelimit.assert_calls_async(1).await;
    create.assert_calls_async(1).await;
}

#[tokio::test]
async fn short_without_url_never_reaches_create() {
    let server = MockServer::start_async().await;
    let _ratelimit = mock_ratelimit(&server, 5).await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST).path("/create");
            then.status(200).body(r#"{"success": "abc123"}"#);
        })
        .await;
    let client = build_client(&server);

    let options = ShortOptions {
        nsfw: Some(false),
        id_type: Some(IdType::MixedCase),
        ..Default::default()
    };
    let err = client.short(options).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    create.assert_calls_async(0).await;
}

#[tokio::test]
async fn exhausted_quota_skips_target_endpoint() {
    let server = MockServer::start_async().await;
    let _ratelimit = mock_ratelimit(&server, 0).await;
    let list = server
        .mock_async(|when, then| {
            when.method(GET).path("/list");
            then.status(200).body("[]");
        })
        .await;
    let client = build_client(&server);

    let err = client.get_urls().await.unwrap_err();

    assert!(matches!(err, FasmgaError::RateLimited { .. }));
    list.assert_calls_async(0).await;
}

#[tokio::test]
async fn bad_request_surfaces_body_in_validation_error() {
    let server = MockServer::start_async().await;
    let _ratelimit = mock_ratelimit(&server, 5).await;
    let _create = server
        .mock_async(|when, then| {
            when.method(POST).path("/create");
            then.status(400)
                .header("content-type", "application/json")
                .body(r#"{"reason": "bad"}"#);
        })
        .await;
    let client = build_client(&server);

    let err = client
        .short(ShortOptions::custom("https://example.com", false, "taken"))
        .await
        .unwrap_err();

    match err {
        FasmgaError::Validation(ValidationError::Rejected { body }) => {
            assert_eq!(body, r#"{"reason":"bad"}"#);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_protocol_error() {
    let server = MockServer::start_async().await;
    let _ratelimit = mock_ratelimit(&server, 5).await;
    let _user = server
        .mock_async(|when, then| {
            when.method(GET).path("/user");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;
    let client = build_client(&server);

    let err = client.get_user().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn delete_and_edit_send_id_as_query() {
    let server = MockServer::start_async().await;
    let _ratelimit = mock_ratelimit(&server, 5).await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/delete")
                .query_param("id", "aBCde")
                .header("Authorization", TOKEN);
            then.status(200).body(r#"{"success": "deleted"}"#);
        })
        .await;
    let edit = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path("/edit")
                .query_param("id", "aBCde")
                .json_body(json!({"password": "#remove#", "captcha": true}));
            then.status(200).body(r#"{"success": "edited"}"#);
        })
        .await;
    let client = build_client(&server);

    let options = EditOptions {
        password: Some(PasswordUpdate::Remove),
        captcha: Some(true),
        ..Default::default()
    };
    let edited = client.edit("aBCde", options).await.expect("edit should succeed");
    let deleted = client.delete("aBCde").await.expect("delete should succeed");

    assert_eq!(edited.success, "edited");
    assert_eq!(deleted.success, "deleted");
    edit.assert_calls_async(1).await;
    delete.assert_calls_async(1).await;
}

#[tokio::test]
async fn edit_without_fields_never_reaches_edit() {
    let server = MockServer::start_async().await;
    let _ratelimit = mock_ratelimit(&server, 5).await;
    let edit = server
        .mock_async(|when, then| {
            when.method(PATCH).path("/edit");
            then.status(200).body(r#"{"success": "edited"}"#);
        })
        .await;
    let client = build_client(&server);

    let err = client
        .edit("id1", EditOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FasmgaError::Validation(ValidationError::NoEditableField)
    ));
    edit.assert_calls_async(0).await;
}
