//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde_json::Value;
use tracing::Instrument;
use url::Url;

use crate::domain::{
    EditOptions, EditUrl, Ratelimit, ShortOptions, SuccessResponse, Token, UrlId, UrlRecord, User,
    ValidationError,
};

const DEFAULT_BASE_URL: &str = "https://api.fasmga.org";

type BoxError = Box<dyn StdError + Send + Sync>;
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpRequest {
    method: Method,
    url: Url,
    authorization: HeaderValue,
    json: Option<Value>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method, request.url)
                .header(AUTHORIZATION, request.authorization);
            if let Some(json) = &request.json {
                builder = builder.json(json);
            }
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Ratelimit,
    User,
    List,
    Create,
    Delete,
    Edit,
}

impl Endpoint {
    fn path(self) -> &'static str {
        match self {
            Self::Ratelimit => "ratelimit",
            Self::User => "user",
            Self::List => "list",
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Edit => "edit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Flat classification of [`FasmgaError`].
pub enum ErrorKind {
    /// Bad client setup, reported at construction.
    Configuration,
    /// Bad caller input, or the API answered `400`.
    Validation,
    /// The pre-flight check found no remaining quota.
    RateLimit,
    /// The response body could not be parsed.
    Protocol,
    /// The API answered `500`.
    Server,
    /// The API answered with any other non-200 status.
    Unknown,
    /// The request never produced an HTTP response.
    Transport,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Validation => "validation",
            Self::RateLimit => "rate_limit",
            Self::Protocol => "protocol",
            Self::Server => "server",
            Self::Unknown => "unknown",
            Self::Transport => "transport",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`FasmgaClient`].
///
/// Only construction can fail with [`FasmgaError::Configuration`]; every call
/// afterwards reports failures through its `Result`, never by panicking.
pub enum FasmgaError {
    /// The token or a builder setting is unusable.
    #[error("configuration error: {0}")]
    Configuration(#[source] ValidationError),

    /// Caller input was rejected locally, or the API answered `400`.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The pre-flight `/ratelimit` check reported no remaining quota.
    #[error("rate limit exhausted: {message}")]
    RateLimited { message: String },

    /// Response body is not structured JSON or does not match the expected shape.
    #[error("protocol error: {0}")]
    Protocol(#[source] BoxError),

    /// The API answered `500 Internal Server Error`.
    #[error("{status} status code, internal server error")]
    Server { status: u16 },

    /// The API answered with a status this client does not know how to map.
    #[error("unknown error: unexpected HTTP status {status}")]
    Unknown { status: u16 },

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),
}

impl FasmgaError {
    /// Flat kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Validation(_) => ErrorKind::Validation,
            Self::RateLimited { .. } => ErrorKind::RateLimit,
            Self::Protocol(_) => ErrorKind::Protocol,
            Self::Server { .. } => ErrorKind::Server,
            Self::Unknown { .. } => ErrorKind::Unknown,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }

    fn protocol(err: crate::transport::TransportError) -> Self {
        Self::Protocol(Box::new(err))
    }
}

#[derive(Debug, Clone)]
/// Builder for [`FasmgaClient`].
///
/// Use this when you need to customize the base url, timeout, or user-agent.
pub struct FasmgaClientBuilder {
    token: String,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl FasmgaClientBuilder {
    /// Create a builder with the default base url and no timeout/user-agent override.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base url (`https://api.fasmga.org` by default).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`FasmgaClient`].
    ///
    /// Fails with [`FasmgaError::Configuration`] for an empty token or an invalid
    /// base url, and [`FasmgaError::Transport`] if the HTTP client cannot be created.
    pub fn build(self) -> Result<FasmgaClient, FasmgaError> {
        let token = Token::new(self.token).map_err(FasmgaError::Configuration)?;
        let authorization = authorization_header(&token)?;
        let base_url = parse_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| FasmgaError::Transport(Box::new(err)))?;

        Ok(FasmgaClient {
            token,
            base_url,
            authorization,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

// `Token` only admits visible ASCII, which is always a valid header value.
fn authorization_header(token: &Token) -> Result<HeaderValue, FasmgaError> {
    let mut value = HeaderValue::from_str(token.as_str())
        .map_err(|_| FasmgaError::Configuration(ValidationError::InvalidToken))?;
    value.set_sensitive(true);
    Ok(value)
}

fn parse_base_url(raw: &str) -> Result<Url, FasmgaError> {
    let invalid = || {
        FasmgaError::Configuration(ValidationError::InvalidUrl {
            input: raw.to_owned(),
        })
    };
    let url = Url::parse(raw.trim()).map_err(|_| invalid())?;
    if url.cannot_be_a_base() {
        return Err(invalid());
    }
    Ok(url)
}

#[derive(Clone)]
/// High-level Fasmga client.
///
/// Every operation first asks `/ratelimit` whether quota remains, then issues
/// exactly one request and maps the HTTP outcome into a `Result`:
/// - `200` decodes into the operation's response type,
/// - `400` becomes [`FasmgaError::Validation`] carrying the response body,
/// - `500` becomes [`FasmgaError::Server`],
/// - anything else becomes [`FasmgaError::Unknown`].
///
/// A body that is not JSON is a [`FasmgaError::Protocol`] regardless of status.
/// The client holds only read-only state and can be cloned and shared freely.
pub struct FasmgaClient {
    token: Token,
    base_url: Url,
    authorization: HeaderValue,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for FasmgaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FasmgaClient")
            .field("token", &self.token)
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl FasmgaClient {
    /// Create a client using the default base url.
    ///
    /// Fails with [`FasmgaError::Configuration`] when the token is empty.
    /// For more customization, use [`FasmgaClient::builder`].
    pub fn new(token: impl Into<String>) -> Result<Self, FasmgaError> {
        Self::builder(token).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(token: impl Into<String>) -> FasmgaClientBuilder {
        FasmgaClientBuilder::new(token)
    }

    /// The token this client authenticates with.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Remaining quota as reported by `/ratelimit`.
    pub async fn get_ratelimit(&self) -> Result<Ratelimit, FasmgaError> {
        self.preflight().await?;
        let value = self.call(Method::GET, Endpoint::Ratelimit, None, None).await?;
        crate::transport::decode_ratelimit_response(value).map_err(FasmgaError::protocol)
    }

    /// Profile of the user owning the token.
    pub async fn get_user(&self) -> Result<User, FasmgaError> {
        self.preflight().await?;
        let value = self.call(Method::GET, Endpoint::User, None, None).await?;
        crate::transport::decode_user_response(value).map_err(FasmgaError::protocol)
    }

    /// All urls created with this token, as a single page.
    pub async fn get_urls(&self) -> Result<Vec<UrlRecord>, FasmgaError> {
        self.preflight().await?;
        let value = self.call(Method::GET, Endpoint::List, None, None).await?;
        crate::transport::decode_urls_response(value).map_err(FasmgaError::protocol)
    }

    /// Shorten a url.
    ///
    /// Errors:
    /// - [`FasmgaError::Validation`] when `url` or `nsfw` is missing, or when
    ///   neither `id` nor `id_type` is given; nothing is sent to `/create`.
    pub async fn short(&self, options: ShortOptions) -> Result<SuccessResponse, FasmgaError> {
        self.preflight().await?;
        let request = options.validate()?;
        let body = crate::transport::encode_create_body(&request);
        let value = self
            .call(Method::POST, Endpoint::Create, None, Some(body))
            .await?;
        crate::transport::decode_success_response(value).map_err(FasmgaError::protocol)
    }

    /// Delete a url. This cannot be undone.
    pub async fn delete(&self, id: impl Into<String>) -> Result<SuccessResponse, FasmgaError> {
        self.preflight().await?;
        let id = UrlId::new(id)?;
        let query = crate::transport::encode_delete_query(&id);
        let value = self
            .call(Method::DELETE, Endpoint::Delete, Some(query), None)
            .await?;
        crate::transport::decode_success_response(value).map_err(FasmgaError::protocol)
    }

    /// Edit a url. At least one field of `options` must be set.
    ///
    /// Use [`crate::PasswordUpdate::Remove`] to clear an existing password.
    pub async fn edit(
        &self,
        id: impl Into<String>,
        options: EditOptions,
    ) -> Result<SuccessResponse, FasmgaError> {
        self.preflight().await?;
        let request = EditUrl::new(id, options)?;
        let query = crate::transport::encode_edit_query(&request);
        let body = crate::transport::encode_edit_body(&request);
        let value = self
            .call(Method::PATCH, Endpoint::Edit, Some(query), Some(body))
            .await?;
        crate::transport::decode_success_response(value).map_err(FasmgaError::protocol)
    }

    async fn preflight(&self) -> Result<(), FasmgaError> {
        let response = self
            .execute(Method::GET, Endpoint::Ratelimit, None, None)
            .await?;
        let quota = crate::transport::decode_quota_check(&response.body)
            .map_err(FasmgaError::protocol)?;

        tracing::debug!(remain = ?quota.remain, "rate limit pre-flight");
        if quota.is_exhausted() {
            tracing::warn!("rate limit exhausted, skipping request");
            return Err(FasmgaError::RateLimited {
                message: quota
                    .message
                    .unwrap_or_else(|| "429 status code".to_owned()),
            });
        }
        Ok(())
    }

    async fn call(
        &self,
        method: Method,
        endpoint: Endpoint,
        query: Option<Vec<(String, String)>>,
        json: Option<Value>,
    ) -> Result<Value, FasmgaError> {
        let response = self.execute(method, endpoint, query, json).await?;
        normalize_response(response)
    }

    async fn execute(
        &self,
        method: Method,
        endpoint: Endpoint,
        query: Option<Vec<(String, String)>>,
        json: Option<Value>,
    ) -> Result<HttpResponse, FasmgaError> {
        let url = self.endpoint_url(endpoint, query.unwrap_or_default())?;
        let span = tracing::debug_span!(
            "fasmga.request",
            method = %method,
            path = endpoint.path()
        );
        let request = HttpRequest {
            method,
            url,
            authorization: self.authorization.clone(),
            json,
        };

        async {
            let response = self
                .http
                .send(request)
                .await
                .map_err(FasmgaError::Transport)?;
            tracing::debug!(status = response.status, "response received");
            Ok::<_, FasmgaError>(response)
        }
        .instrument(span)
        .await
    }

    fn endpoint_url(
        &self,
        endpoint: Endpoint,
        query: Vec<(String, String)>,
    ) -> Result<Url, FasmgaError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                FasmgaError::Configuration(ValidationError::InvalidUrl {
                    input: self.base_url.to_string(),
                })
            })?
            .pop_if_empty()
            .push(endpoint.path());
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

fn normalize_response(response: HttpResponse) -> Result<Value, FasmgaError> {
    let value = crate::transport::parse_body(&response.body).map_err(FasmgaError::protocol)?;

    match response.status {
        200 => Ok(value),
        400 => Err(FasmgaError::Validation(ValidationError::Rejected {
            body: value.to_string(),
        })),
        500 => Err(FasmgaError::Server { status: 500 }),
        status => {
            tracing::debug!(status, body = %value, "unexpected HTTP status");
            Err(FasmgaError::Unknown { status })
        }
    }
}
