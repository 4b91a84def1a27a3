use std::time::Duration;

use http::Method;
use reqwest::header::{ACCEPT, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::{HyperswitchError, HyperswitchResult};
use crate::models::error::ErrorResponse;

/// Sandbox environment, used when no base URL override is given.
pub const DEFAULT_BASE_URL: &str = "https://sandbox.hyperswitch.io";

/// Hyperswitch authenticates with a custom `api-key` header, not a standard
/// bearer token. The header name is part of the wire contract.
const API_KEY_HEADER: &str = "api-key";

/// Which of the two configured credentials to attach to a call.
///
/// Most server-to-server operations use the secret key; a few endpoints that
/// emulate client-side behavior (e.g. listing payment methods against a
/// `client_secret`) require the publishable key instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyKind {
    Secret,
    Publishable,
}

/// Client for the Hyperswitch API.
///
/// Owns the underlying connection pool; cheap to share behind an `Arc` and
/// safe for concurrent in-flight calls. Dropping the client releases the
/// pool. The per-resource services in [`crate::services`] borrow a client
/// and delegate every call to it.
#[derive(Debug)]
pub struct HyperswitchClient {
    base_url: String,
    secret_key: String,
    publishable_key: String,
    default_profile_id: Option<String>,
    client: reqwest::Client,
}

/// Builder for [`HyperswitchClient`].
pub struct HyperswitchClientBuilder {
    secret_key: String,
    publishable_key: String,
    base_url: Option<String>,
    default_profile_id: Option<String>,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

impl HyperswitchClientBuilder {
    /// Override the API base URL (e.g. to target production instead of the
    /// sandbox).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Default profile id substituted into requests that support one but do
    /// not carry their own.
    pub fn with_default_profile_id(mut self, profile_id: impl Into<String>) -> Self {
        self.default_profile_id = Some(profile_id.into());
        self
    }

    /// Overall per-request timeout. Expired requests surface as
    /// [`HyperswitchError::Cancelled`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the underlying reqwest client (optional).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> HyperswitchResult<HyperswitchClient> {
        if self.secret_key.trim().is_empty() {
            return Err(HyperswitchError::Config(
                "secret API key cannot be empty".to_string(),
            ));
        }
        if self.publishable_key.trim().is_empty() {
            return Err(HyperswitchError::Config(
                "publishable API key cannot be empty".to_string(),
            ));
        }

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        reqwest::Url::parse(&base_url)
            .map_err(|e| HyperswitchError::Config(format!("invalid base URL {base_url:?}: {e}")))?;

        let client = match self.client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(HyperswitchError::Transport)?
            }
        };

        Ok(HyperswitchClient {
            base_url,
            secret_key: self.secret_key,
            publishable_key: self.publishable_key,
            default_profile_id: self.default_profile_id,
            client,
        })
    }
}

impl HyperswitchClient {
    pub fn builder(
        secret_key: impl Into<String>,
        publishable_key: impl Into<String>,
    ) -> HyperswitchClientBuilder {
        HyperswitchClientBuilder {
            secret_key: secret_key.into(),
            publishable_key: publishable_key.into(),
            base_url: None,
            default_profile_id: None,
            timeout: None,
            client: None,
        }
    }

    /// Builds a client against the sandbox with no default profile id.
    pub fn new(
        secret_key: impl Into<String>,
        publishable_key: impl Into<String>,
    ) -> HyperswitchResult<Self> {
        Self::builder(secret_key, publishable_key).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_profile_id(&self) -> Option<&str> {
        self.default_profile_id.as_deref()
    }

    fn api_key(&self, kind: ApiKeyKind) -> &str {
        match kind {
            ApiKeyKind::Secret => &self.secret_key,
            ApiKeyKind::Publishable => &self.publishable_key,
        }
    }

    fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// GET `path`. `Ok(None)` means the remote answered 2xx with no body.
    pub async fn get<T>(&self, path: &str, key: ApiKeyKind) -> HyperswitchResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.execute(Method::GET, path, None::<&()>, key).await
    }

    /// POST `body` as JSON to `path`.
    pub async fn post<B, T>(
        &self,
        path: &str,
        body: &B,
        key: ApiKeyKind,
    ) -> HyperswitchResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::POST, path, Some(body), key).await
    }

    /// POST to `path` with no request body (capture/confirm/cancel without
    /// options).
    pub async fn post_empty<T>(&self, path: &str, key: ApiKeyKind) -> HyperswitchResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.execute(Method::POST, path, None::<&()>, key).await
    }

    /// DELETE `path`.
    pub async fn delete<T>(&self, path: &str, key: ApiKeyKind) -> HyperswitchResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.execute(Method::DELETE, path, None::<&()>, key).await
    }

    /// Single choke point for every outbound call: builds the request,
    /// attaches the selected API key, sends it once (no retries) and
    /// classifies the outcome.
    async fn execute<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        key: ApiKeyKind,
    ) -> HyperswitchResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(API_KEY_HEADER, self.api_key(key))
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, %url, "sending request");

        let response = request.send().await.map_err(classify_transport)?;
        let status = response.status();
        let body_text = response.text().await.map_err(classify_transport)?;

        debug!(%method, %url, status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(remote_error(status.as_u16(), body_text));
        }

        if body_text.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<T>(&body_text) {
            Ok(value) => Ok(Some(value)),
            Err(e) => Err(HyperswitchError::Decode {
                status: status.as_u16(),
                message: format!("failed to decode response body: {e}"),
                body: body_text,
            }),
        }
    }
}

/// Timeouts (including caller-imposed deadlines reqwest observes) are
/// surfaced as `Cancelled`; everything else is a plain transport failure.
fn classify_transport(err: reqwest::Error) -> HyperswitchError {
    if err.is_timeout() {
        HyperswitchError::Cancelled(err)
    } else {
        HyperswitchError::Transport(err)
    }
}

/// Classifies a non-2xx response, pulling code/message out of the structured
/// error envelope when the body matches it. The raw body is carried along in
/// every case.
fn remote_error(status: u16, body: String) -> HyperswitchError {
    let details = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .and_then(|envelope| envelope.error);
    let code = details.as_ref().and_then(|d| d.code.clone());
    let message = details
        .and_then(|d| d.message)
        .unwrap_or_else(|| format!("request failed with status {status}"));
    HyperswitchError::Api {
        status,
        code,
        message,
        body,
    }
}
