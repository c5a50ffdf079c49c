//! Gateway client for the dashboard backend.
//!
//! [`ApiClient`] is the single point of contact with the REST service. It owns
//! the base URL, injects the bearer token from the session store, and turns
//! every response into either an [`ApiEnvelope`] or a [`ClientError`].

mod resources;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::ApiEnvelope;
use crate::session::SessionStore;

/// Per-call options for [`ApiClient::request`]. Defaults to a bodiless GET.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    /// Pre-serialized body, sent verbatim.
    pub body: Option<String>,
    /// Merged over the default headers; these win on conflict.
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `payload` as the JSON body.
    pub fn json<B: Serialize + ?Sized>(self, payload: &B) -> ClientResult<Self> {
        let body = serde_json::to_string(payload).map_err(|e| {
            tracing::error!("API request failed: could not encode request body: {}", e);
            ClientError::transport(format!("failed to encode request body: {e}"))
        })?;
        Ok(self.body(body))
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Build a client for `base_url` (e.g. `https://backend.example.com/api/v1`).
    ///
    /// Endpoints are appended to the base URL verbatim, so any path prefix is kept.
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> ClientResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        url::Url::parse(&base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL '{}': {}", base_url, e)))?;

        // Cookies set by the backend ride along on later calls
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn from_config(config: &ClientConfig, session: Arc<dyn SessionStore>) -> ClientResult<Self> {
        Self::new(config.api.base_url.clone(), session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Issue one request against `base_url + endpoint`.
    ///
    /// The body is parsed as JSON whatever the status. A status outside
    /// 200-299 becomes [`ClientError::RequestFailed`] carrying the envelope's
    /// `message`. On 2xx the envelope is returned as-is; its `success` flag is
    /// not consulted. No retries, no timeout.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ClientResult<ApiEnvelope<T>> {
        self.request_with_status(endpoint, options)
            .await
            .map(|(_, envelope)| envelope)
    }

    /// Same as [`ApiClient::request`], also returning the transport status of
    /// the 2xx reply.
    pub async fn request_with_status<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ClientResult<(u16, ApiEnvelope<T>)> {
        let url = format!("{}{}", self.base_url, endpoint);
        let RequestOptions {
            method,
            body,
            headers: extra_headers,
        } = options;

        let mut headers = self.default_headers()?;
        for (name, value) in extra_headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        tracing::debug!("{} {}", method, endpoint);

        let mut builder = self.http.request(method.clone(), url.as_str()).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::transport_failure(&method, endpoint, e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::transport_failure(&method, endpoint, e.to_string()))?;
        let parsed: Value = serde_json::from_slice(&bytes).map_err(|e| {
            Self::transport_failure(&method, endpoint, format!("response body is not JSON: {e}"))
        })?;

        if !status.is_success() {
            let message = parsed
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            tracing::warn!("{} {} returned {}: {}", method, endpoint, status.as_u16(), message);
            return Err(ClientError::request_failed(status.as_u16(), message));
        }

        let envelope = serde_json::from_value(parsed).map_err(|e| {
            Self::transport_failure(&method, endpoint, format!("unexpected response shape: {e}"))
        })?;
        Ok((status.as_u16(), envelope))
    }

    fn default_headers(&self) -> ClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.get() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ClientError::transport("session token is not a valid header value"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    fn transport_failure(method: &Method, endpoint: &str, detail: String) -> ClientError {
        tracing::error!("API request failed: {} {}: {}", method, endpoint, detail);
        ClientError::TransportFailed(detail)
    }
}
