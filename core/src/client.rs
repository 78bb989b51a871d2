//! Request builder, response parser and the async `ApiClient` that joins
//! them through a `Transport`.
//!
//! # Design
//! `ApiClient` holds the immutable base URL, a handle to the shared
//! `DefaultHeaders` and a transport. Each call is split the same way:
//! `build_request` produces an `HttpRequest` from the current header
//! snapshot, the transport executes it, and `parse_response` interprets the
//! `HttpResponse`. The two pure halves are public so hosts that do their own
//! I/O can use them directly.
//!
//! Success bodies are decoded only when the response declares a JSON content
//! type. Anything else becomes the empty-object placeholder `{}` decoded as
//! the caller's type; `request_content` exposes the non-JSON case as its own
//! variant instead.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::headers::{DefaultHeaders, APPLICATION_JSON};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};

/// Decoded body of a successful response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseContent<R> {
    /// The response declared a JSON content type and decoded into `R`.
    Json(R),
    /// The response was not JSON; the raw body is kept as received.
    NonJson {
        content_type: Option<String>,
        body: String,
    },
}

impl<R: DeserializeOwned> ResponseContent<R> {
    /// Collapse into `R`, turning a non-JSON body into the `{}` placeholder.
    pub fn into_value(self) -> Result<R, ApiError> {
        match self {
            ResponseContent::Json(value) => Ok(value),
            ResponseContent::NonJson { .. } => empty_object(),
        }
    }
}

/// Async client for the backend service.
#[derive(Debug, Clone)]
pub struct ApiClient<T = ReqwestTransport> {
    base_url: String,
    headers: DefaultHeaders,
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    pub fn new(config: &ClientConfig, headers: DefaultHeaders) -> Self {
        Self::with_transport(config, headers, ReqwestTransport::new())
    }

    /// Client configured from the environment with a fresh default header set.
    pub fn from_env() -> Self {
        Self::new(&ClientConfig::from_env(), DefaultHeaders::new())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: &ClientConfig, headers: DefaultHeaders, transport: T) -> Self {
        Self {
            base_url: config.base_url.clone(),
            headers,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> &DefaultHeaders {
        &self.headers
    }

    /// Set `Authorization: Bearer <token>` for every call built from now on,
    /// on this client and on every client sharing its header set.
    pub fn configure_auth(&self, token: &str) {
        self.headers.set_auth_token(token);
    }

    /// Build the outgoing request for `path` without sending it.
    ///
    /// The path is appended to the base URL as given. A payload that encodes
    /// to JSON `null` or `false` is treated as absent; anything else becomes
    /// the body, whatever the method.
    pub fn build_request<P>(
        &self,
        path: &str,
        method: HttpMethod,
        payload: Option<&P>,
        overrides: &[(&str, &str)],
    ) -> Result<HttpRequest, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let body = match payload {
            Some(payload) => encode_payload(payload)?,
            None => None,
        };
        Ok(HttpRequest {
            method,
            url: self.url_for(path),
            headers: self.headers.merged_with(overrides),
            body,
        })
    }

    /// Issue one request and decode the result into `R`.
    pub async fn request<R, P>(
        &self,
        path: &str,
        method: HttpMethod,
        payload: Option<&P>,
        overrides: &[(&str, &str)],
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.send(path, method, payload, overrides)
            .await
            .and_then(parse_response)
            .inspect_err(|err| self.log_failure(method, path, err))
    }

    /// Like `request`, but keeps non-JSON success bodies instead of
    /// replacing them with `{}`.
    pub async fn request_content<R, P>(
        &self,
        path: &str,
        method: HttpMethod,
        payload: Option<&P>,
        overrides: &[(&str, &str)],
    ) -> Result<ResponseContent<R>, ApiError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.send(path, method, payload, overrides)
            .await
            .and_then(parse_content)
            .inspect_err(|err| self.log_failure(method, path, err))
    }

    pub async fn fetch_data<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        self.request::<R, ()>(path, HttpMethod::Get, None, &[]).await
    }

    pub async fn post_data<R, P>(
        &self,
        path: &str,
        payload: &P,
        headers: &[(&str, &str)],
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(path, HttpMethod::Post, Some(payload), headers).await
    }

    pub async fn put_data<R, P>(
        &self,
        path: &str,
        payload: &P,
        headers: &[(&str, &str)],
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(path, HttpMethod::Put, Some(payload), headers).await
    }

    pub async fn delete_data<R>(&self, path: &str, headers: &[(&str, &str)]) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        self.request::<R, ()>(path, HttpMethod::Delete, None, headers).await
    }

    async fn send<P>(
        &self,
        path: &str,
        method: HttpMethod,
        payload: Option<&P>,
        overrides: &[(&str, &str)],
    ) -> Result<HttpResponse, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let request = self.build_request(path, method, payload, overrides)?;
        tracing::debug!(%method, url = %request.url, "sending request");
        self.transport.execute(request).await
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn log_failure(&self, method: HttpMethod, path: &str, err: &ApiError) {
        tracing::error!(%method, url = %self.url_for(path), error = %err, "request failed");
    }
}

/// Interpret a response, collapsing non-JSON success bodies into `{}`.
pub fn parse_response<R>(response: HttpResponse) -> Result<R, ApiError>
where
    R: DeserializeOwned,
{
    parse_content(response)?.into_value()
}

/// Interpret a response, keeping non-JSON success bodies as
/// `ResponseContent::NonJson`.
pub fn parse_content<R>(response: HttpResponse) -> Result<ResponseContent<R>, ApiError>
where
    R: DeserializeOwned,
{
    if !response.is_success() {
        return Err(status_error(&response));
    }

    let content_type = response.header("content-type").map(str::to_string);
    match content_type {
        Some(ref value) if value.contains(APPLICATION_JSON) => {
            serde_json::from_str(&response.body)
                .map(ResponseContent::Json)
                .map_err(|e| ApiError::Deserialization(e.to_string()))
        }
        _ => Ok(ResponseContent::NonJson {
            content_type,
            body: response.body,
        }),
    }
}

/// Build the error for a non-2xx response. The `message` field of a JSON
/// object body wins unless it is absent, `null`, `false`, `0` or `""`;
/// everything else falls back to the reason phrase.
fn status_error(response: &HttpResponse) -> ApiError {
    let message = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| body.get("message").and_then(message_text))
        .unwrap_or_else(|| response.reason_phrase().to_string());
    ApiError::Http {
        status: response.status,
        message,
    }
}

fn message_text(message: &Value) -> Option<String> {
    match message {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(display_text(other)),
    }
}

/// Text form of a JSON value: strings unquoted, arrays joined with `,`,
/// objects as compact JSON.
fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(display_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

fn encode_payload<P>(payload: &P) -> Result<Option<String>, ApiError>
where
    P: Serialize + ?Sized,
{
    let body =
        serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
    match body.as_str() {
        "null" | "false" => Ok(None),
        _ => Ok(Some(body)),
    }
}

fn empty_object<R>() -> Result<R, ApiError>
where
    R: DeserializeOwned,
{
    serde_json::from_value(Value::Object(serde_json::Map::new()))
        .map_err(|e| ApiError::Deserialization(e.to_string()))
}
