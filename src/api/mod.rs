//! Remote API Client
//!
//! Typed wrappers around the back-office REST API, organized by domain.
//! Every failure surfaces as an [`ApiError`] carrying a user-facing message.

mod auth;
mod customer;
mod property;
mod freight;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use freight::ValuesQuery;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Server rejected the payload with field-level errors
    #[error("{0}")]
    Validation(String),
    /// Non-2xx response without field errors
    #[error("{0}")]
    Server(String),
    /// Request never completed
    #[error("{0}")]
    Network(String),
    /// 2xx response whose body did not match the expected shape
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation(m) | ApiError::Server(m) | ApiError::Network(m) | ApiError::Decode(m) => m,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FieldError {
    #[serde(default)]
    field: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Option<Vec<FieldError>>,
    #[serde(default)]
    message: Option<String>,
}

/// Map a non-2xx body to an error: field errors joined one per line, else the
/// server's message, else `fallback`
pub(crate) fn error_from_body(body: &str, fallback: &str) -> ApiError {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return ApiError::Server(fallback.to_string());
    };

    let errors = parsed.errors.unwrap_or_default();
    if !errors.is_empty() {
        let joined = errors
            .iter()
            .map(|e| match e.field.as_str() {
                "" => e.message.clone(),
                field => format!("{}: {}", field, e.message),
            })
            .collect::<Vec<_>>()
            .join("\n");
        return ApiError::Validation(joined);
    }

    match parsed.message {
        Some(message) if !message.trim().is_empty() => ApiError::Server(message),
        _ => ApiError::Server(fallback.to_string()),
    }
}

/// HTTP client bound to a base URL and, optionally, a bearer token
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            http: reqwest::Client::new(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and keep only 2xx responses; anything else becomes an `ApiError`
    async fn send(&self, builder: RequestBuilder, fallback: &str) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            web_sys::console::error_1(&format!("[API] Request failed: {}", e).into());
            ApiError::Network(fallback.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        web_sys::console::error_1(&format!("[API] {} -> {}: {}", fallback, status, body).into());
        Err(error_from_body(&body, fallback))
    }

    async fn decode<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| {
            web_sys::console::error_1(&format!("[API] Unexpected response body: {}", e).into());
            ApiError::Decode(fallback.to_string())
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::GET, path).query(query), fallback).await?;
        Self::decode(response, fallback).await
    }

    pub(crate) async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self.send(self.request(method, path).json(body), fallback).await?;
        Self::decode(response, fallback).await
    }

    /// Like [`send_json`](Self::send_json) but ignores the response body
    pub(crate) async fn send_unit<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        fallback: &str,
    ) -> Result<(), ApiError> {
        let builder = self.request(method, path);
        let builder = match body {
            Some(body) => builder.json(body),
            None => builder,
        };
        self.send(builder, fallback).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    const FALLBACK: &str = "Falha ao criar propriedade.";

    #[test]
    fn test_field_errors_joined_per_line() {
        let body = r#"{"errors":[{"field":"name","message":"must not be blank"},{"field":"type","message":"size must be between 1 and 50"}]}"#;
        let err = error_from_body(body, FALLBACK);
        assert_eq!(
            err,
            ApiError::Validation("name: must not be blank\ntype: size must be between 1 and 50".into())
        );
    }

    #[test]
    fn test_server_message_used_when_no_field_errors() {
        let err = error_from_body(r#"{"message":"Propriedade em uso"}"#, FALLBACK);
        assert_eq!(err.message(), "Propriedade em uso");
    }

    #[test]
    fn test_null_errors_falls_through_to_message() {
        let err = error_from_body(r#"{"errors":null,"message":"Propriedade em uso"}"#, FALLBACK);
        assert_eq!(err, ApiError::Server("Propriedade em uso".into()));
    }

    #[test]
    fn test_field_error_without_field_keeps_message() {
        let body = r#"{"errors":[{"message":"Nome duplicado"}],"message":"Bad Request"}"#;
        assert_eq!(error_from_body(body, FALLBACK), ApiError::Validation("Nome duplicado".into()));
    }

    #[test]
    fn test_bearer_header_only_with_token() {
        let anonymous = ApiClient::new("http://localhost:8080");
        let request = anonymous.request(Method::GET, "/x").build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert_eq!(request.headers().get(CONTENT_TYPE).unwrap(), "application/json");

        let authed = anonymous.with_token("abc.def.ghi");
        let request = authed.request(Method::GET, "/x").build().unwrap();
        assert_eq!(request.headers().get(AUTHORIZATION).unwrap(), "Bearer abc.def.ghi");
        assert_eq!(request.url().as_str(), "http://localhost:8080/x");
    }

    #[test]
    fn test_fallback_for_unparseable_or_empty_bodies() {
        for body in ["", "<html>502</html>", "{}", r#"{"errors":[],"message":"  "}"#] {
            assert_eq!(error_from_body(body, FALLBACK), ApiError::Server(FALLBACK.into()));
        }
    }

    #[test]
    fn test_error_displays_its_message_only() {
        assert_eq!(ApiError::Network("Erro ao buscar fretes.".into()).to_string(), "Erro ao buscar fretes.");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.url("/api/freight"), "http://localhost:8080/api/freight");
        assert_eq!(client.token(), None);
    }
}
