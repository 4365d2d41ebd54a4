//! The HTTP seam between [`Client`](crate::Client) and the network.
//!
//! Requests and responses are plain data so the client can be driven by any
//! implementation of [`Transport`]: [`ReqwestTransport`] in production, an
//! in-memory recorder in tests.

use std::fmt;
use std::future::Future;

use reqwest::header::ACCEPT;
use url::Url;

use crate::config::ClientConfig;
use crate::errors::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        };
        f.write_str(s)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        }
    }
}

/// A request relative to the service root, e.g. `GET /pets/12`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Path starting with `/`, appended to the configured base URL.
    pub path: String,
    /// JSON body. Sent with `content-type: application/json` when present.
    pub body: Option<serde_json::Value>,
}

/// Whatever the service answered, success or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one request and returns the response.
///
/// Implementations return `Err` only when no response was received. Any
/// status code the service sends back, 4xx and 5xx included, is an `Ok`.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                TransportError::new(format!("Failed to build HTTP client: {e}"))
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins base URL and path. Fails instead of sending if URL parsing would
    /// change the path (`.` and `..` segments are always collapsed).
    fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        let url = Url::parse(format!("{}{}", self.base_url, path).as_str())
            .map_err(|e| TransportError::new(format!("Invalid URL: {e}")))?;
        if !url.path().ends_with(path) || url.query().is_some() || url.fragment().is_some() {
            return Err(TransportError::new(format!(
                "Request path {:?} cannot be sent unchanged (resolves to {:?})",
                path,
                url.path()
            )));
        }
        Ok(url)
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.url_for(&request.path)?;
        let mut builder = self
            .client
            .request(request.method.into(), url)
            .header(ACCEPT, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = resp.status();
        // A failed status is still the service's answer, even if its body
        // cannot be read.
        let body = if status.is_success() {
            resp.text()
                .await
                .map_err(|e| TransportError::new(format!("Failed to read response body: {e}")))?
        } else {
            resp.text().await.unwrap_or_else(|e| {
                tracing::warn!("Failed to read body of {} response: {}", status, e);
                String::new()
            })
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}
