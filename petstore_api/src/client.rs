//! HTTP client for the pet store `/pets` endpoints.

use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::{
    config::ClientConfig,
    transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport},
    types::{Pet, ServiceErrorBody},
    Error,
};

const PETS_PATH: &str = "/pets";

/// Client for the pet store service.
///
/// Holds nothing but its transport. Every operation is a single request:
/// failures are logged once and returned unchanged, never retried.
#[derive(Debug, Clone)]
pub struct Client<T = ReqwestTransport> {
    transport: T,
}

impl Client<ReqwestTransport> {
    /// Creates a client from the given connection settings.
    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        Ok(Self::with_transport(ReqwestTransport::new(config)?))
    }

    /// Creates a client with default settings and a custom base URL. Used for
    /// testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::from_config(&ClientConfig::default().with_base_url(base_url))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call<R>(&self, action: &str, request: HttpRequest) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        tracing::debug!(method = %request.method, path = %request.path, "{}", action);

        let resp = self.transport.send(request).await.map_err(|e| {
            tracing::error!("Error {}: {}", action, e);
            Error::from(e)
        })?;

        if !resp.is_success() {
            let err = service_error(&resp);
            tracing::error!("Error {}: {}", action, err);
            return Err(err);
        }

        serde_json::from_str::<R>(&resp.body).map_err(|e| {
            tracing::error!(
                "Error {}: failed to parse response: {} | body: {}",
                action,
                e,
                truncate_body(&resp.body)
            );
            Error::Decode(e.to_string())
        })
    }

    fn encode(action: &str, pet: &Pet) -> Result<serde_json::Value, Error> {
        serde_json::to_value(pet).map_err(|e| {
            tracing::error!("Error {}: failed to encode pet: {}", action, e);
            Error::Encode(e.to_string())
        })
    }

    /// Creates a pet with `POST /pets` and returns the service's copy.
    pub async fn add_pet(&self, pet: &Pet) -> Result<Pet, Error> {
        const ACTION: &str = "adding pet";
        let request = HttpRequest {
            method: HttpMethod::Post,
            path: PETS_PATH.to_string(),
            body: Some(Self::encode(ACTION, pet)?),
        };
        self.call(ACTION, request).await
    }

    /// Fetches a pet with `GET /pets/{id}`.
    ///
    /// `id` is not validated; a non-numeric id is sent (percent-encoded) and
    /// the service decides whether it is valid.
    pub async fn get_pet_by_id(&self, id: impl Display) -> Result<Pet, Error> {
        let request = HttpRequest {
            method: HttpMethod::Get,
            path: pet_path(id),
            body: None,
        };
        self.call("fetching pet", request).await
    }

    /// Replaces a pet with `PUT /pets/{id}` and returns the service's copy.
    pub async fn update_pet_by_id(&self, id: impl Display, pet: &Pet) -> Result<Pet, Error> {
        const ACTION: &str = "updating pet";
        let request = HttpRequest {
            method: HttpMethod::Put,
            path: pet_path(id),
            body: Some(Self::encode(ACTION, pet)?),
        };
        self.call(ACTION, request).await
    }
}

/// `/pets/{id}` with the id as one percent-encoded segment, so `/`, `?` and
/// `#` inside it reach the service instead of reshaping the URL.
fn pet_path(id: impl Display) -> String {
    format!("{}/{}", PETS_PATH, urlencoding::encode(&id.to_string()))
}

/// Builds `Error::Service`, preferring the service's `{"message": ...}`
/// payload over the raw body.
fn service_error(resp: &HttpResponse) -> Error {
    let message = match serde_json::from_str::<ServiceErrorBody>(&resp.body) {
        Ok(body) => body.message,
        Err(_) if resp.body.trim().is_empty() => reqwest::StatusCode::from_u16(resp.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string(),
        Err(_) => truncate_body(&resp.body),
    };
    Error::Service {
        status: resp.status,
        message,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
