//! HTTP transport for the preptrack client
//!
//! Thin wrapper around reqwest: a configured base URL plus one method per
//! HTTP verb. Holds no cross-call state and performs no retries or caching;
//! every call is a fresh round-trip against the backend.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of a single API round-trip.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The backend answered 404 for the requested path.
    #[error("not found: {path}")]
    NotFound { path: String },

    /// The backend rejected the payload (400/422).
    #[error("request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    /// Any other non-2xx status.
    #[error("unexpected status {status} for {path}: {detail}")]
    Status {
        status: u16,
        path: String,
        detail: String,
    },

    /// Connection-level failure before a status was received.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered 2xx but the body was not the expected JSON.
    #[error("malformed response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Configured HTTP client. Cheap to clone; all clones share one connection
/// pool and the immutable base URL resolved at startup.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
}

impl Transport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path`, appending only query pairs with a non-empty value.
    /// An omitted filter means "no constraint" to the backend.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, TransportError> {
        let pairs = active_pairs(query);
        tracing::debug!(path, query = ?pairs, "GET");
        let mut req = self.http.get(self.url(path));
        if !pairs.is_empty() {
            req = req.query(&pairs);
        }
        let resp = req.send().await?;
        read_json(path, resp).await
    }

    /// POST a JSON body and decode a JSON response.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, TransportError> {
        tracing::debug!(path, "POST");
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        read_json(path, resp).await
    }

    /// POST without a body (favorite/seed/resolve style actions).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        tracing::debug!(path, "POST");
        let resp = self.http.post(self.url(path)).send().await?;
        read_json(path, resp).await
    }

    /// PUT a JSON body; the backend returns no payload on success.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), TransportError> {
        tracing::debug!(path, "PUT");
        let resp = self.http.put(self.url(path)).json(body).send().await?;
        check_status(path, resp).await
    }

    /// DELETE; the backend returns no payload on success.
    pub async fn delete(&self, path: &str) -> Result<(), TransportError> {
        tracing::debug!(path, "DELETE");
        let resp = self.http.delete(self.url(path)).send().await?;
        check_status(path, resp).await
    }
}

/// Drop pairs with an empty value so the backend sees default behavior
/// for the corresponding filter.
fn active_pairs<'a>(query: &'a [(&'a str, String)]) -> Vec<(&'a str, &'a str)> {
    query
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (*k, v.as_str()))
        .collect()
}

async fn read_json<T: DeserializeOwned>(
    path: &str,
    resp: reqwest::Response,
) -> Result<T, TransportError> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(status_error(path, status.as_u16(), &body));
    }
    serde_json::from_str(&body).map_err(|source| TransportError::Decode {
        path: path.to_string(),
        source,
    })
}

async fn check_status(path: &str, resp: reqwest::Response) -> Result<(), TransportError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    let body = resp.text().await.unwrap_or_default();
    Err(status_error(path, status.as_u16(), &body))
}

fn status_error(path: &str, status: u16, body: &str) -> TransportError {
    let detail = error_detail(body);
    match status {
        404 => TransportError::NotFound {
            path: path.to_string(),
        },
        400 | 422 => TransportError::Rejected { status, detail },
        _ => TransportError::Status {
            status,
            path: path.to_string(),
            detail,
        },
    }
}

/// Pull a human-readable message out of the backend's error body.
/// The backend wraps errors as `{"error": "..."}`; fall back to the raw
/// body for anything else.
fn error_detail(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message", "detail"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no error body".to_string()
    } else {
        trimmed.to_string()
    }
}
