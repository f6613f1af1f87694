//! HTTP client seam
//!
//! The runner only sees [`ApiClient`]; [`HttpApiClient`] is the reqwest-backed
//! implementation used by the binary and the integration tests.

use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;

use crate::common::{Error, Result};

/// A single call against the API under test
///
/// The path is kept as raw segments; each one is percent-encoded on its own,
/// so a segment can never add path levels, a query or a fragment.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            method,
            segments: segments.into_iter().map(|s| s.as_ref().to_string()).collect(),
            body: None,
        }
    }

    pub fn get<I: IntoIterator<Item = S>, S: AsRef<str>>(segments: I) -> Self {
        Self::new(Method::GET, segments)
    }

    pub fn post<I: IntoIterator<Item = S>, S: AsRef<str>>(segments: I) -> Self {
        Self::new(Method::POST, segments)
    }

    pub fn put<I: IntoIterator<Item = S>, S: AsRef<str>>(segments: I) -> Self {
        Self::new(Method::PUT, segments)
    }

    pub fn delete<I: IntoIterator<Item = S>, S: AsRef<str>>(segments: I) -> Self {
        Self::new(Method::DELETE, segments)
    }

    /// Attach a JSON body, failing if the payload cannot be serialized
    pub fn with_json<T: Serialize>(mut self, payload: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(payload)?);
        Ok(self)
    }

    /// Encoded path exactly as it goes on the wire, e.g. `/photoshoot/7`
    pub fn path(&self) -> String {
        match Url::parse("http://localhost/") {
            Ok(mut url) => {
                if let Ok(mut path) = url.path_segments_mut() {
                    path.pop_if_empty().extend(&self.segments);
                }
                url.path().to_string()
            }
            Err(_) => format!("/{}", self.segments.join("/")),
        }
    }
}

/// Status and raw text body of a completed call
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 200..=299
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Sends requests to the API under test
///
/// An `Err` means the call itself did not complete; any HTTP status,
/// success or not, comes back as `Ok`.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// reqwest-backed client bound to one base address
///
/// Holds a single connection pool for the lifetime of the run.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| Error::invalid_base_url(base_url, e))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::invalid_base_url(
                base_url.as_str(),
                "URL cannot be used as a base",
            ));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("photoshoot-harness/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with the request segments appended after any base path
    fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| {
                Error::invalid_base_url(self.base_url.as_str(), "URL cannot be used as a base")
            })?
            .pop_if_empty()
            .extend(&request.segments);
        Ok(url)
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(&request)?;
        tracing::debug!(method = %request.method, %url, "sending request");

        let mut builder = self.http.request(request.method, url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(%status, bytes = body.len(), "received response");
        Ok(ApiResponse { status, body })
    }
}
