//! # piplant-adapter-http-reqwest
//!
//! [`ApiClient`] implementation over `reqwest`.
//!
//! Every request is resolved against the page origin, so the same client
//! works in the browser (where reqwest drives `fetch`) and natively against
//! a test server. Resource ids are percent-encoded as a single path segment.

pub mod error;

use piplant_app::ports::ApiClient;
use piplant_domain::error::DashboardError;
use piplant_domain::resource::ResourceKind;
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde_json::Value;

pub use crate::error::HttpError;

/// Path prefix of the versioned REST API.
pub const DEFAULT_PREFIX: &str = "/api/v1";

/// Body of `GET {prefix}/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiInfo {
    pub version: String,
}

/// REST client bound to one backend origin.
#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    client: Client,
    origin: Url,
    prefix: Vec<String>,
}

impl ReqwestApiClient {
    /// Create a client for `origin` (e.g. `http://piplant.local:5000`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Url`] when `origin` is not an absolute URL, or
    /// [`HttpError::CannotBeABase`] when it cannot carry a path.
    pub fn new(origin: &str) -> Result<Self, HttpError> {
        let origin = Url::parse(origin)?;
        if origin.cannot_be_a_base() {
            return Err(HttpError::CannotBeABase(origin.into()));
        }
        Ok(Self {
            client: Client::new(),
            origin,
            prefix: split_prefix(DEFAULT_PREFIX),
        })
    }

    /// Use an API prefix other than `/api/v1`.
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = split_prefix(prefix);
        self
    }

    /// Share an existing `reqwest` client (connection pool, default headers).
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    #[must_use]
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// `{origin}{prefix}/{collection}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::CannotBeABase`] if the origin cannot carry a path.
    pub fn resource_url(&self, kind: ResourceKind, id: &str) -> Result<Url, HttpError> {
        self.api_url(&[kind.collection(), id])
    }

    /// Resolve `url` against the origin. Absolute URLs are kept as they are.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Url`] when `url` cannot be parsed.
    pub fn resolve(&self, url: &str) -> Result<Url, HttpError> {
        Ok(self.origin.join(url)?)
    }

    /// Fetch the API descriptor (`GET {prefix}/`).
    ///
    /// # Errors
    ///
    /// Returns a request error on transport or status failure, and a payload
    /// error when the body is not an API descriptor.
    #[tracing::instrument(skip(self))]
    pub async fn api_info(&self) -> Result<ApiInfo, DashboardError> {
        let url = self.api_url(&[""])?;
        let value = self.get_value(url).await?;
        Ok(serde_json::from_value(value).map_err(HttpError::Json)?)
    }

    fn api_url(&self, tail: &[&str]) -> Result<Url, HttpError> {
        let mut url = self.origin.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| HttpError::CannotBeABase(self.origin.to_string()))?
            .clear()
            .extend(&self.prefix)
            .extend(tail);
        Ok(url)
    }

    async fn get_value(&self, url: Url) -> Result<Value, HttpError> {
        let response = self.client.get(url.clone()).send().await?;
        let body = check_status("GET", &url, response)?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl ApiClient for ReqwestApiClient {
    #[tracing::instrument(skip(self))]
    async fn delete(&self, kind: ResourceKind, id: &str) -> Result<String, DashboardError> {
        let url = self.resource_url(kind, id)?;
        let response = self
            .client
            .delete(url.clone())
            .send()
            .await
            .map_err(HttpError::from)?;
        let body = check_status("DELETE", &url, response)?
            .text()
            .await
            .map_err(HttpError::from)?;
        tracing::debug!(%url, bytes = body.len(), "delete accepted");
        Ok(body)
    }

    #[tracing::instrument(skip(self))]
    async fn get_json(&self, url: &str) -> Result<Value, DashboardError> {
        let url = self.resolve(url)?;
        Ok(self.get_value(url).await?)
    }
}

fn split_prefix(prefix: &str) -> Vec<String> {
    prefix
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

fn check_status(method: &'static str, url: &Url, response: Response) -> Result<Response, HttpError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    tracing::warn!(%url, %status, method, "backend rejected request");
    Err(HttpError::Status {
        method,
        url: url.to_string(),
        status,
    })
}
