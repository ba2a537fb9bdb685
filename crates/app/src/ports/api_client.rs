//! API client port: requests against the piplant REST backend.

use std::future::Future;
use std::sync::Arc;

use piplant_domain::error::DashboardError;
use piplant_domain::resource::ResourceKind;
use serde_json::Value;

/// HTTP access to the backend.
///
/// Transport failures and non-2xx statuses are both reported as
/// [`DashboardError::Request`].
pub trait ApiClient {
    /// `DELETE {origin}{api prefix}/{collection}/{id}`, returning the raw body.
    fn delete(
        &self,
        kind: ResourceKind,
        id: &str,
    ) -> impl Future<Output = Result<String, DashboardError>>;

    /// `GET url` and decode the body as JSON.
    ///
    /// `url` may be absolute or relative to the page origin.
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, DashboardError>>;
}

impl<T: ApiClient> ApiClient for Arc<T> {
    fn delete(
        &self,
        kind: ResourceKind,
        id: &str,
    ) -> impl Future<Output = Result<String, DashboardError>> {
        (**self).delete(kind, id)
    }

    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, DashboardError>> {
        (**self).get_json(url)
    }
}
