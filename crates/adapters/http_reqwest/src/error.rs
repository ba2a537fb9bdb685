//! HTTP adapter error types.

use piplant_domain::error::{DashboardError, PayloadError};

/// Errors specific to the reqwest adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The origin or a relative URL could not be parsed.
    #[error("invalid URL")]
    Url(#[from] url::ParseError),

    /// The origin cannot carry a path (`mailto:`, `data:` and the like).
    #[error("origin {0} cannot be used as a base URL")]
    CannotBeABase(String),

    /// Connection, TLS or body transfer failure.
    #[error("HTTP transport error")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("{method} {url} returned {status}")]
    Status {
        method: &'static str,
        url: String,
        status: reqwest::StatusCode,
    },

    /// The body is not valid JSON.
    #[error("response is not valid JSON")]
    Json(#[from] serde_json::Error),
}

impl From<HttpError> for DashboardError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Json(inner) => Self::Payload(PayloadError::Json(inner)),
            other => Self::Request(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_status_error() {
        let err = HttpError::Status {
            method: "DELETE",
            url: "http://localhost/api/v1/devices/1".into(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.to_string(),
            "DELETE http://localhost/api/v1/devices/1 returned 404 Not Found"
        );
    }

    #[test]
    fn should_convert_status_to_request_error() {
        let err: DashboardError = HttpError::CannotBeABase("data:text".into()).into();
        assert!(matches!(err, DashboardError::Request(_)));
    }

    #[test]
    fn should_convert_json_error_to_payload_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        let err: DashboardError = HttpError::Json(json_err).into();
        assert!(matches!(err, DashboardError::Payload(PayloadError::Json(_))));
    }
}
