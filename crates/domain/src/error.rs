//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DashboardError`] via `#[from]` (or an explicit `From` impl for boxed
//! adapter errors).

use std::error::Error as StdError;

/// Top-level error for every dashboard operation.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A required page element is absent.
    #[error("missing element")]
    MissingElement(#[from] MissingElementError),

    /// The backend answered with a body we cannot interpret.
    #[error("invalid payload")]
    Payload(#[from] PayloadError),

    /// The HTTP request failed (transport error or non-2xx status).
    #[error("request failed")]
    Request(#[source] Box<dyn StdError + Send + Sync>),

    /// The host environment (DOM, dialogs, charting library) failed.
    #[error("host error")]
    Host(#[from] HostError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A field spec has an empty element id.
    #[error("field id must not be empty")]
    EmptyFieldId,

    /// Two field rules target the same device type.
    #[error("device type {0:?} has more than one field rule")]
    DuplicateRule(String),
}

/// A page element looked up by id does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("element #{id} not found")]
pub struct MissingElementError {
    pub id: String,
}

impl MissingElementError {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Why a backend payload could not be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The top-level value is not a JSON object.
    #[error("expected a JSON object")]
    NotAnObject,

    /// A chart series has no string `title`.
    #[error("series {key:?} has no string title")]
    MissingTitle { key: String },

    /// The body is not valid JSON or does not match the expected shape.
    #[error("malformed JSON")]
    Json(#[from] serde_json::Error),
}

/// Failure reported by the host environment, flattened to its message.
///
/// Browser errors are `JsValue`s, which are neither `Send` nor `Error`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HostError {
    pub message: String,
}

impl HostError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_missing_element_into_dashboard_error() {
        let err: DashboardError = MissingElementError::new("charts").into();
        assert!(matches!(
            err,
            DashboardError::MissingElement(MissingElementError { ref id }) if id == "charts"
        ));
    }

    #[test]
    fn should_name_element_in_message() {
        let err = MissingElementError::new("additional-inputs");
        assert_eq!(err.to_string(), "element #additional-inputs not found");
    }

    #[test]
    fn should_expose_source_when_wrapping_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DashboardError = PayloadError::from(json_err).into();
        assert!(StdError::source(&err).is_some());
    }
}
