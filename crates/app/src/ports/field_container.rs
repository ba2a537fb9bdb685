//! Field container port: the form element that holds dynamic inputs.

use std::sync::Arc;

use piplant_domain::error::DashboardError;
use piplant_domain::form::FieldSpec;

/// Access to the children of a form container element.
pub trait FieldContainer {
    /// Which of `candidates` currently exist as inputs inside `container_id`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingElement`] when the container is absent.
    fn present_ids(
        &self,
        container_id: &str,
        candidates: &[&str],
    ) -> Result<Vec<String>, DashboardError>;

    /// Create an input from `field` and append it to `container_id`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingElement`] when the container is absent.
    fn append_field(&self, container_id: &str, field: &FieldSpec) -> Result<(), DashboardError>;

    /// Remove the input `field_id` from inside `container_id`. An element
    /// with that id elsewhere on the page is left alone, and removing an
    /// absent input is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingElement`] when the container is
    /// absent, or [`DashboardError::Host`] if the host refuses the mutation.
    fn remove_field(&self, container_id: &str, field_id: &str) -> Result<(), DashboardError>;
}

impl<T: FieldContainer> FieldContainer for Arc<T> {
    fn present_ids(
        &self,
        container_id: &str,
        candidates: &[&str],
    ) -> Result<Vec<String>, DashboardError> {
        (**self).present_ids(container_id, candidates)
    }

    fn append_field(&self, container_id: &str, field: &FieldSpec) -> Result<(), DashboardError> {
        (**self).append_field(container_id, field)
    }

    fn remove_field(&self, container_id: &str, field_id: &str) -> Result<(), DashboardError> {
        (**self).remove_field(container_id, field_id)
    }
}
