//! Chart surface port: where chart canvases are created and drawn.

use std::sync::Arc;

use piplant_domain::chart::CanvasSpec;
use piplant_domain::error::DashboardError;
use serde_json::Value;

/// Creates canvases and hands them to the charting library.
pub trait ChartSurface {
    /// Append a canvas described by `canvas` to the element `container_id`
    /// and initialise a chart on it with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingElement`] when the container is absent
    /// and [`DashboardError::Host`] when the charting library fails.
    fn render(
        &self,
        container_id: &str,
        canvas: &CanvasSpec,
        config: &Value,
    ) -> Result<(), DashboardError>;
}

impl<T: ChartSurface> ChartSurface for Arc<T> {
    fn render(
        &self,
        container_id: &str,
        canvas: &CanvasSpec,
        config: &Value,
    ) -> Result<(), DashboardError> {
        (**self).render(container_id, canvas, config)
    }
}
