//! Navigator port: moving the page after an action.

use std::sync::Arc;

use piplant_domain::error::DashboardError;

/// Page-level navigation.
pub trait Navigator {
    /// Load `url` in place of the current page.
    fn navigate(&self, url: &str) -> Result<(), DashboardError>;

    /// Reload the current page.
    fn reload(&self) -> Result<(), DashboardError>;
}

impl<T: Navigator> Navigator for Arc<T> {
    fn navigate(&self, url: &str) -> Result<(), DashboardError> {
        (**self).navigate(url)
    }

    fn reload(&self) -> Result<(), DashboardError> {
        (**self).reload()
    }
}
