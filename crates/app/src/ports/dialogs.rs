//! Dialog port: modal confirmation and alert prompts.

use std::future::Future;
use std::sync::Arc;

use piplant_domain::error::DashboardError;

/// User-facing modal prompts.
///
/// Browser dialogs block, but the port is asynchronous so tests and
/// non-blocking implementations can answer on their own schedule.
pub trait Dialogs {
    /// Ask a yes/no question. `true` means the user confirmed.
    fn confirm(&self, message: &str) -> impl Future<Output = Result<bool, DashboardError>>;

    /// Show a message the user must acknowledge.
    fn alert(&self, message: &str) -> impl Future<Output = Result<(), DashboardError>>;
}

impl<T: Dialogs> Dialogs for Arc<T> {
    fn confirm(&self, message: &str) -> impl Future<Output = Result<bool, DashboardError>> {
        (**self).confirm(message)
    }

    fn alert(&self, message: &str) -> impl Future<Output = Result<(), DashboardError>> {
        (**self).alert(message)
    }
}
