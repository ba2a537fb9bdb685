//! Blocking browser dialogs behind the async [`Dialogs`] port.

use piplant_app::ports::Dialogs;
use piplant_domain::error::DashboardError;
use web_sys::Window;

use crate::dom::host_error;

pub struct BrowserDialogs {
    window: Window,
}

impl BrowserDialogs {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Dialogs for BrowserDialogs {
    async fn confirm(&self, message: &str) -> Result<bool, DashboardError> {
        self.window
            .confirm_with_message(message)
            .map_err(|err| host_error(&err).into())
    }

    async fn alert(&self, message: &str) -> Result<(), DashboardError> {
        self.window
            .alert_with_message(message)
            .map_err(|err| host_error(&err).into())
    }
}
