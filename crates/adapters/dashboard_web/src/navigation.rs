//! Page navigation through `window.location`.

use piplant_app::ports::Navigator;
use piplant_domain::error::DashboardError;
use web_sys::Window;

use crate::dom::host_error;

pub struct BrowserNavigator {
    window: Window,
}

impl BrowserNavigator {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) -> Result<(), DashboardError> {
        self.window
            .location()
            .assign(url)
            .map_err(|err| host_error(&err).into())
    }

    fn reload(&self) -> Result<(), DashboardError> {
        self.window
            .location()
            .reload()
            .map_err(|err| host_error(&err).into())
    }
}
