//! # piplant-adapter-dashboard-web
//!
//! Browser adapter for the piplant dashboard pages.
//!
//! ## Responsibilities
//! - Implement the host ports on top of `web-sys`:
//!   - `DomFieldContainer`: the "add device" form container
//!   - `BrowserDialogs`: `window.confirm` / `window.alert`
//!   - `BrowserNavigator`: `location.assign` / `location.reload`
//!   - `ChartJsSurface`: canvas creation and the global Chart.js constructor
//! - Export the page entry points through `wasm-bindgen`: `updateForm`,
//!   `updateFormLegacy`, `deleteDevice`, `deleteSchedule`, `deleteUser`,
//!   `fetchAndRenderCharts` and `configure`.
//! - Load [`config::DashboardConfig`] from TOML.
//!
//! Only the configuration compiles outside `wasm32`; everything touching the
//! DOM is gated on the target.

pub mod config;

#[cfg(target_arch = "wasm32")]
mod chart_js;
#[cfg(target_arch = "wasm32")]
mod dialogs;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod exports;
#[cfg(target_arch = "wasm32")]
mod navigation;

#[cfg(target_arch = "wasm32")]
pub use chart_js::ChartJsSurface;
#[cfg(target_arch = "wasm32")]
pub use dialogs::BrowserDialogs;
#[cfg(target_arch = "wasm32")]
pub use dom::DomFieldContainer;
#[cfg(target_arch = "wasm32")]
pub use navigation::BrowserNavigator;
