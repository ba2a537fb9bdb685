//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the dashboard use-cases and the host
//! (browser DOM, dialogs, HTTP, charting library). They are defined here so
//! that both the use-case layer and the adapter layer can depend on them.

pub mod api_client;
pub mod chart_surface;
pub mod dialogs;
pub mod field_container;
pub mod navigator;

pub use api_client::ApiClient;
pub use chart_surface::ChartSurface;
pub use dialogs::Dialogs;
pub use field_container::FieldContainer;
pub use navigator::Navigator;
