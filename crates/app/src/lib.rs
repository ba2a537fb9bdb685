//! # piplant-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** the host environment must implement:
//!   - `FieldContainer`: the form element holding the dynamic inputs
//!   - `Dialogs`: confirmation and alert prompts
//!   - `Navigator`: page navigation and reload
//!   - `ApiClient`: calls to the piplant REST backend
//!   - `ChartSurface`: canvas creation and chart initialisation
//! - Provide the use-case services:
//!   - `FormToggler`: keeps the "add device" form in sync with the selector
//!   - `DeletionService`: confirm, delete, then redirect/reload/alert
//!   - `ChartService`: fetch chart series and render one canvas each
//!
//! ## Dependency rule
//! Depends on `piplant-domain` only. Never imports adapter crates or browser
//! bindings. Adapters depend on *this* crate, not the reverse.
//!
//! Port futures are not `Send`: in the browser every future runs on the
//! single-threaded event loop and wraps `!Send` JS promises.

pub mod ports;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
