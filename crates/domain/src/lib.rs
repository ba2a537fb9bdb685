//! # piplant-domain
//!
//! Pure domain model for the piplant home automation dashboard.
//!
//! ## Responsibilities
//! - Foundational types: opaque resource identifiers, error conventions
//! - Define **device types** as selected in the "add device" form
//! - Define **field specs** and the rules mapping a device type to the extra
//!   inputs it needs, plus the reconciliation that keeps the form in sync
//! - Define **chart series** as returned by the backend and the canvas each
//!   one is drawn on
//! - Define the **resource kinds** that can be deleted and the **delete
//!   outcome** the backend answers a delete with
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod chart;
pub mod device_type;
pub mod form;
pub mod outcome;
pub mod resource;
