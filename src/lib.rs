//! chartoon-showcase: chart preview mounting for the Chartoon documentation site.
//!
//! The crate owns the lifecycle of one live widget per preview container:
//! sizing it from the container's content box, redrawing responsive kinds
//! when the container resizes, and tearing everything down on identifier
//! changes and detach. Drawing itself stays behind the
//! [`render::WidgetFactory`] contract.

pub mod api;
pub mod catalog;
pub mod core;
pub mod error;
pub mod extensions;
pub mod observe;
pub mod render;
pub mod telemetry;

#[cfg(feature = "web-adapter")]
pub mod platform_web;

pub use api::{MountConfig, MountLifecycleManager, MountOptions};
pub use error::{ShowcaseError, ShowcaseResult};
