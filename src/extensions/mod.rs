//! Lifecycle hooks for host-side instrumentation.
//!
//! Plugins observe mount transitions; they never mutate mount state.

pub mod plugins;

pub use plugins::{MountContext, MountEvent, MountPlugin};
