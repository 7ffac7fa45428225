//! Application Layer
//!
//! The navigator use case: state machine, event loop and rendering.
//! This layer depends on domain and infrastructure layers.

pub mod navigator;

pub use navigator::{run_app, Command, Navigator, NotificationLog};
