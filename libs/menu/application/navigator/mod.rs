//! Menu Navigator
//!
//! Two-screen menu (main and configs) with a header, a status panel and
//! the active screen's list underneath.

pub mod app;
pub mod runner;
pub mod state;
pub mod ui;

pub use app::{Command, Navigator, VERSION};
pub use runner::run_app;
pub use state::NotificationLog;
