//! Domain Layer
//!
//! Static menu model: screens and their entries. No terminal or I/O
//! dependencies.

pub mod entry;
pub mod screen;

pub use entry::{ConfigEntry, MainEntry, MenuEntry};
pub use screen::Screen;
