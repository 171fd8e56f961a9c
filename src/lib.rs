//! Gump UI
//!
//! Retained-mode control layer for a game client: a tree of controls grouped
//! into top-level gumps, a layout-language interpreter that builds gumps from
//! server strings, z-ordering, and an input router for pointer and keyboard.

pub mod assets;
pub mod config;
pub mod dump;
pub mod error;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod ui;
pub mod widget;

pub use error::{Error, Result};
pub use ui::UiManager;
pub use widget::{Control, ControlId, ControlTree};
