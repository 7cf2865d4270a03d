//! Prismboard Application
//!
//! The native application shell: a winit window with an egui toolbar,
//! translating mouse input into whiteboard pointer events and drawing the
//! resulting frames with Vello.

mod app;
mod shortcuts;
mod ui;

pub use app::{App, AppConfig, AppError};
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use ui::{UiAction, UiState, render_ui};
