//! Reusable TUI widgets.

pub mod form;
pub mod tabs;
pub mod toasts;

pub use form::{Form, FormField, draw_form};
pub use tabs::draw_tabs;
pub use toasts::draw_toasts;
