//! Actions returned by key handlers.

use crossterm::event::KeyEvent;

use crate::model::{FieldKey, FieldValue, Section};

use super::app::Screen;

/// An action that a key handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update the controller and switch screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Show the given screen.
    Navigate(Screen),
    /// Make a form section active.
    SelectSection(Section),
    /// Store a new field value in the controller.
    UpdateField(FieldKey, FieldValue),
    /// Send the record of a section to the backend.
    Submit(Section),
    /// Remove all notifications.
    DismissNotifications,
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}
