//! Clear screen: remove the admin of a denom.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use super::{FormInput, apply_form_key, draw_form_screen};
use crate::model::{AdminClearRequest, ClearField, FieldKey, Section};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{Form, FormField};

const DENOM: usize = 0;

#[derive(Debug, Clone)]
pub struct ClearAdminState {
    form: Form,
}

impl ClearAdminState {
    pub fn new(request: &AdminClearRequest) -> Self {
        Self {
            form: Form::new(vec![FormField::new("Denom", true).with_value(&request.denom)]),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Overwrites the displayed denom with the record's.
    pub fn sync(&mut self, request: &AdminClearRequest) {
        self.form.set_value(DENOM, &request.denom);
    }
}

impl ScreenState for ClearAdminState {
    // The empty-denom check lives in the controller so it is reported like
    // any other submit failure.
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match apply_form_key(&mut self.form, key, |_, _| true) {
            FormInput::Edited(_) => Action::UpdateField(
                FieldKey::Clear(ClearField::Denom),
                self.form.value(DENOM).into(),
            ),
            FormInput::Submit => Action::Submit(Section::ClearAdmin),
            FormInput::Unchanged => Action::None,
        }
    }
}

#[mutants::skip]
pub fn draw_clear_admin(state: &ClearAdminState, frame: &mut Frame, area: Rect) {
    draw_form_screen("Clear Admin Rights", state.form(), frame, area);
}
