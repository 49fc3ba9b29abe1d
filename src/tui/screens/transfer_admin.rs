//! Transfer screen: hand the admin of a denom to another account.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use super::{FormInput, apply_form_key, draw_form_screen};
use crate::model::{AdminTransferRequest, FieldKey, Section, TransferField};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{Form, FormField};

const DENOM: usize = 0;
const NEW_ADMIN: usize = 1;

#[derive(Debug, Clone)]
pub struct TransferAdminState {
    form: Form,
}

impl TransferAdminState {
    /// Creates the form showing the values of `request`.
    pub fn new(request: &AdminTransferRequest) -> Self {
        let mut state = Self {
            form: Form::new(vec![
                FormField::new("Denom", false),
                FormField::new("New Admin Address", false),
            ]),
        };
        state.sync(request);
        state
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Overwrites the displayed text with the values of `request`.
    pub fn sync(&mut self, request: &AdminTransferRequest) {
        self.form.set_value(DENOM, &request.denom);
        self.form.set_value(NEW_ADMIN, &request.new_admin);
    }
}

impl ScreenState for TransferAdminState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match apply_form_key(&mut self.form, key, |_, _| true) {
            FormInput::Edited(index) => {
                let field = if index == DENOM {
                    TransferField::Denom
                } else {
                    TransferField::NewAdmin
                };
                Action::UpdateField(FieldKey::Transfer(field), self.form.value(index).into())
            }
            FormInput::Submit => Action::Submit(Section::TransferAdmin),
            FormInput::Unchanged => Action::None,
        }
    }
}

#[mutants::skip]
pub fn draw_transfer_admin(state: &TransferAdminState, frame: &mut Frame, area: Rect) {
    draw_form_screen("Transfer Admin Rights", state.form(), frame, area);
}
