//! Issue screen: form for creating a new fungible token class.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use super::{FormInput, apply_form_key, draw_form_screen};
use crate::model::{
    ClassIssuanceRequest, FieldKey, FieldValue, IssueField, Section, parse_precision,
};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{Form, FormField};

/// Field index for the class symbol.
const SYMBOL: usize = 0;
/// Field index for the subunit.
const SUBUNIT: usize = 1;
/// Field index for the decimal precision.
const PRECISION: usize = 2;
/// Field index for the initial supply.
const INITIAL_AMOUNT: usize = 3;
/// Field index for the free-text description.
const DESCRIPTION: usize = 4;

/// Record field behind a form row.
fn field_at(index: usize) -> Option<IssueField> {
    match index {
        SYMBOL => Some(IssueField::Symbol),
        SUBUNIT => Some(IssueField::Subunit),
        PRECISION => Some(IssueField::Precision),
        INITIAL_AMOUNT => Some(IssueField::InitialAmount),
        DESCRIPTION => Some(IssueField::Description),
        _ => None,
    }
}

/// State for the issue screen.
#[derive(Debug, Clone)]
pub struct IssueTokenState {
    form: Form,
}

impl IssueTokenState {
    /// Creates the form showing the values of `request`.
    pub fn new(request: &ClassIssuanceRequest) -> Self {
        Self {
            form: Form::new(vec![
                FormField::new("Class Symbol", false).with_value(&request.symbol),
                FormField::new("Subunit", false).with_value(&request.subunit),
                FormField::new("Precision", false).with_value(request.precision.to_string()),
                FormField::new("Initial Amount", false).with_value(&request.initial_amount),
                FormField::new("Description", false).with_value(&request.description),
            ]),
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Turns the edited text of a row into a field update.
    ///
    /// Precision must parse as a number; until it does the row carries an
    /// error and no update is emitted.
    fn field_update(&mut self, index: usize) -> Action {
        let Some(field) = field_at(index) else {
            return Action::None;
        };
        let key = FieldKey::Issue(field);
        if index != PRECISION {
            return Action::UpdateField(key, self.form.value(index).into());
        }
        match parse_precision(self.form.value(PRECISION)) {
            Ok(precision) => {
                self.form.clear_error(PRECISION);
                Action::UpdateField(key, FieldValue::Number(precision))
            }
            Err(e) => {
                self.form.set_error(PRECISION, e.to_string());
                Action::None
            }
        }
    }
}

fn accepts(index: usize, ch: char) -> bool {
    match index {
        PRECISION | INITIAL_AMOUNT => ch.is_ascii_digit(),
        _ => true,
    }
}

impl ScreenState for IssueTokenState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match apply_form_key(&mut self.form, key, accepts) {
            FormInput::Edited(index) => self.field_update(index),
            FormInput::Submit if self.form.has_errors() => Action::None,
            FormInput::Submit => Action::Submit(Section::IssueToken),
            FormInput::Unchanged => Action::None,
        }
    }
}

/// Renders the issue screen.
#[mutants::skip]
pub fn draw_issue_token(state: &IssueTokenState, frame: &mut Frame, area: Rect) {
    draw_form_screen("Issue Token Class", state.form(), frame, area);
}
