//! TUI screen implementations: one form per section, plus help.

pub mod clear_admin;
pub mod help;
pub mod issue_token;
pub mod transfer_admin;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

pub use clear_admin::{ClearAdminState, draw_clear_admin};
pub use help::{HelpState, draw_help};
pub use issue_token::{IssueTokenState, draw_issue_token};
pub use transfer_admin::{TransferAdminState, draw_transfer_admin};

use super::widgets::form::{Form, draw_form};

/// Effect of one key press on a [`Form`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormInput {
    /// The text of the field at this index changed.
    Edited(usize),
    /// The user asked to submit.
    Submit,
    /// Nothing the caller needs to act on.
    Unchanged,
}

/// Applies an editing key to `form`.
///
/// `accepts(index, ch)` decides whether the field at `index` takes `ch`.
/// Characters typed with Ctrl or Alt held are never inserted.
pub(crate) fn apply_form_key(
    form: &mut Form,
    key: KeyEvent,
    accepts: impl Fn(usize, char) -> bool,
) -> FormInput {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            FormInput::Unchanged
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
            FormInput::Unchanged
        }
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            if accepts(form.focus(), ch) {
                form.insert_char(ch);
                FormInput::Edited(form.focus())
            } else {
                FormInput::Unchanged
            }
        }
        KeyCode::Backspace => {
            let focus = form.focus();
            if form.value(focus).is_empty() {
                FormInput::Unchanged
            } else {
                form.delete_char();
                FormInput::Edited(focus)
            }
        }
        KeyCode::Enter => FormInput::Submit,
        _ => FormInput::Unchanged,
    }
}

/// Renders a bordered form with a key hint footer.
#[mutants::skip]
pub(crate) fn draw_form_screen(title: &str, form: &Form, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(form.height()),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(form, frame, form_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter: submit  F10: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}


#[cfg(test)]
mod tests {
    use super::test_util::{ctrl, press};
    use super::*;
    use crate::tui::widgets::FormField;

    fn make_form() -> Form {
        Form::new(vec![
            FormField::new("Any", false),
            FormField::new("Digits", false),
        ])
    }

    fn any_or_digits(index: usize, ch: char) -> bool {
        index == 0 || ch.is_ascii_digit()
    }

    #[test]
    fn typed_char_edits_focused_field() {
        let mut form = make_form();
        let input = apply_form_key(&mut form, press(KeyCode::Char('x')), any_or_digits);
        assert_eq!(input, FormInput::Edited(0));
        assert_eq!(form.value(0), "x");
    }

    #[test]
    fn rejected_char_is_unchanged() {
        let mut form = make_form();
        form.focus_next();
        let input = apply_form_key(&mut form, press(KeyCode::Char('x')), any_or_digits);
        assert_eq!(input, FormInput::Unchanged);
        assert_eq!(form.value(1), "");
    }

    #[test]
    fn ctrl_chars_are_not_inserted() {
        let mut form = make_form();
        let input = apply_form_key(&mut form, ctrl(KeyCode::Char('d')), any_or_digits);
        assert_eq!(input, FormInput::Unchanged);
        assert_eq!(form.value(0), "");
    }

    #[test]
    fn backspace_on_empty_is_unchanged() {
        let mut form = make_form();
        let input = apply_form_key(&mut form, press(KeyCode::Backspace), any_or_digits);
        assert_eq!(input, FormInput::Unchanged);
    }

    #[test]
    fn backspace_reports_edit() {
        let mut form = make_form();
        apply_form_key(&mut form, press(KeyCode::Char('a')), any_or_digits);
        let input = apply_form_key(&mut form, press(KeyCode::Backspace), any_or_digits);
        assert_eq!(input, FormInput::Edited(0));
        assert_eq!(form.value(0), "");
    }

    #[test]
    fn tab_and_arrows_move_focus() {
        let mut form = make_form();
        apply_form_key(&mut form, press(KeyCode::Tab), any_or_digits);
        assert_eq!(form.focus(), 1);
        apply_form_key(&mut form, press(KeyCode::Up), any_or_digits);
        assert_eq!(form.focus(), 0);
        apply_form_key(&mut form, press(KeyCode::Down), any_or_digits);
        assert_eq!(form.focus(), 1);
        apply_form_key(&mut form, press(KeyCode::BackTab), any_or_digits);
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn enter_submits() {
        let mut form = make_form();
        let input = apply_form_key(&mut form, press(KeyCode::Enter), any_or_digits);
        assert_eq!(input, FormInput::Submit);
    }
}
