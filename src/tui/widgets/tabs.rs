//! Section switcher shown above the active form.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Section;

/// Renders one tab per [`Section`], highlighting `active`.
///
/// Each tab is prefixed with the function key that selects it: `F1 Issue Class`.
#[mutants::skip]
pub fn draw_tabs(active: Section, frame: &mut Frame, area: Rect) {
    let active_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD);
    let inactive_style = Style::default().fg(Color::Gray);

    let mut spans = Vec::new();
    for (i, section) in Section::ALL.into_iter().enumerate() {
        let style = if section == active {
            active_style
        } else {
            inactive_style
        };
        spans.push(Span::styled(format!(" F{} {} ", i + 1, section.label()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
