//! Stacked notification list, newest at the bottom.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Level, Notification};

fn level_style(level: Level) -> (Style, &'static str) {
    match level {
        Level::Success => (Style::default().fg(Color::Green), "✔"),
        Level::Info => (Style::default().fg(Color::Cyan), "ℹ"),
        Level::Error => (Style::default().fg(Color::Red), "✖"),
    }
}

/// Renders the most recent notifications that fit in `area`, one per line.
///
/// Renders nothing when there are no notifications.
#[mutants::skip]
pub fn draw_toasts(notifications: &[Notification], frame: &mut Frame, area: Rect) {
    let visible = usize::from(area.height).min(notifications.len());
    let lines: Vec<Line> = notifications[notifications.len() - visible..]
        .iter()
        .map(|n| {
            let (style, icon) = level_style(n.level);
            Line::from(vec![
                Span::styled(format!("{icon} "), style),
                Span::styled(
                    n.created_at.format("%H:%M:%S ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(n.message.clone(), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
