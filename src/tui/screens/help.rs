//! Help screen: scrollable keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

static SECTION_KEYS: &[(&str, &str)] = &[
    ("F1", "issue token class"),
    ("F2", "transfer admin rights"),
    ("F3", "clear admin rights"),
    ("Ctrl+← / Ctrl+→", "previous / next section"),
];

static FORM_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("↑ / ↓", "prev / next field"),
    ("Backspace", "delete last character"),
    ("Enter", "submit the form"),
];

static GLOBAL_KEYS: &[(&str, &str)] = &[
    ("Ctrl+D", "dismiss notifications"),
    ("F10", "this help"),
    ("Esc", "quit (from a form)"),
    ("Ctrl+C", "quit"),
];

static HELP_KEYS: &[(&str, &str)] = &[("↑ / ↓", "scroll"), ("Esc / F10", "back")];

/// State for the help screen.
#[derive(Debug, Clone, Default)]
pub struct HelpState {
    scroll: u16,
}

impl HelpState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Resets the scroll position to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1).min(max_scroll());
                Action::None
            }
            KeyCode::Esc | KeyCode::F(10) => Action::Navigate(Screen::Forms),
            _ => Action::None,
        }
    }
}

fn build_section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, header_style)),
    ];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<20}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

/// Offset that leaves only the last line of help at the top.
fn max_scroll() -> u16 {
    u16::try_from(help_content().len())
        .unwrap_or(u16::MAX)
        .saturating_sub(1)
}

fn help_content() -> Vec<Line<'static>> {
    [
        ("Sections", SECTION_KEYS),
        ("Forms", FORM_KEYS),
        ("Global", GLOBAL_KEYS),
        ("Help", HELP_KEYS),
    ]
    .into_iter()
    .flat_map(|(title, keys)| build_section(title, keys))
    .collect()
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let content_lines = help_content();
    let total = u16::try_from(content_lines.len()).unwrap_or(u16::MAX);
    let capped_scroll = state.scroll().min(total.saturating_sub(content_area.height));

    frame.render_widget(
        Paragraph::new(content_lines).scroll((capped_scroll, 0)),
        content_area,
    );

    let footer =
        Paragraph::new("↑/↓: scroll  Esc/F10: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
