// src/ui/widgets/header.rs
//! Top bar: title, search placeholder, settings and user badge.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::icons::{FOLDER_COLOR, FOLDER_ICON};

pub const APP_TITLE: &str = "Drive Browser";
pub const SEARCH_PLACEHOLDER: &str = "Search in Drive";
const USER_INITIALS: &str = "JD";
const SETTINGS_ICON: &str = "\u{f013}";

/// Render the header bar.
pub fn render_header(f: &mut Frame<'_>, area: Rect) {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(APP_TITLE.len() as u16 + 4),
            Constraint::Min(10),
            Constraint::Length(9),
        ])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(format!(" {} ", FOLDER_ICON), Style::default().fg(FOLDER_COLOR)),
        Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(title), cols[0]);

    // Search is not wired to anything
    let search = Line::from(vec![
        Span::styled(" \u{f002} ", Style::default().fg(Color::DarkGray)),
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(
        Paragraph::new(search).style(Style::default().bg(Color::Rgb(40, 40, 48))),
        cols[1],
    );

    // Settings is inert, like search
    let account = Line::from(vec![
        Span::styled(format!(" {} ", SETTINGS_ICON), Style::default().fg(Color::Gray)),
        Span::raw(" "),
        Span::styled(
            format!(" {} ", USER_INITIALS),
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(account).alignment(Alignment::Right), cols[2]);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    #[test]
    fn settings_sits_beside_user_badge() {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).expect("terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                render_header(f, area);
            })
            .expect("draw");
        let buffer = terminal.backend().buffer();
        let row: String = (0..60).map(|x| buffer[(x, 0)].symbol()).collect();
        assert!(row.contains(APP_TITLE));
        assert!(row.contains(SEARCH_PLACEHOLDER));
        assert!(row.trim_end().ends_with(&format!(" {SETTINGS_ICON}   {USER_INITIALS}")));
    }
}
