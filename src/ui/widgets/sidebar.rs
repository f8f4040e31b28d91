// src/ui/widgets/sidebar.rs
//! Left sidebar: "New" button, drive sections and storage usage.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

const NEW_ROW: u16 = 0;
const NAV_FIRST_ROW: u16 = 2;

/// Navigation entries. Only "My Drive" does anything.
const NAV_ENTRIES: [(&str, &str); 4] = [
    ("\u{f015}", "My Drive"),
    ("\u{f0c0}", "Shared with me"),
    ("\u{f005}", "Starred"),
    ("\u{f1f8}", "Trash"),
];

const STORAGE_USED_GB: f64 = 6.5;
const STORAGE_TOTAL_GB: f64 = 15.0;

fn inner_area(area: Rect) -> Rect {
    Block::default().borders(Borders::RIGHT).inner(area)
}

/// Row of the "My Drive" entry, used for mouse hit-testing.
pub fn home_entry_area(area: Rect) -> Option<Rect> {
    let inner = inner_area(area);
    if inner.height <= NAV_FIRST_ROW || inner.width == 0 {
        return None;
    }
    Some(Rect::new(inner.x, inner.y + NAV_FIRST_ROW, inner.width, 1))
}

/// Render the sidebar. `at_root` highlights the "My Drive" entry.
pub fn render_sidebar(f: &mut Frame<'_>, area: Rect, at_root: bool) {
    let block = Block::default().borders(Borders::RIGHT);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let new_button = Line::from(Span::styled(
        " + New ",
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(
        Paragraph::new(new_button),
        Rect::new(inner.x + 1, inner.y + NEW_ROW, inner.width.saturating_sub(1), 1),
    );

    for (i, (icon, label)) in NAV_ENTRIES.iter().enumerate() {
        let y = inner.y + NAV_FIRST_ROW + i as u16;
        if y >= inner.bottom() {
            break;
        }
        let style = if i == 0 && at_root {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        f.render_widget(
            Paragraph::new(format!(" {} {}", icon, label)).style(style),
            Rect::new(inner.x, y, inner.width, 1),
        );
    }

    // Storage meter pinned to the bottom
    if inner.height >= NAV_FIRST_ROW + NAV_ENTRIES.len() as u16 + 4 {
        let base = inner.bottom() - 3;
        let x = inner.x + 1;
        let width = inner.width.saturating_sub(2);
        f.render_widget(
            Paragraph::new(Span::styled("Storage", Style::default().fg(Color::Gray))),
            Rect::new(x, base, width, 1),
        );
        f.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray))
                .ratio((STORAGE_USED_GB / STORAGE_TOTAL_GB).clamp(0.0, 1.0))
                .label(""),
            Rect::new(x, base + 1, width, 1),
        );
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("{} GB of {} GB used", STORAGE_USED_GB, STORAGE_TOTAL_GB),
                Style::default().fg(Color::DarkGray),
            )),
            Rect::new(x, base + 2, width, 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_entry_sits_below_new_button() {
        let area = Rect::new(0, 3, 26, 20);
        assert_eq!(home_entry_area(area), Some(Rect::new(0, 5, 25, 1)));
        assert_eq!(home_entry_area(Rect::new(0, 0, 26, 2)), None);
    }
}
