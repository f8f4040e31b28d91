// src/ui/widgets/status_bar.rs
//! One-line status bar: item count and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HINTS: &str =
    "enter open  bksp back  v view  tab filter  m menu  n new  q quit";

/// Item count label, singular for one.
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

/// Render the status bar.
pub fn render_status_bar(f: &mut Frame<'_>, area: Rect, item_count: usize) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", count_label(item_count)),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ),
        Span::raw(" "),
        Span::styled(HINTS, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_labels() {
        assert_eq!(count_label(0), "0 items");
        assert_eq!(count_label(1), "1 item");
        assert_eq!(count_label(5), "5 items");
    }
}
