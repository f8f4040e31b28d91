// src/ui/widgets/category_tabs.rs
//! All / Folders / Files tab strip.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Tabs,
    Frame,
};

use crate::app::navigation::Category;

const PADDING: &str = " ";

/// Click targets of the tabs. Each tab is its title plus one column of
/// padding on either side, with no divider in between.
pub fn tab_hitboxes(area: Rect) -> Vec<(Category, Rect)> {
    if area.is_empty() {
        return Vec::new();
    }
    let pad = Span::raw(PADDING).width() as u16;
    let mut hits = Vec::with_capacity(Category::ALL.len());
    let mut x = area.x;
    for category in Category::ALL {
        let width = pad * 2 + Span::raw(category.to_string()).width() as u16;
        let tab = Rect::new(x, area.y, width, 1).intersection(area);
        if tab.is_empty() {
            break;
        }
        hits.push((category, tab));
        x = x.saturating_add(width);
    }
    hits
}

/// Render the category tabs with `active` highlighted.
pub fn render_category_tabs(f: &mut Frame<'_>, area: Rect, active: Category) {
    let titles = Category::ALL.iter().map(|c| c.to_string());
    let selected = Category::ALL
        .iter()
        .position(|c| *c == active)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .padding(PADDING, PADDING)
        .divider("");
    f.render_widget(tabs, area);
}
