// src/ui/widgets/breadcrumbs.rs
//! Breadcrumb bar with the view mode indicator.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::navigation::{Breadcrumb, ViewMode};

const SEPARATOR: &str = " \u{203a} ";
const LIST_LABEL: &str = " \u{f03a} List ";
const GRID_LABEL: &str = " \u{f00a} Grid ";
const MODE_INDICATOR_WIDTH: u16 = 16;

fn trail_area(area: Rect) -> Rect {
    let inner = Block::default().borders(Borders::BOTTOM).inner(area);
    // One column of padding on the left and a one column gap before the indicator
    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(MODE_INDICATOR_WIDTH + 2),
        inner.height.min(1),
    )
}

fn indicator_area(area: Rect) -> Rect {
    let inner = Block::default().borders(Borders::BOTTOM).inner(area);
    Rect::new(
        inner.right().saturating_sub(MODE_INDICATOR_WIDTH),
        inner.y,
        MODE_INDICATOR_WIDTH.min(inner.width),
        inner.height.min(1),
    )
}

/// Click targets of the List and Grid buttons.
pub fn view_mode_hitboxes(area: Rect) -> Vec<(ViewMode, Rect)> {
    let indicator = indicator_area(area);
    if indicator.is_empty() {
        return Vec::new();
    }
    let list_width = Span::raw(LIST_LABEL).width() as u16;
    let grid_width = Span::raw(GRID_LABEL).width() as u16;
    // The indicator is right aligned
    let grid = Rect::new(indicator.right().saturating_sub(grid_width), indicator.y, grid_width, 1);
    let list = Rect::new(grid.x.saturating_sub(list_width), indicator.y, list_width, 1);
    [(ViewMode::List, list), (ViewMode::Grid, grid)]
        .into_iter()
        .map(|(mode, rect)| (mode, rect.intersection(indicator)))
        .filter(|(_, rect)| !rect.is_empty())
        .collect()
}

/// Screen rectangles of each breadcrumb, paired with its trail index.
/// Crumbs that do not fit are left out.
pub fn breadcrumb_hitboxes(area: Rect, crumbs: &[Breadcrumb]) -> Vec<(usize, Rect)> {
    let trail = trail_area(area);
    if trail.height == 0 {
        return Vec::new();
    }
    let sep_width = Span::raw(SEPARATOR).width() as u16;
    let mut hits = Vec::with_capacity(crumbs.len());
    let mut x = trail.x;
    for (index, crumb) in crumbs.iter().enumerate() {
        if index > 0 {
            x = x.saturating_add(sep_width);
        }
        let width = Span::raw(crumb.name.as_str()).width() as u16;
        let visible = width.min(trail.right().saturating_sub(x));
        if visible == 0 {
            break;
        }
        hits.push((index, Rect::new(x, trail.y, visible, 1)));
        x = x.saturating_add(width);
    }
    hits
}

/// Render the breadcrumb trail and the grid/list indicator.
pub fn render_breadcrumbs(f: &mut Frame<'_>, area: Rect, crumbs: &[Breadcrumb], mode: ViewMode) {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let last = crumbs.len().saturating_sub(1);
    let mut spans = Vec::with_capacity(crumbs.len() * 2);
    for (index, crumb) in crumbs.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
        }
        let style = if index == last {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(crumb.name.as_str(), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), trail_area(area));

    let active = Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    let (list_style, grid_style) = match mode {
        ViewMode::List => (active, Style::default()),
        ViewMode::Grid => (Style::default(), active),
    };
    let indicator = Line::from(vec![
        Span::styled(LIST_LABEL, list_style),
        Span::styled(GRID_LABEL, grid_style),
    ]);
    f.render_widget(
        Paragraph::new(indicator).alignment(Alignment::Right),
        indicator_area(area),
    );
}
