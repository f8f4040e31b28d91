// src/ui/layout.rs
//! Layout computation for the UI panels.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Sidebar width in columns.
pub const SIDEBAR_WIDTH: u16 = 26;
/// Below this terminal width the sidebar is hidden.
pub const SIDEBAR_MIN_TOTAL_WIDTH: u16 = 70;

/// Grid cards are at least this wide.
pub const GRID_CARD_WIDTH: u16 = 22;
/// Height of a grid card including borders.
pub const GRID_CARD_HEIGHT: u16 = 4;
/// Never lay out more than this many grid columns.
pub const GRID_MAX_COLUMNS: usize = 5;

/// Computed layout areas for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedLayout {
    pub header: Rect,
    pub sidebar: Option<Rect>,
    pub breadcrumbs: Rect,
    pub tabs: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Compute the screen layout for the given terminal area.
pub fn compute_layout(area: Rect) -> ComputedLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let (sidebar, main_area) = if area.width >= SIDEBAR_MIN_TOTAL_WIDTH {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
            .split(rows[1]);
        (Some(cols[0]), cols[1])
    } else {
        (None, rows[1])
    };

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(main_area);

    ComputedLayout {
        header: rows[0],
        sidebar,
        breadcrumbs: main[0],
        tabs: main[1],
        content: main[2],
        status: rows[2],
    }
}

/// Number of grid columns that fit in `width`.
pub fn grid_columns(width: u16) -> usize {
    ((width / GRID_CARD_WIDTH) as usize).clamp(1, GRID_MAX_COLUMNS)
}

/// First row to draw so that `selected_row` stays on screen.
pub fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    if selected_row >= visible_rows {
        selected_row + 1 - visible_rows
    } else {
        0
    }
}

/// A `width` x `height` rectangle centred in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_terminal_shows_sidebar() {
        let layout = compute_layout(Rect::new(0, 0, 120, 40));
        let sidebar = layout.sidebar.expect("sidebar");
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status.y, 39);
        assert_eq!(layout.breadcrumbs.x, SIDEBAR_WIDTH);
        assert_eq!(layout.content.width, 120 - SIDEBAR_WIDTH);
    }

    #[test]
    fn narrow_terminal_hides_sidebar() {
        let layout = compute_layout(Rect::new(0, 0, 50, 20));
        assert!(layout.sidebar.is_none());
        assert_eq!(layout.content.width, 50);
    }

    #[test]
    fn grid_columns_are_bounded() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(GRID_CARD_WIDTH * 3 + 5), 3);
        assert_eq!(grid_columns(500), GRID_MAX_COLUMNS);
    }

    #[test]
    fn scrolling_keeps_selection_visible() {
        assert_eq!(first_visible_row(0, 3), 0);
        assert_eq!(first_visible_row(2, 3), 0);
        assert_eq!(first_visible_row(5, 3), 3);
        assert_eq!(first_visible_row(4, 0), 4);
    }

    #[test]
    fn centered_rect_is_clipped() {
        let area = Rect::new(10, 10, 40, 10);
        assert_eq!(centered_rect(20, 4, area), Rect::new(20, 13, 20, 4));
        assert_eq!(centered_rect(100, 100, area), area);
    }
}
