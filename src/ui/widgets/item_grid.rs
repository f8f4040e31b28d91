// src/ui/widgets/item_grid.rs
//! Card grid view of the current folder.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::drive::Item;
use crate::ui::icons::{color_for_item, icon_for_item};
use crate::ui::layout::{first_visible_row, grid_columns, GRID_CARD_HEIGHT};

/// Screen rectangles of the cards that fit in `area`, paired with the item
/// index. Rows scroll so that the `selected` card stays visible.
pub fn grid_card_rects(area: Rect, item_count: usize, selected: usize) -> Vec<(usize, Rect)> {
    let columns = grid_columns(area.width);
    if area.height < GRID_CARD_HEIGHT || area.width == 0 {
        return Vec::new();
    }

    let card_width = area.width / columns as u16;
    let visible_rows = (area.height / GRID_CARD_HEIGHT) as usize;
    let first_row = first_visible_row(selected / columns, visible_rows);

    (first_row * columns..item_count)
        .take(visible_rows * columns)
        .map(|index| {
            let row = index / columns - first_row;
            let col = index % columns;
            let card = Rect::new(
                area.x + col as u16 * card_width,
                area.y + row as u16 * GRID_CARD_HEIGHT,
                card_width,
                GRID_CARD_HEIGHT,
            );
            (index, card)
        })
        .collect()
}

/// Render the grid view and return the number of columns used.
pub fn render_item_grid(f: &mut Frame<'_>, area: Rect, items: &[&Item], selected: usize) -> usize {
    for (index, card) in grid_card_rects(area, items.len(), selected) {
        render_card(f, card, items[index], index == selected);
    }
    grid_columns(area.width)
}

fn render_card(f: &mut Frame<'_>, area: Rect, item: &Item, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let name_style = if selected {
        Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(
            icon_for_item(item),
            Style::default().fg(color_for_item(item)),
        )),
        Line::from(Span::styled(item.name.as_str(), name_style)),
    ];
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        ),
        area,
    );
}
