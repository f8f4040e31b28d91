// src/ui/widgets/item_list.rs
//! Tabular list view of the current folder.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::drive::Item;
use crate::ui::icons::{color_for_item, icon_for_item};

const HEADERS: [&str; 4] = ["Name", "Type", "Size", "Modified"];
const HEADER_HEIGHT: u16 = 2;

fn item_row(item: &Item) -> Row<'_> {
    let name_style = if item.is_folder() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let name = Line::from(vec![
        Span::styled(icon_for_item(item), Style::default().fg(color_for_item(item))),
        Span::raw(" "),
        Span::styled(item.name.as_str(), name_style),
    ]);
    let muted = Style::default().fg(Color::Gray);
    Row::new(vec![
        Cell::from(name),
        Cell::from(item.type_label()).style(muted),
        Cell::from(item.size_label()).style(muted),
        Cell::from(item.modified_label()).style(muted),
    ])
}

/// Click targets of the data rows, paired with the item index. `offset` is
/// the table's scroll offset after rendering.
pub fn list_row_hitboxes(area: Rect, item_count: usize, offset: usize) -> Vec<(usize, Rect)> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    // Header row plus its bottom margin
    let first_row_y = inner.y.saturating_add(HEADER_HEIGHT);
    let rows = inner.bottom().saturating_sub(first_row_y) as usize;
    (offset..item_count)
        .take(rows)
        .enumerate()
        .map(|(line, index)| {
            (
                index,
                Rect::new(inner.x, first_row_y + line as u16, inner.width, 1),
            )
        })
        .collect()
}

/// Render the list view.
pub fn render_item_list(f: &mut Frame<'_>, area: Rect, items: &[&Item], state: &mut TableState) {
    let header = Row::new(HEADERS)
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
        .bottom_margin(HEADER_HEIGHT - 1);
    let rows: Vec<Row> = items.iter().map(|item| item_row(item)).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Fill(5),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Fill(2),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL))
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, state);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::drive::Drive;

    #[test]
    fn row_hitboxes_line_up_with_rendered_rows() {
        let drive = Drive::sample();
        let items = drive.children_of("root");
        let area = Rect::new(0, 0, 60, 8);
        let mut state = TableState::default();
        state.select(Some(0));

        let mut terminal = Terminal::new(TestBackend::new(60, 8)).expect("terminal");
        terminal
            .draw(|f| render_item_list(f, area, &items, &mut state))
            .expect("draw");
        let buffer = terminal.backend().buffer();

        // 6 inner rows less the header leaves 4 data rows
        let hits = list_row_hitboxes(area, items.len(), state.offset());
        assert_eq!(hits.len(), 4);
        for (index, rect) in hits {
            let line: String = (rect.x..rect.right())
                .map(|x| buffer[(x, rect.y)].symbol())
                .collect();
            assert!(line.contains(items[index].name.as_str()), "{line}");
        }
    }

    #[test]
    fn row_hitboxes_follow_scroll_offset() {
        let hits = list_row_hitboxes(Rect::new(0, 0, 40, 8), 10, 3);
        assert_eq!(hits.first(), Some(&(3, Rect::new(1, 3, 38, 1))));
        assert_eq!(hits.last().map(|(index, _)| *index), Some(6));
        assert!(list_row_hitboxes(Rect::new(0, 0, 40, 3), 10, 0).is_empty());
    }
}
