// src/ui/widgets/popups.rs
//! Item action menu and upload dialog.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::overlay::ActionMenu;
use crate::ui::layout::centered_rect;

/// Render the action menu for one item.
pub fn render_action_menu(f: &mut Frame<'_>, area: Rect, menu: &ActionMenu) {
    let title = format!(" {} ", menu.item_name);
    let width = (title.chars().count() as u16 + 4).max(20);
    let popup = centered_rect(width, menu.actions.len() as u16 + 2, area);

    let items: Vec<ListItem> = menu
        .actions
        .iter()
        .map(|action| {
            let style = if action.is_destructive() {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(action.to_string(), style))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(menu.selected));

    f.render_widget(Clear, popup);
    f.render_stateful_widget(list, popup, &mut state);
}

/// Render the "Upload files" dialog.
pub fn render_upload_dialog(f: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(44, 9, area);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("\u{f093}", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            "Drag and drop files here",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("or", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            " Browse files ",
            Style::default().fg(Color::White).bg(Color::Blue),
        )),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Upload files ")
                    .title_bottom(Line::from(" Esc to close ").alignment(Alignment::Right)),
            ),
        popup,
    );
}
