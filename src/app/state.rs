// src/app/state.rs
//! Application state management.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, TableState},
    Frame,
};

use crate::{
    app::{
        navigation::{Category, NavigationState, ViewMode},
        overlay::{ActionMenu, Overlay},
    },
    config::Config,
    drive::{Drive, Item},
    ui::{
        keybindings::{key_to_action, NavigationAction},
        layout::compute_layout,
        widgets::{
            breadcrumb_hitboxes, grid_card_rects, home_entry_area, list_row_hitboxes,
            render_action_menu, render_breadcrumbs, render_category_tabs, render_header,
            render_item_grid, render_item_list, render_sidebar, render_status_bar,
            render_upload_dialog, tab_hitboxes, view_mode_hitboxes,
        },
    },
};

/// Main application state.
pub struct App {
    /// The static drive being browsed
    pub drive: Drive,
    /// Current folder, breadcrumbs and view filters
    pub nav: NavigationState,
    /// Cursor index into the visible items
    pub selected: usize,
    /// Table widget state for the list view
    pub table_state: TableState,
    /// Popup currently shown, if any
    pub overlay: Overlay,

    /// Grid columns from the last frame, for up/down movement
    grid_columns: usize,
    /// Breadcrumb click targets from the last frame
    breadcrumb_hits: Vec<(usize, Rect)>,
    /// Sidebar "My Drive" click target from the last frame
    home_hit: Option<Rect>,
    /// Category tab click targets
    tab_hits: Vec<(Category, Rect)>,
    /// List/Grid button click targets
    mode_hits: Vec<(ViewMode, Rect)>,
    /// Row or card click targets, by visible item index
    item_hits: Vec<(usize, Rect)>,
}

impl App {
    /// Create a new application instance over `drive`.
    pub fn new(drive: Drive, config: &Config) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            drive,
            nav: NavigationState::new(config.view.mode, config.view.category),
            selected: 0,
            table_state,
            overlay: Overlay::None,
            grid_columns: 1,
            breadcrumb_hits: Vec::new(),
            home_hit: None,
            tab_hits: Vec::new(),
            mode_hits: Vec::new(),
            item_hits: Vec::new(),
        }
    }

    /// Items shown for the current folder and category.
    pub fn visible_items(&self) -> Vec<&Item> {
        self.nav.visible_items(&self.drive)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.visible_items().get(self.selected).copied()
    }

    /// Replace the navigation state and reset the cursor.
    fn set_nav(&mut self, nav: NavigationState) {
        if nav.current_folder_id() != self.nav.current_folder_id() {
            log::debug!(
                "navigate {} -> {} (trail depth {})",
                self.nav.current_folder_id(),
                nav.current_folder_id(),
                nav.breadcrumbs().len()
            );
        }
        self.nav = nav;
        self.selected = 0;
    }

    /// Navigate to the crumb at `index` in the trail.
    pub fn jump_to_breadcrumb(&mut self, index: usize) {
        if let Some(crumb) = self.nav.breadcrumbs().get(index).cloned() {
            self.set_nav(self.nav.navigate_to_folder(&crumb.id, &crumb.name));
        }
    }

    fn open_selected(&mut self) {
        let Some((id, name, is_folder)) = self
            .selected_item()
            .map(|item| (item.id.clone(), item.name.clone(), item.is_folder()))
        else {
            return;
        };

        if is_folder {
            self.set_nav(self.nav.navigate_to_folder(&id, &name));
        } else {
            log::debug!("open {} ignored: file preview is not available", id);
        }
    }

    fn go_back(&mut self) {
        if let Some(nav) = self.nav.back() {
            self.set_nav(nav);
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.visible_items().len();
        if len == 0 {
            return;
        }
        let target = self.selected as isize + delta;
        if (0..len as isize).contains(&target) {
            self.selected = target as usize;
        }
    }

    fn row_step(&self) -> isize {
        match self.nav.view_mode() {
            ViewMode::Grid => self.grid_columns.max(1) as isize,
            ViewMode::List => 1,
        }
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        let action = key_to_action(&key);
        if action == NavigationAction::Quit {
            return true;
        }

        if self.overlay.is_open() {
            self.on_overlay_action(action);
            return false;
        }

        match action {
            NavigationAction::Down => self.move_selection(self.row_step()),
            NavigationAction::Up => self.move_selection(-self.row_step()),
            NavigationAction::Left => match self.nav.view_mode() {
                ViewMode::Grid => self.move_selection(-1),
                ViewMode::List => self.go_back(),
            },
            NavigationAction::Right => match self.nav.view_mode() {
                ViewMode::Grid => self.move_selection(1),
                ViewMode::List => self.open_selected(),
            },
            NavigationAction::Enter => self.open_selected(),
            NavigationAction::Back => self.go_back(),
            NavigationAction::Home => self.set_nav(self.nav.home()),
            NavigationAction::ToggleView => {
                self.nav = self.nav.toggle_view_mode();
                log::debug!("view mode {:?}", self.nav.view_mode());
            }
            NavigationAction::NextCategory => {
                self.set_nav(self.nav.with_category(self.nav.category().next()))
            }
            NavigationAction::PrevCategory => {
                self.set_nav(self.nav.with_category(self.nav.category().prev()))
            }
            NavigationAction::SelectCategory(category) => {
                if category != self.nav.category() {
                    self.set_nav(self.nav.with_category(category));
                }
            }
            NavigationAction::OpenMenu => {
                if let Some(menu) = self.selected_item().map(ActionMenu::new) {
                    self.overlay = Overlay::Menu(menu);
                }
            }
            NavigationAction::OpenNewDialog => self.overlay = Overlay::NewDialog,
            NavigationAction::Close | NavigationAction::Quit | NavigationAction::None => {}
        }

        false
    }

    fn on_overlay_action(&mut self, action: NavigationAction) {
        match &mut self.overlay {
            Overlay::Menu(menu) => match action {
                NavigationAction::Down => menu.select_next(),
                NavigationAction::Up => menu.select_prev(),
                NavigationAction::Enter => {
                    if let Some(choice) = menu.selected_action() {
                        log::info!(
                            "{} requested for {} ({}); action is not available",
                            choice,
                            menu.item_name,
                            menu.item_id
                        );
                    }
                    self.overlay = Overlay::None;
                }
                NavigationAction::Close | NavigationAction::Back => self.overlay = Overlay::None,
                _ => {}
            },
            Overlay::NewDialog => {
                if matches!(action, NavigationAction::Close | NavigationAction::Enter) {
                    self.overlay = Overlay::None;
                }
            }
            Overlay::None => {}
        }
    }

    /// Handle a mouse event. Left clicks on a breadcrumb, tab, view button,
    /// item or the sidebar's My Drive entry act like the matching key.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || self.overlay.is_open() {
            return;
        }
        let pos = Position::new(mouse.column, mouse.row);

        if let Some(index) = hit_at(&self.breadcrumb_hits, pos) {
            self.jump_to_breadcrumb(index);
        } else if let Some(category) = hit_at(&self.tab_hits, pos) {
            if category != self.nav.category() {
                self.set_nav(self.nav.with_category(category));
            }
        } else if let Some(mode) = hit_at(&self.mode_hits, pos) {
            self.nav = self.nav.with_view_mode(mode);
            log::debug!("view mode {:?}", mode);
        } else if let Some(index) = hit_at(&self.item_hits, pos) {
            self.selected = index;
            self.open_selected();
        } else if self.home_hit.is_some_and(|rect| rect.contains(pos)) {
            self.set_nav(self.nav.home());
        }
    }

    /// Draw the application UI.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let area = f.area();
        let layout = compute_layout(area);

        render_header(f, layout.header);

        self.home_hit = layout.sidebar.and_then(home_entry_area);
        if let Some(sidebar) = layout.sidebar {
            render_sidebar(f, sidebar, self.nav.is_at_root());
        }

        self.breadcrumb_hits = breadcrumb_hitboxes(layout.breadcrumbs, self.nav.breadcrumbs());
        render_breadcrumbs(
            f,
            layout.breadcrumbs,
            self.nav.breadcrumbs(),
            self.nav.view_mode(),
        );
        self.mode_hits = view_mode_hitboxes(layout.breadcrumbs);
        self.tab_hits = tab_hitboxes(layout.tabs);
        render_category_tabs(f, layout.tabs, self.nav.category());

        let items = self.nav.visible_items(&self.drive);
        if self.selected >= items.len() {
            self.selected = items.len().saturating_sub(1);
        }

        if items.is_empty() {
            self.item_hits.clear();
            f.render_widget(
                Paragraph::new("This folder is empty")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL)),
                layout.content,
            );
        } else {
            match self.nav.view_mode() {
                ViewMode::List => {
                    self.table_state.select(Some(self.selected));
                    render_item_list(f, layout.content, &items, &mut self.table_state);
                    self.item_hits = list_row_hitboxes(
                        layout.content,
                        items.len(),
                        self.table_state.offset(),
                    );
                }
                ViewMode::Grid => {
                    self.grid_columns = render_item_grid(f, layout.content, &items, self.selected);
                    self.item_hits = grid_card_rects(layout.content, items.len(), self.selected);
                }
            }
        }

        render_status_bar(f, layout.status, items.len());

        match &self.overlay {
            Overlay::Menu(menu) => render_action_menu(f, layout.content, menu),
            Overlay::NewDialog => render_upload_dialog(f, area),
            Overlay::None => {}
        }
    }
}

fn hit_at<T: Copy>(hits: &[(T, Rect)], pos: Position) -> Option<T> {
    hits.iter()
        .find(|(_, rect)| rect.contains(pos))
        .map(|(target, _)| *target)
}
