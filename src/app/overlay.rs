// src/app/overlay.rs
//! Popups drawn over the browser: the item action menu and the upload dialog.
//!
//! Both are presentation only. Choosing an action logs the request and closes
//! the popup; the drive is never modified.

use std::fmt;

use crate::drive::Item;

/// Entries of the per-item action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    Download,
    Rename,
    Move,
    Delete,
}

impl ItemAction {
    /// Actions offered for `item`. Folders cannot be downloaded.
    pub fn for_item(item: &Item) -> Vec<ItemAction> {
        let mut actions = Vec::with_capacity(4);
        if !item.is_folder() {
            actions.push(ItemAction::Download);
        }
        actions.extend([ItemAction::Rename, ItemAction::Move, ItemAction::Delete]);
        actions
    }

    pub fn is_destructive(self) -> bool {
        self == ItemAction::Delete
    }
}

impl fmt::Display for ItemAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemAction::Download => "Download",
            ItemAction::Rename => "Rename",
            ItemAction::Move => "Move",
            ItemAction::Delete => "Delete",
        };
        write!(f, "{}", s)
    }
}

/// The action menu for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMenu {
    pub item_id: String,
    pub item_name: String,
    pub actions: Vec<ItemAction>,
    pub selected: usize,
}

impl ActionMenu {
    pub fn new(item: &Item) -> Self {
        Self {
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            actions: ItemAction::for_item(item),
            selected: 0,
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.actions.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_action(&self) -> Option<ItemAction> {
        self.actions.get(self.selected).copied()
    }
}

/// What, if anything, is drawn over the browser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Menu(ActionMenu),
    NewDialog,
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folders_cannot_be_downloaded() {
        let folder = Item::folder("images", "Images", None);
        assert_eq!(
            ItemAction::for_item(&folder),
            vec![ItemAction::Rename, ItemAction::Move, ItemAction::Delete]
        );
    }

    #[test]
    fn files_offer_every_action() {
        let file = Item::file("img1", "Vacation.jpg", "jpg", "4.2 MB", "Jul 8, 2023", None);
        let actions = ItemAction::for_item(&file);
        assert_eq!(actions.first(), Some(&ItemAction::Download));
        assert_eq!(actions.len(), 4);
        assert!(actions.last().is_some_and(|a| a.is_destructive()));
    }

    #[test]
    fn menu_selection_is_clamped() {
        let mut menu = ActionMenu::new(&Item::folder("images", "Images", None));
        menu.select_prev();
        assert_eq!(menu.selected_action(), Some(ItemAction::Rename));
        for _ in 0..10 {
            menu.select_next();
        }
        assert_eq!(menu.selected_action(), Some(ItemAction::Delete));
    }
}
