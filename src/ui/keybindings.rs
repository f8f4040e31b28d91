// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::navigation::Category;

/// Map digit keys to a category tab.
pub fn map_key_to_category(k: &KeyEvent) -> Option<Category> {
    if let KeyCode::Char(c) = k.code {
        match c {
            '1' => Some(Category::All),
            '2' => Some(Category::Folders),
            '3' => Some(Category::Files),
            _ => None,
        }
    } else {
        None
    }
}

/// Actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationAction {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Back,
    Home,
    ToggleView,
    NextCategory,
    PrevCategory,
    SelectCategory(Category),
    OpenMenu,
    OpenNewDialog,
    Close,
    Quit,
    None,
}

/// Convert a key event to a navigation action.
pub fn key_to_action(key: &KeyEvent) -> NavigationAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => NavigationAction::Quit,
            _ => NavigationAction::None,
        };
    }

    if let Some(category) = map_key_to_category(key) {
        return NavigationAction::SelectCategory(category);
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
        KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
        KeyCode::Left => NavigationAction::Left,
        KeyCode::Right => NavigationAction::Right,
        KeyCode::Enter => NavigationAction::Enter,
        KeyCode::Backspace | KeyCode::Char('h') => NavigationAction::Back,
        KeyCode::Home | KeyCode::Char('~') => NavigationAction::Home,
        KeyCode::Char('v') => NavigationAction::ToggleView,
        KeyCode::Tab => NavigationAction::NextCategory,
        KeyCode::BackTab => NavigationAction::PrevCategory,
        KeyCode::Char('m') => NavigationAction::OpenMenu,
        KeyCode::Char('n') => NavigationAction::OpenNewDialog,
        KeyCode::Esc => NavigationAction::Close,
        KeyCode::Char('q') => NavigationAction::Quit,
        _ => NavigationAction::None,
    }
}
