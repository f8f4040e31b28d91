// src/ui/icons.rs
//! Icon and colour mappings for drive items.

use ratatui::style::Color;

use crate::drive::{FileCategory, Item};

pub const FOLDER_ICON: &str = "\u{f07b}";
pub const FOLDER_COLOR: Color = Color::Blue;

/// Get the appropriate icon for an item.
pub fn icon_for_item(item: &Item) -> &'static str {
    if item.is_folder() {
        FOLDER_ICON
    } else {
        match item.category() {
            FileCategory::Pdf => "\u{f1c1}",
            FileCategory::Document => "\u{f1c2}",
            FileCategory::Text => "\u{f15c}",
            FileCategory::Image => "\u{f1c5}",
            FileCategory::Figma | FileCategory::Sketch => "\u{f1fc}",
            FileCategory::Other => "\u{f15b}",
        }
    }
}

/// Accent colour for an item's icon.
pub fn color_for_item(item: &Item) -> Color {
    if item.is_folder() {
        FOLDER_COLOR
    } else {
        match item.category() {
            FileCategory::Pdf => Color::Red,
            FileCategory::Document => Color::LightBlue,
            FileCategory::Text | FileCategory::Other => Color::Gray,
            FileCategory::Image => Color::Green,
            FileCategory::Figma => Color::Magenta,
            FileCategory::Sketch => Color::Rgb(255, 165, 0),
        }
    }
}
