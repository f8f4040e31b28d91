// src/ui/widgets/mod.rs
//! Custom widgets for the drive browser UI.

pub mod breadcrumbs;
pub mod category_tabs;
pub mod header;
pub mod item_grid;
pub mod item_list;
pub mod popups;
pub mod sidebar;
pub mod status_bar;

// Re-export widget rendering functions
pub use breadcrumbs::{breadcrumb_hitboxes, render_breadcrumbs, view_mode_hitboxes};
pub use category_tabs::{render_category_tabs, tab_hitboxes};
pub use header::render_header;
pub use item_grid::{grid_card_rects, render_item_grid};
pub use item_list::{list_row_hitboxes, render_item_list};
pub use popups::{render_action_menu, render_upload_dialog};
pub use sidebar::{home_entry_area, render_sidebar};
pub use status_bar::render_status_bar;
