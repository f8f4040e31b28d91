// src/app/mod.rs
//! Application module - contains navigation state and application logic.

pub mod navigation;
pub mod overlay;
pub mod state;

// Re-export the App struct
pub use navigation::{Breadcrumb, Category, NavigationState, ViewMode};
pub use state::App;
