// src/drive/mod.rs
//! Drive module - the in-memory folder and file hierarchy.

pub mod dataset;
pub mod item;

// Re-export commonly used types
pub use dataset::{Drive, ROOT_ID, ROOT_NAME};
pub use item::{FileCategory, Item, ItemKind};
