// src/lib.rs
//! Drive Browser - a terminal browser over an in-memory drive.
//!
//! This library provides the dataset, navigation state and terminal UI.

pub mod app;
pub mod config;
pub mod drive;
pub mod ui;
