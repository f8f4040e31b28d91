// src/main.rs
use std::fs::{self, File};

use anyhow::Result;
use simplelog::{Config as LogFormat, WriteLogger};

use drive_browser::{app::App, config::Config, drive::Drive, ui};

fn init_logging(config: &Config) {
    let path = config.log.file_path();
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    // Raw mode owns the terminal, so log lines go to a file
    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(config.log.level_filter(), LogFormat::default(), log_file);
    }
}

fn main() -> Result<()> {
    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&config);
    if let Err(e) = &loaded {
        log::warn!("{e:#}; using default configuration");
    }
    log::info!(
        "starting in {:?} view, category {}",
        config.view.mode,
        config.view.category
    );

    ui::run(App::new(Drive::sample(), &config))
}
