#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use anyhow::Context;
use kegtrack::{telemetry, KegTrackConfig};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config =
        KegTrackConfig::load(config_path.as_deref()).context("Failed to load configuration")?;
    telemetry::init_telemetry(&config.log_level.0)?;

    let bootstrap = app::Bootstrap::load(config).context("Failed to load outlet directories")?;

    iced::application(move || app::boot(bootstrap.clone()), app::update, app::view)
        .title("KegTrack Pro")
        .theme(|_: &app::State| iced::Theme::Light)
        .window(iced::window::Settings {
            size: iced::Size::new(420.0, 820.0),
            ..Default::default()
        })
        .run()?;

    Ok(())
}
