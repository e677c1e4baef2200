mod config;
mod engine;
mod geometry;
mod helper;
mod partition;
mod renderer;
mod user_interface;

use anyhow::Context;
use engine::{engine::Engine, new_visualization, settings::Settings};
use helper::{anyhow_panic::log_anyhow_error_and_sources, logger::init_logger};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use renderer::framebuffer::Framebuffer;
use std::{env, path::PathBuf, process::ExitCode};
use user_interface::window::MinifbWindow;

fn main() -> ExitCode {
    if let Err(e) = init_logger() {
        eprintln!("failed to initialize logger: {}", e);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_anyhow_error_and_sources(&e, "run");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let scene_kind = scene_kind_from_env();
    info!("building {:?} scene...", scene_kind);
    let visualization = new_visualization(scene_kind).context("building scene geometry")?;
    let mut engine = Engine::new(visualization, Settings::default());

    if let Some(path) = env::var_os(config::ENV::SNAPSHOT) {
        let path = PathBuf::from(path);
        let mut framebuffer = Framebuffer::new(config::SCREEN_SIZE);
        engine.render(&mut framebuffer)?;
        framebuffer.save_png(&path)?;
        info!("saved snapshot to {}", path.display());
        return Ok(());
    }

    let mut window = MinifbWindow::new(config::APP_NAME, config::SCREEN_SIZE)?;
    engine.run(&mut window)
}

fn scene_kind_from_env() -> config::SceneKind {
    let Ok(value) = env::var(config::ENV::SCENE) else {
        return config::SceneKind::default();
    };
    config::SceneKind::from_env_value(&value).unwrap_or_else(|| {
        warn!(
            "unknown {} value '{}'. using {:?}",
            config::ENV::SCENE,
            value,
            config::SceneKind::default()
        );
        config::SceneKind::default()
    })
}
