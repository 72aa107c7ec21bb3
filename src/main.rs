use macroquad::prelude::*;
use life3d::{Camera, Controller, SimConfig, input, rendering};
use std::ops::ControlFlow;
use std::path::Path;

/// Environment variable naming an optional JSON config file
const CONFIG_ENV: &str = "LIFE3D_CONFIG";

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life 3D".to_owned(),
        window_width: 1200,
        window_height: 800,
        window_resizable: true,
        sample_count: 4,
        ..Default::default()
    }
}

fn load_config() -> life3d::Result<SimConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            log::info!("loading config from {}", Path::new(&path).display());
            SimConfig::load(Path::new(&path))
        }
        None => Ok(SimConfig::default()),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut controller = match load_config().and_then(|config| Controller::new(&config)) {
        Ok(controller) => controller,
        Err(err) => {
            log::error!("startup failed: {err}");
            std::process::exit(1);
        }
    };
    let mut camera = Camera::new();
    let dims = controller.grid().dimensions();
    let pan_step = dims.columns as f32 * rendering::VOXEL_SIZE / 10.0;

    loop {
        // Process input
        let quit = input::poll_commands()
            .into_iter()
            .any(|command| controller.apply(command) == ControlFlow::Break(()));
        if quit {
            break;
        }
        input::handle_camera(&mut camera, pan_step);

        // Update simulation
        controller.update(get_frame_time());

        // Render
        let status = controller.status();
        clear_background(rendering::BACKGROUND);
        rendering::draw_grid(controller.grid(), status.mode, &camera);
        rendering::draw_hud(&status, controller.algorithm());

        next_frame().await;
    }
}
