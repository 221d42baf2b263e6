//! Ball Collision entry point
//!
//! Runs the simulation against a headless 1440x2560 (portrait phone)
//! viewport and prints the final state as JSON.
//!
//! Usage: `ball-collision [settings.json] [frames]`

use std::process::ExitCode;

use ball_collision::{FrameLoop, HeadlessHost, Settings};

const VIEWPORT_WIDTH: f64 = 1440.0;
const VIEWPORT_HEIGHT: f64 = 2560.0;
const DEFAULT_FRAMES: u64 = 600;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Ball Collision (headless) starting...");

    let mut args = std::env::args().skip(1);

    let settings = match args.next() {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };

    let frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::error!("Invalid frame count: {}", e);
            return ExitCode::FAILURE;
        }
        None => DEFAULT_FRAMES,
    };

    let mut host = HeadlessHost::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    let mut frame_loop = FrameLoop::new(settings);
    let rendered = host.run(&mut frame_loop, frames);

    if let Some(err) = frame_loop.failure() {
        log::error!("Simulation did not start: {}", err);
        return ExitCode::FAILURE;
    }
    log::info!("Rendered {} frames ({} ball draws)", rendered, host.renders);

    let Some(sim) = frame_loop.simulation() else {
        return ExitCode::FAILURE;
    };
    match serde_json::to_string_pretty(sim) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize simulation: {}", e);
            ExitCode::FAILURE
        }
    }
}
