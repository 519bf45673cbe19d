mod frame_input;
mod game_layout;
mod ui_render;
mod ui_text;
mod window_config;

use std::env;
use std::io;
use std::time::Instant;

use fight_app::app_loop::{AppState, build_driver};
use fight_app::launch_args::{generate_runtime_seed, resolve_launch_args};
use fight_app::{config_file, journal_file};
use fight_core::TickEvent;
use frame_input::capture_frame_input;
use game_layout::{compute_frame_layout, setup_layout};
use macroquad::prelude::*;
use macroquad::window::Conf;
use taffy::TaffyTree;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use ui_render::draw_frame;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let launch = match resolve_launch_args(&args, generate_runtime_seed()) {
        Ok(launch) => launch,
        Err(err) => {
            error!(%err, "invalid command line");
            return;
        }
    };
    let default_config_path = config_file::get_default_path();
    let config = match config_file::resolve_match_config(
        launch.config_path.as_deref(),
        default_config_path.as_deref(),
    ) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "cannot start match");
            return;
        }
    };
    let journal_path = launch.journal_path.clone().or_else(journal_file::get_default_path);

    let mut run_seed = launch.seed.value();
    let mut driver = match build_driver(run_seed, config) {
        Ok(driver) => driver,
        Err(err) => {
            error!(%err, "cannot start match");
            return;
        }
    };
    info!(seed = run_seed, ?config, "match started");

    let mut app_state = AppState::new();
    app_state.begin(&driver);

    let mut taffy = TaffyTree::new();
    let layout_nodes = setup_layout(&mut taffy);
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        let dt = now.duration_since(last_frame);
        last_frame = now;

        let input = capture_frame_input();
        let event = app_state.tick(&mut driver, &input, dt);

        if let TickEvent::SceneLoaded(_) = event
            && let (Some(path), Some(journal)) = (&journal_path, driver.journal())
        {
            match journal_file::write_atomic(journal, path) {
                Ok(()) => info!(path = %path.display(), "match journal saved"),
                Err(err) => warn!(%err, path = %path.display(), "failed to save match journal"),
            }
        }

        if app_state.rematch_requested {
            run_seed = generate_runtime_seed();
            driver = match build_driver(run_seed, config) {
                Ok(next_driver) => next_driver,
                Err(err) => {
                    error!(%err, seed = run_seed, "cannot start rematch");
                    return;
                }
            };
            info!(seed = run_seed, "rematch started");
            app_state.begin(&driver);
        }

        clear_background(BLACK);
        let layout =
            compute_frame_layout(&mut taffy, &layout_nodes, screen_width(), screen_height());
        draw_frame(&app_state, driver.session(), run_seed, &layout);

        next_frame().await
    }
}
