use error_iter::ErrorIter as _;
use macroquad::prelude::*;
use pixel_life::{
    Config, GameState,
    application::{Pacer, config::WINDOW_TITLE},
    input,
    rendering::{PngSnapshots, Renderer, Screen},
};

fn window_conf() -> Conf {
    let config = Config::default();
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: config.window_width() as i32,
        window_height: config.window_height() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn log_error<E: std::error::Error + 'static>(err: E) {
    log::error!("{}", err);
    for source in err.sources().skip(1) {
        log::error!("  Caused by: {}", source);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    if let Err(err) = run(Config::default()).await {
        log_error(err);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> pixel_life::Result<()> {
    log::info!(
        "Game of Life - {}x{} cells at {} ticks/s",
        config.grid_width,
        config.grid_height,
        config.fps
    );
    log::info!("Controls:");
    log::info!("  Left mouse  - Toggle cells ({:?} mode)", config.paint_mode);
    log::info!("  P           - Pause / Resume (starts paused)");
    log::info!("  Space       - Save screenshot");
    log::info!("  Q           - Quit");

    // Window close must reach the loop as an event
    prevent_quit();

    let renderer = Renderer::from_config(&config);
    let mut snapshots = PngSnapshots::new(renderer.clone(), config.snapshot_dir.clone());
    let mut state = GameState::new(&config)?;
    let mut pacer = Pacer::new(config.tick_interval());
    let mut screen = Screen;

    while state.is_running() {
        let frame = input::poll_frame();
        state.tick(&frame, &config, &mut snapshots)?;
        if !state.is_running() {
            break;
        }

        renderer.draw(&mut screen, state.grid());

        pacer.wait();
        next_frame().await;
    }

    Ok(())
}
