//! Brick Breaker entry point
//!
//! Runs a headless round on the in-memory canvas with the autopilot at the
//! controls, then prints the round summary as one JSON line.

use std::path::Path;

use brick_breaker::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use brick_breaker::demo::Autopilot;
use brick_breaker::platform::Canvas;
use brick_breaker::{Game, Settings};

/// Environment variable naming an optional JSON settings file
const SETTINGS_ENV: &str = "BRICK_BREAKER_SETTINGS";
/// Environment variable selecting the preset ("easy", "medium", "hard")
const DIFFICULTY_ENV: &str = "BRICK_BREAKER_DIFFICULTY";

fn main() {
    env_logger::init();

    let mut settings = match std::env::var_os(SETTINGS_ENV) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    if let Ok(name) = std::env::var(DIFFICULTY_ENV) {
        settings.override_difficulty(&name);
    }
    log::info!(
        "Brick Breaker (headless) starting on {}",
        settings.difficulty.as_str()
    );

    let canvas = Canvas::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);
    let mut game = Game::new(canvas, settings.clone());
    let mut pilot = Autopilot::new(settings.demo_seed);

    game.select_difficulty(settings.difficulty);
    for _ in 0..settings.demo_max_ticks {
        for event in pilot.inputs(game.state()) {
            game.handle_input(event);
        }
        game.advance(settings.tick_interval_ms);
        if game.state().is_round_over() {
            break;
        }
    }

    let summary = game.summary();
    if !game.state().is_round_over() {
        log::warn!("Demo stopped after {} ticks without a result", summary.ticks);
    }
    match serde_json::to_string(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize summary: {}", e),
    }
}
