//! Brick Breaker - a paddle, a ball and three rows of bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state, tick)
//! - `platform`: Rendering/input/timer surface the simulation draws through
//! - `ui`: Menus, HUD and summary screens
//! - `game`: Event loop owner tying input, timer and simulation together
//! - `settings`: Difficulty presets and tunable timings
//! - `demo`: Seeded autopilot used by the headless binary

pub mod demo;
pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::{Game, RoundSummary};
pub use settings::{Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 580.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Distance travelled per tick on Easy
    pub const BALL_BASE_SPEED: f32 = 5.0;
    /// Vertical centre of a freshly spawned ball (rides just above the paddle)
    pub const BALL_SPAWN_Y: f32 = 430.0;

    /// Paddle defaults
    pub const PADDLE_BASE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_Y: f32 = 450.0;
    /// Horizontal offset applied per movement key press
    pub const PADDLE_STEP: f32 = 15.0;

    /// Brick grid
    pub const BRICK_WIDTH: f32 = 100.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_PADDING: f32 = 4.0;
    pub const BRICK_COLUMNS: usize = 7;
    /// Hit-count of each row, top to bottom
    pub const BRICK_ROW_HITS: [u8; 3] = [3, 2, 1];
    /// Centre y of the first brick row
    pub const BRICK_TOP_Y: f32 = 100.0;

    /// Points per brick hit
    pub const BRICK_SCORE: u64 = 10;
    pub const STARTING_LIVES: i32 = 3;

    /// Delay between ticks during play (ms)
    pub const TICK_INTERVAL_MS: u64 = 50;
    /// Delay before a new ball is served after a life is lost (ms)
    pub const RESPAWN_DELAY_MS: u64 = 1000;
}
