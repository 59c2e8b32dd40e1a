//! Autopilot for the headless demo
//!
//! Launches the ball when it can and chases it with the paddle, aiming a
//! random distance off the ball centre. The bounce ignores where the ball
//! lands on the paddle, so the offset only changes the game when it makes
//! the paddle miss. The offset comes from a seeded RNG, so a given seed
//! always plays the same game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::PADDLE_STEP;
use crate::platform::{InputEvent, Key};
use crate::sim::{GamePhase, GameState};

/// Most key presses sent per tick
const MAX_STEPS_PER_TICK: usize = 2;
/// Widest aim offset from the ball centre
const AIM_SPREAD: f32 = 30.0;
/// Chance per tick of picking a new aim offset
const REAIM_CHANCE: f64 = 0.05;

pub struct Autopilot {
    rng: Pcg32,
    aim: f32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            aim: 0.0,
        }
    }

    /// Key presses to send before the next tick
    pub fn inputs(&mut self, state: &GameState) -> Vec<InputEvent> {
        match state.phase {
            GamePhase::AwaitingLaunch => vec![InputEvent::KeyDown(Key::Space)],
            GamePhase::Running => self.track_ball(state),
            _ => Vec::new(),
        }
    }

    fn track_ball(&mut self, state: &GameState) -> Vec<InputEvent> {
        let Some(board) = state.board.as_ref() else {
            return Vec::new();
        };
        let Some(ball) = board.ball.as_ref() else {
            return Vec::new();
        };

        if self.rng.random_bool(REAIM_CHANCE) {
            self.aim = self.rng.random_range(-AIM_SPREAD..=AIM_SPREAD);
        }

        let target = ball.position().center().x + self.aim;
        let gap = target - board.paddle.position().center().x;
        let steps = ((gap.abs() / PADDLE_STEP) as usize).min(MAX_STEPS_PER_TICK);
        let key = if gap < 0.0 { Key::Left } else { Key::Right };
        vec![InputEvent::KeyDown(key); steps]
    }
}
