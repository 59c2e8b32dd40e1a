//! One simulation step
//!
//! Collision check, brick scoring, win/loss detection, then ball movement.
//! A tick only does work while the phase is `Running`; everything else is a
//! no-op, so a stray tick after the round ended changes nothing.

use super::collision::overlapping_entities;
use super::entity::EntityKind;
use super::state::{GamePhase, GameState};
use crate::consts::BRICK_SCORE;
use crate::platform::Surface;

/// What the tick did, so the loop owner knows what to schedule next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running (paused or no round in progress)
    Skipped,
    /// Ball moved, schedule the next tick
    Continue,
    /// Last brick destroyed
    Won,
    /// Ball fell out, lives remain: schedule a respawn
    LifeLost,
    /// Ball fell out with no lives left
    GameOver,
}

/// Advance the running round by one step
pub fn tick<S: Surface + ?Sized>(state: &mut GameState, surface: &mut S) -> TickOutcome {
    if state.phase != GamePhase::Running {
        return TickOutcome::Skipped;
    }
    let Some(board) = state.board.as_mut() else {
        panic!("running without a board");
    };
    state.ticks += 1;

    let overlaps = overlapping_entities(&*surface, board);
    let bricks_touched = overlaps.iter().filter(|o| o.kind == EntityKind::Brick).count() as u64;
    state.score += bricks_touched * BRICK_SCORE;
    board.resolve_collisions(surface, &overlaps);

    let Some(ball) = board.ball.as_mut() else {
        panic!("running without a ball");
    };
    let playfield = surface.size();

    if board.bricks.is_empty() {
        ball.freeze();
        state.phase = GamePhase::Won;
        log::info!("All bricks cleared, score {}", state.score);
        return TickOutcome::Won;
    }

    if ball.position().bottom() >= playfield.y {
        ball.freeze();
        state.lives -= 1;
        if state.lives < 0 {
            state.phase = GamePhase::GameOver;
            log::info!("Game over, score {}", state.score);
            return TickOutcome::GameOver;
        }
        state.phase = GamePhase::Respawning;
        log::info!("Ball lost, {} lives left", state.lives);
        return TickOutcome::LifeLost;
    }

    ball.update(surface, playfield.x);
    TickOutcome::Continue
}
