//! Game state and the entity board
//!
//! `GameState` is owned by the event loop. Entities live on the `Board`,
//! which is rebuilt every time a difficulty is chosen and dropped when the
//! round ends.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::brick::{Brick, BrickHit};
use super::collision::Overlap;
use super::entity::EntityKind;
use super::paddle::Paddle;
use crate::consts::*;
use crate::platform::{ShapeId, Surface};
use crate::settings::Difficulty;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Menu: choose Easy, Medium or Hard
    DifficultySelect,
    /// Ball riding the paddle, waiting for the launch key
    AwaitingLaunch,
    /// Ticks are running
    Running,
    /// Ticks suspended by the player
    Paused,
    /// Life lost, new ball served after a delay
    Respawning,
    /// Every brick destroyed
    Won,
    /// Out of lives
    GameOver,
}

/// Entities of the current round, indexed by shape handle
#[derive(Debug, Clone)]
pub struct Board {
    pub paddle: Paddle,
    pub ball: Option<Ball>,
    pub bricks: BTreeMap<ShapeId, Brick>,
}

impl Board {
    pub fn new(paddle: Paddle) -> Self {
        Self {
            paddle,
            ball: None,
            bricks: BTreeMap::new(),
        }
    }

    pub fn add_brick(&mut self, brick: Brick) {
        self.bricks.insert(brick.shape(), brick);
    }

    /// Resolve a shape handle to the entity it belongs to
    pub fn lookup(&self, shape: ShapeId) -> Option<Overlap> {
        let (kind, bounds) = if shape == self.paddle.shape() {
            (EntityKind::Paddle, self.paddle.position())
        } else if let Some(brick) = self.bricks.get(&shape) {
            (EntityKind::Brick, brick.position())
        } else {
            match &self.ball {
                Some(ball) if ball.shape() == shape => (EntityKind::Ball, ball.position()),
                _ => return None,
            }
        };
        Some(Overlap { shape, kind, bounds })
    }

    /// Build the 3×7 brick grid, rows of hit-count 3, 2, 1 from the top,
    /// centred horizontally on the playfield
    pub fn lay_bricks<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let width = surface.size().x;
        let pitch = BRICK_WIDTH + BRICK_PADDING;
        let start_x = (width - BRICK_COLUMNS as f32 * pitch) / 2.0;

        for (row, &hits) in BRICK_ROW_HITS.iter().enumerate() {
            let y = BRICK_TOP_Y + row as f32 * (BRICK_HEIGHT + BRICK_PADDING);
            for col in 0..BRICK_COLUMNS {
                let x = start_x + col as f32 * pitch + BRICK_WIDTH / 2.0;
                self.add_brick(Brick::spawn(surface, Vec2::new(x, y), hits));
            }
        }
    }

    /// Replace the ball with a fresh one riding the paddle
    pub fn serve_ball<S: Surface + ?Sized>(&mut self, surface: &mut S, speed_multiplier: f32) {
        if let Some(mut old) = self.ball.take() {
            old.entity.delete(surface);
        }
        let x = self.paddle.position().center().x;
        let ball = Ball::spawn(surface, Vec2::new(x, BALL_SPAWN_Y), speed_multiplier);
        self.paddle.carry(ball.shape());
        self.ball = Some(ball);
    }

    /// Move the paddle, dragging a carried ball along
    pub fn move_paddle<S: Surface + ?Sized>(&mut self, surface: &mut S, offset: f32) -> bool {
        let width = surface.size().x;
        if !self.paddle.shift(surface, offset, width) {
            return false;
        }
        if let (Some(carried), Some(ball)) = (self.paddle.carrying, self.ball.as_mut()) {
            if ball.shape() == carried {
                ball.entity.translate(surface, Vec2::new(offset, 0.0));
            }
        }
        true
    }

    /// Bounce the ball off `overlaps` and apply a hit to every brick among
    /// them. Destroyed bricks leave the board.
    pub fn resolve_collisions<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        overlaps: &[Overlap],
    ) -> Vec<BrickHit> {
        let Some(ball) = self.ball.as_mut() else {
            return Vec::new();
        };
        let targets = ball.collide(overlaps);

        let mut outcomes = Vec::with_capacity(targets.len());
        for shape in targets {
            let Some(brick) = self.bricks.get_mut(&shape) else {
                panic!("hit on brick {shape:?} that is not on the board");
            };
            let outcome = brick.hit(surface);
            if outcome == BrickHit::Destroyed {
                log::debug!("Brick {:?} destroyed, {} left", shape, self.bricks.len() - 1);
                self.bricks.remove(&shape);
            }
            outcomes.push(outcome);
        }
        outcomes
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Chosen preset; `None` until the first selection
    pub difficulty: Option<Difficulty>,
    pub score: u64,
    /// Goes negative on the final loss
    pub lives: i32,
    /// Entities of the current round
    pub board: Option<Board>,
    /// Ticks run this round
    pub ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::DifficultySelect,
            difficulty: None,
            score: 0,
            lives: STARTING_LIVES,
            board: None,
            ticks: 0,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// A ball is in play, paused, or about to be re-served
    pub fn is_started(&self) -> bool {
        matches!(
            self.phase,
            GamePhase::Running | GamePhase::Paused | GamePhase::Respawning
        )
    }

    /// Between losing a life (or setting up) and the next launch
    pub fn is_resetting(&self) -> bool {
        matches!(self.phase, GamePhase::AwaitingLaunch | GamePhase::Respawning)
    }

    pub fn is_round_over(&self) -> bool {
        matches!(self.phase, GamePhase::Won | GamePhase::GameOver)
    }

    pub fn remaining_bricks(&self) -> usize {
        self.board.as_ref().map_or(0, |b| b.bricks.len())
    }

    /// Build a fresh round for `difficulty`: paddle, brick grid and a ball
    /// on the paddle. Score and lives start over.
    pub fn setup_round<S: Surface + ?Sized>(&mut self, surface: &mut S, difficulty: Difficulty) {
        let size = surface.size();
        let paddle = Paddle::spawn(
            surface,
            Vec2::new(size.x / 2.0, PADDLE_Y),
            difficulty.paddle_width_multiplier(),
        );
        let mut board = Board::new(paddle);
        board.lay_bricks(surface);
        board.serve_ball(surface, difficulty.ball_speed_multiplier());

        self.difficulty = Some(difficulty);
        self.board = Some(board);
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.ticks = 0;
        self.phase = GamePhase::AwaitingLaunch;
        log::info!("Round set up on {}", difficulty.as_str());
    }

    /// Serve a new ball after a lost life
    pub fn respawn<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        assert_eq!(
            self.phase,
            GamePhase::Respawning,
            "respawn outside of the respawn delay"
        );
        let multiplier = self.difficulty.unwrap_or_default().ball_speed_multiplier();
        let Some(board) = self.board.as_mut() else {
            panic!("respawn without a board");
        };
        board.serve_ball(surface, multiplier);
        self.phase = GamePhase::AwaitingLaunch;
        log::info!("Ball served, {} lives left", self.lives);
    }

    /// Detach the ball from the paddle and start ticking.
    /// Returns false when there is nothing to launch.
    pub fn launch(&mut self) -> bool {
        if self.phase != GamePhase::AwaitingLaunch {
            return false;
        }
        let Some(board) = self.board.as_mut() else {
            return false;
        };
        board.paddle.release();
        self.phase = GamePhase::Running;
        log::info!("Ball launched");
        true
    }

    /// Flip between `Running` and `Paused`.
    ///
    /// Returns the new paused flag, or `None` when pausing is not allowed
    /// (before launch, during a respawn, after the round).
    pub fn toggle_pause(&mut self) -> Option<bool> {
        if !self.is_started() || self.is_resetting() {
            return None;
        }
        let paused = !self.is_paused();
        self.phase = if paused {
            GamePhase::Paused
        } else {
            GamePhase::Running
        };
        Some(paused)
    }

    /// Move the paddle by `offset`; ignored while paused or without a board
    pub fn move_paddle<S: Surface + ?Sized>(&mut self, surface: &mut S, offset: f32) -> bool {
        if self.is_paused() || self.is_round_over() {
            return false;
        }
        match self.board.as_mut() {
            Some(board) => board.move_paddle(surface, offset),
            None => false,
        }
    }

    /// Drop every entity and wipe the surface
    pub fn clear_board<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.board = None;
        surface.clear();
    }

    /// Back to the difficulty menu
    pub fn return_home<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.clear_board(surface);
        self.phase = GamePhase::DifficultySelect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Canvas;

    fn canvas() -> Canvas {
        Canvas::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)
    }

    #[test]
    fn test_setup_round() {
        let mut canvas = canvas();
        let mut state = GameState::new();
        state.score = 120;
        state.setup_round(&mut canvas, Difficulty::Medium);

        assert_eq!(state.phase, GamePhase::AwaitingLaunch);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.remaining_bricks(), 21);

        let board = state.board.as_ref().unwrap();
        assert_eq!(board.paddle.width, 60.0);
        let ball = board.ball.as_ref().unwrap();
        assert_eq!(board.paddle.carrying, Some(ball.shape()));
        assert_eq!(ball.speed, Some(7.5));
        assert_eq!(ball.position().center(), Vec2::new(400.0, BALL_SPAWN_Y));
        // paddle + 21 bricks + ball
        assert_eq!(canvas.len(), 23);
    }

    #[test]
    fn test_brick_grid_layout() {
        let mut canvas = canvas();
        let mut state = GameState::new();
        state.setup_round(&mut canvas, Difficulty::Easy);
        let board = state.board.as_ref().unwrap();

        let mut per_hits = [0usize; 4];
        for brick in board.bricks.values() {
            per_hits[brick.hits() as usize] += 1;
        }
        assert_eq!(per_hits, [0, 7, 7, 7]);

        let lefts: Vec<f32> = board.bricks.values().map(|b| b.position().left()).collect();
        let min_left = lefts.iter().cloned().fold(f32::MAX, f32::min);
        let max_right = board
            .bricks
            .values()
            .map(|b| b.position().right())
            .fold(f32::MIN, f32::max);
        assert_eq!(min_left, 36.0);
        assert_eq!(max_right, 36.0 + 6.0 * 104.0 + 100.0);

        let top_row = board.bricks.values().filter(|b| b.hits() == 3).all(|b| b.position().center().y == 100.0);
        assert!(top_row);
    }

    #[test]
    fn test_carried_ball_follows_paddle() {
        let mut canvas = canvas();
        let mut state = GameState::new();
        state.setup_round(&mut canvas, Difficulty::Easy);

        assert!(state.move_paddle(&mut canvas, PADDLE_STEP));
        let board = state.board.as_ref().unwrap();
        assert_eq!(board.paddle.position().center().x, 415.0);
        assert_eq!(board.ball.as_ref().unwrap().position().center().x, 415.0);
    }

    #[test]
    fn test_launched_ball_stays_put_when_paddle_moves() {
        let mut canvas = canvas();
        let mut state = GameState::new();
        state.setup_round(&mut canvas, Difficulty::Easy);
        assert!(state.launch());

        state.move_paddle(&mut canvas, -PADDLE_STEP);
        let board = state.board.as_ref().unwrap();
        assert_eq!(board.paddle.carrying, None);
        assert_eq!(board.ball.as_ref().unwrap().position().center().x, 400.0);
    }

    #[test]
    fn test_pause_only_while_running() {
        let mut canvas = canvas();
        let mut state = GameState::new();
        assert_eq!(state.toggle_pause(), None);

        state.setup_round(&mut canvas, Difficulty::Easy);
        assert!(state.is_resetting());
        assert_eq!(state.toggle_pause(), None);

        state.launch();
        assert!(state.is_started());
        assert!(!state.is_resetting());
        assert_eq!(state.toggle_pause(), Some(true));
        assert!(!state.move_paddle(&mut canvas, PADDLE_STEP));
        assert_eq!(state.toggle_pause(), Some(false));
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_pause_refused_while_resetting_or_over() {
        let mut canvas = canvas();
        let mut state = GameState::new();
        state.setup_round(&mut canvas, Difficulty::Easy);
        state.launch();

        for phase in [GamePhase::Respawning, GamePhase::Won, GamePhase::GameOver] {
            state.phase = phase;
            assert_eq!(state.toggle_pause(), None, "{phase:?}");
            assert_eq!(state.phase, phase);
        }
    }

    #[test]
    fn test_respawn_replaces_ball() {
        let mut canvas = canvas();
        let mut state = GameState::new();
        state.setup_round(&mut canvas, Difficulty::Hard);
        state.launch();
        let old = state.board.as_ref().unwrap().ball.as_ref().unwrap().shape();

        state.phase = GamePhase::Respawning;
        state.respawn(&mut canvas);

        let board = state.board.as_ref().unwrap();
        let ball = board.ball.as_ref().unwrap();
        assert_ne!(ball.shape(), old);
        assert!(canvas.shape(old).is_none());
        assert_eq!(board.paddle.carrying, Some(ball.shape()));
        assert_eq!(ball.speed, Some(10.0));
        assert_eq!(state.phase, GamePhase::AwaitingLaunch);
    }

    #[test]
    fn test_resolve_collisions_hits_each_brick_once() {
        let mut canvas = canvas();
        let mut state = GameState::new();
        state.setup_round(&mut canvas, Difficulty::Easy);
        let board = state.board.as_mut().unwrap();

        let brick_shape = *board.bricks.keys().next().unwrap();
        let paddle = board.lookup(board.paddle.shape()).unwrap();
        let brick = board.lookup(brick_shape).unwrap();
        let hits_before = board.bricks[&brick_shape].hits();

        let outcomes = board.resolve_collisions(&mut canvas, &[paddle, brick]);

        assert_eq!(outcomes.len(), 1);
        assert_eq!(board.bricks[&brick_shape].hits(), hits_before - 1);
    }

    #[test]
    fn test_return_home_clears_everything() {
        let mut canvas = canvas();
        let mut state = GameState::new();
        state.setup_round(&mut canvas, Difficulty::Easy);
        state.return_home(&mut canvas);
        assert!(state.board.is_none());
        assert!(canvas.is_empty());
        assert_eq!(state.phase, GamePhase::DifficultySelect);
    }
}
