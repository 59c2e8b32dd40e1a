//! Event loop owner
//!
//! `Game` is the one place that holds the timer. Input events and timer
//! firings are handled one at a time, each running to completion before the
//! next, so the simulation never sees overlapping ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PADDLE_STEP;
use crate::platform::{InputEvent, Key, Surface, Timer, TimerAction};
use crate::settings::{Difficulty, Settings};
use crate::sim::{GamePhase, GameState, TickOutcome, tick};
use crate::ui::{ButtonAction, Ui};

/// End-of-run report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub phase: GamePhase,
    pub difficulty: Option<Difficulty>,
    pub score: u64,
    pub lives: i32,
    pub ticks: u64,
    pub elapsed_ms: u64,
}

pub struct Game<S: Surface> {
    surface: S,
    state: GameState,
    timer: Timer,
    ui: Ui,
    settings: Settings,
}

impl<S: Surface> Game<S> {
    /// Start at the difficulty menu
    pub fn new(mut surface: S, settings: Settings) -> Self {
        let mut ui = Ui::new();
        ui.show_difficulty_select(&mut surface);
        Self {
            surface,
            state: GameState::new(),
            timer: Timer::new(),
            ui,
            settings,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn ui(&self) -> &Ui {
        &self.ui
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            phase: self.state.phase,
            difficulty: self.state.difficulty,
            score: self.state.score,
            lives: self.state.lives,
            ticks: self.state.ticks,
            elapsed_ms: self.timer.now_ms(),
        }
    }

    /// Handle one input event
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(Key::Left) => {
                self.state.move_paddle(&mut self.surface, -PADDLE_STEP);
            }
            InputEvent::KeyDown(Key::Right) => {
                self.state.move_paddle(&mut self.surface, PADDLE_STEP);
            }
            InputEvent::KeyDown(Key::Space) => self.launch(),
            InputEvent::KeyDown(Key::Pause) => self.toggle_pause(),
            InputEvent::Click(point) => self.click(point),
        }
    }

    fn click(&mut self, point: Vec2) {
        match self.ui.button_at(point) {
            Some(ButtonAction::SelectDifficulty(difficulty)) => self.select_difficulty(difficulty),
            Some(ButtonAction::ReturnHome) => self.return_home(),
            None => {}
        }
    }

    /// Set up a new round on `difficulty`. Only honored at the menu.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.state.phase != GamePhase::DifficultySelect {
            log::warn!("Difficulty selection ignored in {:?}", self.state.phase);
            return;
        }
        log::info!("Difficulty selected: {}", difficulty.as_str());
        self.surface.clear();
        self.ui = Ui::new();
        self.state.setup_round(&mut self.surface, difficulty);
        self.ui.show_round(&mut self.surface, &self.state);
    }

    fn return_home(&mut self) {
        self.timer.cancel();
        self.state.return_home(&mut self.surface);
        self.ui.show_difficulty_select(&mut self.surface);
    }

    fn launch(&mut self) {
        if self.state.launch() {
            self.ui.hide_launch_prompt(&mut self.surface);
            self.run_tick();
        }
    }

    fn toggle_pause(&mut self) {
        match self.state.toggle_pause() {
            Some(true) => {
                // Future ticks stop here; resume re-arms explicitly
                self.timer.cancel();
                self.ui.show_pause(&mut self.surface);
                log::info!("Paused");
            }
            Some(false) => {
                self.ui.hide_pause(&mut self.surface);
                log::info!("Resumed");
                self.run_tick();
            }
            None => log::debug!("Pause ignored in {:?}", self.state.phase),
        }
    }

    /// Let `elapsed_ms` of virtual time pass, firing every timer that comes
    /// due on the way. Returns how many fired.
    pub fn advance(&mut self, elapsed_ms: u64) -> usize {
        let until = self.timer.now_ms() + elapsed_ms;
        let mut fired = 0;
        while let Some(action) = self.timer.pop_due(until) {
            match action {
                TimerAction::Tick => self.run_tick(),
                TimerAction::Respawn => self.respawn(),
            }
            fired += 1;
        }
        self.timer.set_now(until);
        fired
    }

    fn run_tick(&mut self) {
        match tick(&mut self.state, &mut self.surface) {
            TickOutcome::Skipped => {}
            TickOutcome::Continue => {
                self.ui.refresh_hud(&mut self.surface, &self.state);
                self.timer
                    .schedule_after(self.settings.tick_interval_ms, TimerAction::Tick);
            }
            TickOutcome::LifeLost => {
                self.ui.refresh_hud(&mut self.surface, &self.state);
                self.timer
                    .schedule_after(self.settings.respawn_delay_ms, TimerAction::Respawn);
            }
            TickOutcome::Won => {
                let difficulty = self.state.difficulty.unwrap_or_default();
                let score = self.state.score;
                self.state.clear_board(&mut self.surface);
                self.ui.show_win(&mut self.surface, difficulty, score);
            }
            TickOutcome::GameOver => {
                let score = self.state.score;
                self.state.clear_board(&mut self.surface);
                self.ui.show_game_over(&mut self.surface, score);
            }
        }
    }

    fn respawn(&mut self) {
        self.state.respawn(&mut self.surface);
        self.ui.show_round(&mut self.surface, &self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::Canvas;
    use crate::sim::Brick;

    fn new_game() -> Game<Canvas> {
        Game::new(Canvas::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT), Settings::default())
    }

    fn started_game() -> Game<Canvas> {
        let mut game = new_game();
        game.handle_input(InputEvent::Click(Vec2::new(400.0, 275.0)));
        game.handle_input(InputEvent::KeyDown(Key::Space));
        game
    }

    fn place_ball(game: &mut Game<Canvas>, center: Vec2) {
        let ball = game.state.board.as_mut().unwrap().ball.as_mut().unwrap();
        let delta = center - ball.position().center();
        ball.entity.translate(&mut game.surface, delta);
    }

    fn ball_center(game: &Game<Canvas>) -> Vec2 {
        game.state.board.as_ref().unwrap().ball.as_ref().unwrap().position().center()
    }

    #[test]
    fn test_menu_click_starts_round() {
        let mut game = new_game();
        assert!(game.surface().has_text("Select Difficulty"));

        game.handle_input(InputEvent::Click(Vec2::new(400.0, 415.0)));

        assert_eq!(game.state().phase, GamePhase::AwaitingLaunch);
        assert_eq!(game.state().difficulty, Some(Difficulty::Hard));
        assert!(game.surface().has_text("Press Space to start"));
        assert!(game.surface().has_text("Lives: 3"));
        assert!(game.surface().has_text("Score: 0"));
        assert!(!game.surface().has_text("Select Difficulty"));
        assert!(!game.timer().is_pending());
    }

    #[test]
    fn test_launch_ticks_immediately() {
        let game = started_game();
        assert_eq!(game.state().phase, GamePhase::Running);
        assert_eq!(game.state().ticks, 1);
        assert_eq!(game.timer().pending(), Some(TimerAction::Tick));
        assert!(!game.surface().has_text("Press Space to start"));
        assert_eq!(ball_center(&game), Vec2::new(405.0, 425.0));
    }

    #[test]
    fn test_ticks_every_interval() {
        let mut game = started_game();
        assert_eq!(game.advance(49), 0);
        assert_eq!(game.advance(1), 1);
        assert_eq!(game.advance(500), 10);
        assert_eq!(game.state().ticks, 12);
    }

    #[test]
    fn test_pause_stops_and_resume_rearms() {
        let mut game = started_game();
        game.handle_input(InputEvent::KeyDown(Key::Pause));
        assert!(game.state().is_paused());
        assert!(game.surface().has_text("PAUSED"));
        assert!(!game.timer().is_pending());

        let before = ball_center(&game);
        assert_eq!(game.advance(1000), 0);
        assert_eq!(ball_center(&game), before);

        // Movement keys are ignored while paused
        let paddle_before = game.state.board.as_ref().unwrap().paddle.position();
        game.handle_input(InputEvent::KeyDown(Key::Left));
        assert_eq!(game.state.board.as_ref().unwrap().paddle.position(), paddle_before);

        game.handle_input(InputEvent::KeyDown(Key::Pause));
        assert_eq!(game.state().phase, GamePhase::Running);
        assert!(!game.surface().has_text("PAUSED"));
        assert_ne!(ball_center(&game), before);
        assert_eq!(game.timer().pending(), Some(TimerAction::Tick));
    }

    #[test]
    fn test_pause_ignored_before_launch() {
        let mut game = new_game();
        game.handle_input(InputEvent::Click(Vec2::new(400.0, 275.0)));
        game.handle_input(InputEvent::KeyDown(Key::Pause));
        assert_eq!(game.state().phase, GamePhase::AwaitingLaunch);
        assert!(!game.surface().has_text("PAUSED"));
    }

    #[test]
    fn test_life_loss_respawns_after_delay() {
        let mut game = started_game();
        place_ball(&mut game, Vec2::new(100.0, PLAYFIELD_HEIGHT));
        game.advance(TICK_INTERVAL_MS);

        assert_eq!(game.state().phase, GamePhase::Respawning);
        assert_eq!(game.state().lives, 2);
        assert_eq!(game.timer().pending(), Some(TimerAction::Respawn));

        // Pause is suppressed while resetting
        game.handle_input(InputEvent::KeyDown(Key::Pause));
        assert_eq!(game.state().phase, GamePhase::Respawning);

        game.advance(RESPAWN_DELAY_MS - 1);
        assert_eq!(game.state().phase, GamePhase::Respawning);
        game.advance(1);
        assert_eq!(game.state().phase, GamePhase::AwaitingLaunch);
        assert!(game.surface().has_text("Lives: 2"));
        assert!(game.surface().has_text("Press Space to start"));
        assert!(!game.timer().is_pending());

        let board = game.state().board.as_ref().unwrap();
        assert_eq!(board.paddle.carrying, Some(board.ball.as_ref().unwrap().shape()));
    }

    #[test]
    fn test_game_over_and_return_home() {
        let mut game = started_game();
        game.state.lives = 0;
        game.state.score = 70;
        place_ball(&mut game, Vec2::new(100.0, PLAYFIELD_HEIGHT));
        game.advance(TICK_INTERVAL_MS);

        assert_eq!(game.state().phase, GamePhase::GameOver);
        assert_eq!(game.state().lives, -1);
        assert!(!game.timer().is_pending());
        assert!(game.surface().has_text("Game Over!"));
        assert!(game.surface().has_text("Score: 70"));

        game.handle_input(InputEvent::Click(Vec2::new(400.0, 325.0)));
        assert_eq!(game.state().phase, GamePhase::DifficultySelect);
        assert!(game.surface().has_text("Select Difficulty"));

        // A new round starts with full lives
        game.handle_input(InputEvent::Click(Vec2::new(400.0, 345.0)));
        assert_eq!(game.state().lives, STARTING_LIVES);
        assert_eq!(game.state().difficulty, Some(Difficulty::Medium));
    }

    #[test]
    fn test_win_screen_shown_once() {
        let mut game = started_game();
        {
            let board = game.state.board.as_mut().unwrap();
            for (_, mut brick) in std::mem::take(&mut board.bricks) {
                brick.entity.delete(&mut game.surface);
            }
            board.add_brick(Brick::spawn(&mut game.surface, Vec2::new(400.0, 300.0), 1));
        }
        place_ball(&mut game, Vec2::new(400.0, 320.0));
        game.advance(TICK_INTERVAL_MS);

        assert_eq!(game.state().phase, GamePhase::Won);
        assert!(game.state().board.is_none());
        assert!(game.surface().has_text("You Win!"));
        assert!(game.surface().has_text("Difficulty: Easy"));
        assert!(!game.timer().is_pending());

        let shapes = game.surface().len();
        assert_eq!(game.advance(10_000), 0);
        assert_eq!(game.surface().len(), shapes);

        let summary = game.summary();
        assert_eq!(summary.phase, GamePhase::Won);
        assert_eq!(summary.score, BRICK_SCORE);
    }

    #[test]
    fn test_summary_serializes() {
        let game = started_game();
        let json = serde_json::to_string(&game.summary()).unwrap();
        assert!(json.contains("\"phase\":\"Running\""));
        assert!(json.contains("\"difficulty\":\"Easy\""));
    }
}
