//! Menus, HUD and summary screens
//!
//! Everything here is text and plain rectangles drawn through `Surface`.
//! Clickable regions are tracked as `Button`s so pointer clicks can be
//! mapped back to actions.

use glam::Vec2;

use crate::platform::{Color, ShapeId, ShapeKind, Style, Surface};
use crate::settings::Difficulty;
use crate::sim::{BoundingBox, GameState};

/// What a click on a button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    SelectDifficulty(Difficulty),
    ReturnHome,
}

/// A clickable region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub bounds: BoundingBox,
    pub action: ButtonAction,
}

/// Handles of the on-screen text the game updates in place
#[derive(Debug, Clone, Default)]
pub struct Ui {
    buttons: Vec<Button>,
    lives_text: Option<ShapeId>,
    score_text: Option<ShapeId>,
    launch_prompt: Option<ShapeId>,
    pause_hint: Option<ShapeId>,
    pause_overlay: Vec<ShapeId>,
}

const TITLE_SIZE: u16 = 40;
const HUD_SIZE: u16 = 15;
const BUTTON_SIZE: u16 = 17;

fn draw_text<S: Surface + ?Sized>(surface: &mut S, at: Vec2, text: impl Into<String>, size: u16) -> ShapeId {
    surface.create_shape(ShapeKind::Text, BoundingBox::point(at), Style::text(text, size))
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Action of the button under `point`, if any
    pub fn button_at(&self, point: Vec2) -> Option<ButtonAction> {
        self.buttons
            .iter()
            .find(|b| b.bounds.contains(point))
            .map(|b| b.action)
    }

    /// Forget every handle (the surface has been cleared)
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn add_button<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        bounds: BoundingBox,
        label: &str,
        action: ButtonAction,
    ) {
        surface.create_shape(ShapeKind::Rectangle, bounds, Style::filled(Color::AMBER));
        let size = if matches!(action, ButtonAction::ReturnHome) { 14 } else { BUTTON_SIZE };
        draw_text(surface, bounds.center(), label, size);
        self.buttons.push(Button { bounds, action });
    }

    /// Clear the surface and draw the difficulty menu
    pub fn show_difficulty_select<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        self.reset();
        let cx = surface.size().x / 2.0;

        draw_text(surface, Vec2::new(cx, 150.0), "Select Difficulty", 30);
        for (i, difficulty) in Difficulty::ALL.into_iter().enumerate() {
            let top = 250.0 + i as f32 * 70.0;
            let bounds = BoundingBox::new(cx - 150.0, top, cx + 150.0, top + 50.0);
            self.add_button(
                surface,
                bounds,
                difficulty.as_str(),
                ButtonAction::SelectDifficulty(difficulty),
            );
        }
    }

    /// Draw (or refresh) the HUD and the pre-launch prompts
    pub fn show_round<S: Surface + ?Sized>(&mut self, surface: &mut S, state: &GameState) {
        self.buttons.clear();
        self.refresh_hud(surface, state);

        let size = surface.size();
        let cx = size.x / 2.0;
        self.hide_launch_prompt(surface);
        self.pause_hint = Some(draw_text(
            surface,
            Vec2::new(cx, 500.0),
            "Press \"P\" to Pause/Unpause the Game",
            HUD_SIZE,
        ));
        self.launch_prompt = Some(draw_text(
            surface,
            Vec2::new(cx, size.y * 0.5 + 10.0),
            "Press Space to start",
            TITLE_SIZE,
        ));
    }

    /// Update lives and score, creating the text on first use
    pub fn refresh_hud<S: Surface + ?Sized>(&mut self, surface: &mut S, state: &GameState) {
        let width = surface.size().x;
        let lives = format!("Lives: {}", state.lives);
        let score = format!("Score: {}", state.score);

        match self.lives_text {
            Some(id) => surface.set_style(id, Style::text(lives, HUD_SIZE)),
            None => self.lives_text = Some(draw_text(surface, Vec2::new(100.0, 30.0), lives, HUD_SIZE)),
        }
        match self.score_text {
            Some(id) => surface.set_style(id, Style::text(score, HUD_SIZE)),
            None => {
                self.score_text = Some(draw_text(surface, Vec2::new(width - 100.0, 30.0), score, HUD_SIZE))
            }
        }
    }

    /// Remove the launch prompt and pause hint
    pub fn hide_launch_prompt<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for id in [self.launch_prompt.take(), self.pause_hint.take()].into_iter().flatten() {
            surface.delete_shape(id);
        }
    }

    pub fn show_pause<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.hide_pause(surface);
        let cx = surface.size().x / 2.0;
        self.pause_overlay = vec![
            draw_text(surface, Vec2::new(cx, 300.0), "PAUSED", 50),
            draw_text(surface, Vec2::new(cx, 370.0), "Press \"P\" to continue", 20),
        ];
    }

    pub fn hide_pause<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for id in self.pause_overlay.drain(..) {
            surface.delete_shape(id);
        }
    }

    /// Win summary: difficulty and score, plus a way back to the menu
    pub fn show_win<S: Surface + ?Sized>(&mut self, surface: &mut S, difficulty: Difficulty, score: u64) {
        self.show_summary(
            surface,
            &[
                "You Win!".to_string(),
                format!("Difficulty: {}", difficulty.as_str()),
                format!("Score: {score}"),
            ],
        );
    }

    /// Game-over summary: final score, plus a way back to the menu
    pub fn show_game_over<S: Surface + ?Sized>(&mut self, surface: &mut S, score: u64) {
        self.show_summary(surface, &["Game Over!".to_string(), format!("Score: {score}")]);
    }

    fn show_summary<S: Surface + ?Sized>(&mut self, surface: &mut S, lines: &[String]) {
        surface.clear();
        self.reset();
        let cx = surface.size().x / 2.0;

        let mut y = 200.0;
        for line in lines {
            draw_text(surface, Vec2::new(cx, y), line.as_str(), TITLE_SIZE);
            y += 50.0;
        }
        let bounds = BoundingBox::new(cx - 75.0, y, cx + 75.0, y + 50.0);
        self.add_button(surface, bounds, "Return Home", ButtonAction::ReturnHome);
    }
}
