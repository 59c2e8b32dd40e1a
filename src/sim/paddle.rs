//! The player's paddle

use glam::Vec2;

use super::entity::Entity;
use super::geometry::BoundingBox;
use crate::consts::*;
use crate::platform::{Color, ShapeId, ShapeKind, Style, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub entity: Entity,
    pub width: f32,
    /// Ball riding the paddle before launch
    pub carrying: Option<ShapeId>,
}

impl Paddle {
    pub fn spawn<S: Surface + ?Sized>(surface: &mut S, center: Vec2, width_multiplier: f32) -> Self {
        let width = PADDLE_BASE_WIDTH * width_multiplier;
        let bounds = BoundingBox::from_center(center, Vec2::new(width, PADDLE_HEIGHT));
        let entity = Entity::spawn(surface, ShapeKind::Rectangle, bounds, Style::filled(Color::AMBER));
        Self {
            entity,
            width,
            carrying: None,
        }
    }

    pub fn shape(&self) -> ShapeId {
        self.entity.shape()
    }

    pub fn position(&self) -> BoundingBox {
        self.entity.position()
    }

    pub fn carry(&mut self, ball: ShapeId) {
        self.carrying = Some(ball);
    }

    /// Let go of the carried ball (launch)
    pub fn release(&mut self) -> Option<ShapeId> {
        self.carrying.take()
    }

    /// Slide horizontally by `offset` if the paddle stays within
    /// `[0, playfield_width]`. Returns whether it moved.
    pub fn shift<S: Surface + ?Sized>(&mut self, surface: &mut S, offset: f32, playfield_width: f32) -> bool {
        let pos = self.position();
        if pos.left() + offset >= 0.0 && pos.right() + offset <= playfield_width {
            self.entity.translate(surface, Vec2::new(offset, 0.0));
            true
        } else {
            false
        }
    }
}
