//! The ball: moves diagonally, bounces off walls and whatever it overlaps

use glam::Vec2;

use super::collision::Overlap;
use super::entity::Entity;
use super::geometry::BoundingBox;
use crate::consts::*;
use crate::platform::{Color, ShapeId, ShapeKind, Style, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub entity: Entity,
    /// Unit steps per axis, each component is ±1
    pub direction: Vec2,
    /// Distance per tick. `None` once the round has ended (ball frozen).
    pub speed: Option<f32>,
}

impl Ball {
    /// Spawn a ball centred on `center`, heading up and to the right
    pub fn spawn<S: Surface + ?Sized>(surface: &mut S, center: Vec2, speed_multiplier: f32) -> Self {
        let bounds = BoundingBox::from_center(center, Vec2::splat(BALL_RADIUS * 2.0));
        let entity = Entity::spawn(surface, ShapeKind::Oval, bounds, Style::filled(Color::WHITE));
        Self {
            entity,
            direction: Vec2::new(1.0, -1.0),
            speed: Some(BALL_BASE_SPEED * speed_multiplier),
        }
    }

    pub fn shape(&self) -> ShapeId {
        self.entity.shape()
    }

    pub fn position(&self) -> BoundingBox {
        self.entity.position()
    }

    pub fn is_frozen(&self) -> bool {
        self.speed.is_none()
    }

    /// Stop the ball for good (round over)
    pub fn freeze(&mut self) {
        self.speed = None;
    }

    /// Bounce off the side and top walls, then advance one step.
    ///
    /// The bottom wall is open: falling past it is the caller's business.
    pub fn update<S: Surface + ?Sized>(&mut self, surface: &mut S, playfield_width: f32) {
        let Some(speed) = self.speed else {
            panic!("update on frozen ball {:?}", self.shape());
        };

        let pos = self.position();
        if pos.left() <= 0.0 || pos.right() >= playfield_width {
            self.direction.x = -self.direction.x;
        }
        if pos.top() <= 0.0 {
            self.direction.y = -self.direction.y;
        }

        self.entity.translate(surface, self.direction * speed);
    }

    /// Resolve the bounce against everything overlapping the ball this tick.
    ///
    /// Returns the handles of overlapped entities with hit behavior (bricks),
    /// each exactly once, in overlap order.
    ///
    /// Reflection table:
    /// - several overlaps: flip vertical
    /// - one overlap, ball centre right of its right edge: head right
    /// - one overlap, ball centre left of its left edge: head left
    /// - one overlap otherwise: flip vertical
    pub fn collide(&mut self, overlaps: &[Overlap]) -> Vec<ShapeId> {
        let x = self.position().center().x;

        match overlaps {
            [] => {}
            [single] => {
                let other = single.bounds;
                if x > other.right() {
                    self.direction.x = 1.0;
                } else if x < other.left() {
                    self.direction.x = -1.0;
                } else {
                    self.direction.y = -self.direction.y;
                }
            }
            _ => self.direction.y = -self.direction.y,
        }

        overlaps
            .iter()
            .filter(|o| o.kind.has_hit_behavior())
            .map(|o| o.shape)
            .collect()
    }
}
