//! Bricks: static rectangles that take one to three hits

use glam::Vec2;

use super::entity::Entity;
use super::geometry::BoundingBox;
use crate::consts::{BRICK_HEIGHT, BRICK_WIDTH};
use crate::platform::{Color, ShapeId, ShapeKind, Style, Surface};

/// Outcome of a single hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickHit {
    Cracked { remaining: u8 },
    Destroyed,
}

/// Fill color for a given remaining hit-count
pub fn color_for_hits(hits: u8) -> Color {
    match hits {
        3 => Color::LIME,
        2 => Color::SKY_BLUE,
        1 => Color::BRIGHT_RED,
        _ => panic!("no brick color for hit-count {hits}"),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub entity: Entity,
    hits: u8,
}

impl Brick {
    pub fn spawn<S: Surface + ?Sized>(surface: &mut S, center: Vec2, hits: u8) -> Self {
        assert!((1..=3).contains(&hits), "brick hit-count {hits} outside 1..=3");
        let bounds = BoundingBox::from_center(center, Vec2::new(BRICK_WIDTH, BRICK_HEIGHT));
        let entity = Entity::spawn(
            surface,
            ShapeKind::Rectangle,
            bounds,
            Style::filled(color_for_hits(hits)),
        );
        Self { entity, hits }
    }

    pub fn shape(&self) -> ShapeId {
        self.entity.shape()
    }

    pub fn position(&self) -> BoundingBox {
        self.entity.position()
    }

    pub fn hits(&self) -> u8 {
        self.hits
    }

    /// Take one hit: recolor, or delete when the count reaches zero.
    /// Hitting a destroyed brick panics.
    pub fn hit<S: Surface + ?Sized>(&mut self, surface: &mut S) -> BrickHit {
        assert!(self.hits > 0, "hit on destroyed brick {:?}", self.shape());
        self.hits -= 1;
        if self.hits == 0 {
            self.entity.delete(surface);
            BrickHit::Destroyed
        } else {
            self.entity.restyle(surface, Style::filled(color_for_hits(self.hits)));
            BrickHit::Cracked {
                remaining: self.hits,
            }
        }
    }
}
