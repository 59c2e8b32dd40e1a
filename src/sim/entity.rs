//! Base on-screen entity: a shape handle plus its cached bounding box

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::BoundingBox;
use crate::platform::{ShapeId, ShapeKind, Style, Surface};

/// What an entity is, resolved by `match` rather than by type inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Paddle,
    Brick,
    Ball,
}

impl EntityKind {
    /// Whether a collision with this entity runs its hit procedure
    pub fn has_hit_behavior(self) -> bool {
        matches!(self, EntityKind::Brick)
    }
}

/// A rigid shape on the surface
///
/// Once deleted, the entity must not be moved, restyled or queried.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    shape: ShapeId,
    bounds: BoundingBox,
    alive: bool,
}

impl Entity {
    /// Create the backing shape and wrap its handle
    pub fn spawn<S: Surface + ?Sized>(
        surface: &mut S,
        kind: ShapeKind,
        bounds: BoundingBox,
        style: Style,
    ) -> Self {
        let shape = surface.create_shape(kind, bounds, style);
        Self {
            shape,
            bounds,
            alive: true,
        }
    }

    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Current bounding box
    pub fn position(&self) -> BoundingBox {
        self.assert_alive("position");
        self.bounds
    }

    /// Translate the shape and its cached box
    pub fn translate<S: Surface + ?Sized>(&mut self, surface: &mut S, delta: Vec2) {
        self.assert_alive("move");
        surface.move_shape(self.shape, delta);
        self.bounds = self.bounds.translated(delta);
    }

    pub fn restyle<S: Surface + ?Sized>(&mut self, surface: &mut S, style: Style) {
        self.assert_alive("restyle");
        surface.set_style(self.shape, style);
    }

    /// Remove the shape from the surface and invalidate this entity
    pub fn delete<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.assert_alive("delete");
        surface.delete_shape(self.shape);
        self.alive = false;
    }

    fn assert_alive(&self, op: &str) {
        assert!(self.alive, "{op} on deleted entity {:?}", self.shape);
    }
}
