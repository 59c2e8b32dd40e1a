//! In-memory canvas
//!
//! A retained-mode `Surface` that keeps every shape in a map keyed by
//! handle. The headless binary and the tests draw into it.

use std::collections::BTreeMap;

use glam::Vec2;

use super::surface::{ShapeId, ShapeKind, Style, Surface};
use crate::sim::BoundingBox;

/// A shape stored on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub bounds: BoundingBox,
    pub style: Style,
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: f32,
    height: f32,
    shapes: BTreeMap<ShapeId, Shape>,
    next_id: u32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            shapes: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Every text currently drawn, in creation order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.values().filter_map(|s| s.style.text.as_deref())
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }

    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        let shape = self.shapes.get_mut(&id);
        if shape.is_none() {
            log::warn!("Canvas: no shape {:?}", id);
        }
        shape
    }
}

impl Surface for Canvas {
    fn create_shape(&mut self, kind: ShapeKind, bounds: BoundingBox, style: Style) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.insert(id, Shape { kind, bounds, style });
        id
    }

    fn move_shape(&mut self, id: ShapeId, delta: Vec2) {
        if let Some(shape) = self.shape_mut(id) {
            shape.bounds = shape.bounds.translated(delta);
        }
    }

    fn set_bounds(&mut self, id: ShapeId, bounds: BoundingBox) {
        if let Some(shape) = self.shape_mut(id) {
            shape.bounds = bounds;
        }
    }

    fn set_style(&mut self, id: ShapeId, style: Style) {
        if let Some(shape) = self.shape_mut(id) {
            shape.style = style;
        }
    }

    fn delete_shape(&mut self, id: ShapeId) {
        if self.shapes.remove(&id).is_none() {
            log::warn!("Canvas: delete of unknown shape {:?}", id);
        }
    }

    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn query_overlapping(&self, area: &BoundingBox) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .filter(|(_, shape)| shape.bounds.overlaps(area))
            .map(|(&id, _)| id)
            .collect()
    }

    fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
