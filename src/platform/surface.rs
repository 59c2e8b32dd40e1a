//! Drawing surface contract
//!
//! The simulation never talks to a windowing toolkit directly. It creates
//! shapes through this trait and keeps the returned handles; the surface
//! answers overlap queries the same way a retained-mode canvas would.

use glam::Vec2;

use crate::sim::BoundingBox;

/// Opaque handle to a shape on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub u32);

/// Primitive shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Oval,
    Rectangle,
    /// Text anchored at the centre of its bounds
    Text,
}

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xFFFFFF);
    pub const BLACK: Color = Color(0x000000);
    /// Paddle and buttons
    pub const AMBER: Color = Color(0xFFB643);
    pub const LIME: Color = Color(0x00FF00);
    pub const SKY_BLUE: Color = Color(0x87CEEB);
    pub const BRIGHT_RED: Color = Color(0xFF6B6B);
}

/// Visual style of a shape
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub fill: Option<Color>,
    pub text: Option<String>,
    pub font_size: u16,
}

impl Style {
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            ..Default::default()
        }
    }

    pub fn text(text: impl Into<String>, font_size: u16) -> Self {
        Self {
            fill: Some(Color::BLACK),
            text: Some(text.into()),
            font_size,
        }
    }
}

/// A retained-mode drawing surface
pub trait Surface {
    /// Create a shape and return its handle
    fn create_shape(&mut self, kind: ShapeKind, bounds: BoundingBox, style: Style) -> ShapeId;

    /// Translate a shape
    fn move_shape(&mut self, id: ShapeId, delta: Vec2);

    /// Replace a shape's bounds
    fn set_bounds(&mut self, id: ShapeId, bounds: BoundingBox);

    /// Replace a shape's style
    fn set_style(&mut self, id: ShapeId, style: Style);

    /// Remove a shape; its handle becomes invalid
    fn delete_shape(&mut self, id: ShapeId);

    /// Remove every shape
    fn clear(&mut self);

    /// Handles of all shapes whose bounds overlap `area` (edges inclusive),
    /// in creation order
    fn query_overlapping(&self, area: &BoundingBox) -> Vec<ShapeId>;

    /// Surface size (width, height)
    fn size(&self) -> Vec2;
}
