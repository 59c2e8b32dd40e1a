//! Per-tick collision query
//!
//! Asks the surface which shapes overlap the ball's bounding box and maps
//! the handles back to game entities through the board's index. Shapes that
//! are not entities (HUD text, prompts) are ignored, and so is the ball.

use super::entity::EntityKind;
use super::geometry::BoundingBox;
use super::state::Board;
use crate::platform::{ShapeId, Surface};

/// An entity overlapping the ball this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    pub shape: ShapeId,
    pub kind: EntityKind,
    pub bounds: BoundingBox,
}

/// Entities (paddle and/or bricks) overlapping the ball, in surface order.
/// Empty when no ball is in play.
pub fn overlapping_entities<S: Surface + ?Sized>(surface: &S, board: &Board) -> Vec<Overlap> {
    let Some(ball) = board.ball.as_ref() else {
        return Vec::new();
    };
    let area = ball.position();

    surface
        .query_overlapping(&area)
        .into_iter()
        .filter_map(|shape| board.lookup(shape))
        .filter(|o| o.kind != EntityKind::Ball)
        .collect()
}
