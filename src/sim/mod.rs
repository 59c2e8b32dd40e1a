//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Fixed step per tick, no wall-clock time
//! - Entities addressed by surface handle through the `Board` index
//! - No knowledge of menus, text or timers

pub mod ball;
pub mod brick;
pub mod collision;
pub mod entity;
pub mod geometry;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use brick::{Brick, BrickHit, color_for_hits};
pub use collision::{Overlap, overlapping_entities};
pub use entity::{Entity, EntityKind};
pub use geometry::BoundingBox;
pub use paddle::Paddle;
pub use state::{Board, GamePhase, GameState};
pub use tick::{TickOutcome, tick};
