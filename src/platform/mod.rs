//! Platform abstraction layer
//!
//! Everything the simulation needs from the outside world:
//! - Shapes on a drawing surface (create, move, restyle, delete, overlap queries)
//! - Input events
//! - Time/ticks (deferred callbacks)

pub mod canvas;
pub mod input;
pub mod surface;
pub mod time;

pub use canvas::{Canvas, Shape};
pub use input::{InputEvent, Key};
pub use surface::{Color, ShapeId, ShapeKind, Style, Surface};
pub use time::{Timer, TimerAction};
