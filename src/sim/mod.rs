//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete tick per call
//! - Seeded RNG only, seeded once
//! - Stable brick iteration order (initial grid order)
//! - No rendering, input polling or I/O

pub mod collision;
pub mod input;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{CollisionPolicy, ReflectAxis, brick_reflect_axis, reflect, reflect_walls};
pub use input::{Actions, InputSymbol};
pub use rect::Rect;
pub use state::{Ball, Brick, GameEvent, GamePhase, GameState, Paddle, brick_grid};
pub use tick::Engine;
