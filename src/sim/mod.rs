//! Simulation module
//!
//! All gameplay logic lives here. No rendering, timing or file access:
//! - `dt` is supplied by the caller
//! - Randomness comes from an injected RNG
//! - Entities are plain integer boxes

pub mod autopilot;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::steer;
pub use collision::{Reflection, aabb_overlap, first_overlap, reflect_within};
pub use rect::Rect;
pub use state::{Coin, Enemy, GameState, PLAYFIELD, Phase, player_start};
pub use tick::{DirectionInput, StepOutcome, advance};
