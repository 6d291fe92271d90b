//! Platform abstraction layer
//!
//! What a frame driver needs from the outside world:
//! - Frame timing (measured `dt`)
//! - Key bindings (held keys to direction input, presses to commands)

pub mod input;
pub mod time;

pub use input::{Key, KeyState, command_for};
pub use time::{FrameClock, clamp_dt};
