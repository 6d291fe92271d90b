//! Intro Arcade - dodge the red squares, collect the gold one
//!
//! Core modules:
//! - `sim`: Simulation step (movement, bounce, collisions, scoring)
//! - `game`: Phase state machine wrapping the simulation
//! - `highscores`: In-memory best score backed by a store
//! - `persistence`: JSON save file and store implementations
//! - `platform`: Frame timing and key bindings for a frame driver
//! - `settings`: Runtime configuration

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::{Command, Flow, Game};
pub use highscores::HighScore;
pub use persistence::{HighScoreStore, JsonFileStore, MemoryStore, PersistenceError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: i32 = 1600;
    pub const SCREEN_HEIGHT: i32 = 800;
    /// Reserved HUD strip at the top of the screen
    pub const HEADER_HEIGHT: i32 = 60;

    /// Target frame rate of the driver
    pub const TARGET_FPS: u32 = 60;
    /// Longest frame the driver will feed into the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Player defaults
    pub const PLAYER_SIZE: i32 = 32;
    pub const PLAYER_SPEED: f32 = 360.0;

    /// Enemy defaults
    pub const ENEMY_COUNT: usize = 3;
    pub const ENEMY_SIZE: i32 = 36;
    pub const ENEMY_SPEED_X: f32 = 220.0;
    pub const ENEMY_SPEED_Y: f32 = 180.0;
    /// Spawn margins (x range is [margin, width - margin))
    pub const ENEMY_SPAWN_MARGIN_X: i32 = 40;
    pub const ENEMY_SPAWN_TOP: i32 = 80;
    pub const ENEMY_SPAWN_MARGIN_BOTTOM: i32 = 40;

    /// Coin defaults, kept clear of the HUD
    pub const COIN_SIZE: i32 = 18;
    pub const COIN_SPAWN_MARGIN_X: i32 = 20;
    pub const COIN_SPAWN_TOP: i32 = 90;
    pub const COIN_SPAWN_MARGIN_BOTTOM: i32 = 20;
}
