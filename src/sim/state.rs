//! Game state and core simulation types

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Region every entity is confined to: the screen minus the HUD strip
pub const PLAYFIELD: Rect = Rect::new(
    0,
    HEADER_HEIGHT,
    SCREEN_WIDTH,
    SCREEN_HEIGHT - HEADER_HEIGHT,
);

/// Current screen of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for confirm on the title screen
    #[default]
    Title,
    /// Active run
    Playing,
    /// Run ended, waiting for confirm to play again
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Title => "title",
            Phase::Playing => "playing",
            Phase::GameOver => "gameover",
        }
    }
}

/// A bouncing hazard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    /// Units per second
    pub vel: Vec2,
}

impl Enemy {
    /// Spawn at a random spot with a random diagonal heading
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let x = rng.random_range(ENEMY_SPAWN_MARGIN_X..SCREEN_WIDTH - ENEMY_SPAWN_MARGIN_X);
        let y = rng.random_range(ENEMY_SPAWN_TOP..SCREEN_HEIGHT - ENEMY_SPAWN_MARGIN_BOTTOM);
        let sx = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            rect: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            vel: Vec2::new(sx * ENEMY_SPEED_X, sy * ENEMY_SPEED_Y),
        }
    }
}

/// The pickup worth one point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub rect: Rect,
}

impl Coin {
    /// Spawn uniformly inside the coin region.
    ///
    /// No clearance is kept around the player or enemies.
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let x = rng.random_range(COIN_SPAWN_MARGIN_X..SCREEN_WIDTH - COIN_SPAWN_MARGIN_X);
        let y = rng.random_range(COIN_SPAWN_TOP..SCREEN_HEIGHT - COIN_SPAWN_MARGIN_BOTTOM);
        Self {
            rect: Rect::new(x, y, COIN_SIZE, COIN_SIZE),
        }
    }
}

/// Starting box for the player, centred on screen
pub fn player_start() -> Rect {
    Rect::new(
        SCREEN_WIDTH / 2 - PLAYER_SIZE / 2,
        SCREEN_HEIGHT / 2 - PLAYER_SIZE / 2,
        PLAYER_SIZE,
        PLAYER_SIZE,
    )
}

/// Everything the simulation step reads and writes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: Phase,
    /// Player box (velocity is derived from input every step)
    pub player: Rect,
    /// Bouncing hazards
    pub enemies: Vec<Enemy>,
    /// Current pickup
    pub coin: Coin,
    /// Coins collected this run
    pub score: u32,
    /// Seconds survived this run
    pub alive_time: f32,
}

impl GameState {
    /// Create a state on the title screen with a run already laid out
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut state = Self {
            phase: Phase::Title,
            player: player_start(),
            enemies: Vec::with_capacity(ENEMY_COUNT),
            coin: Coin {
                rect: Rect::default(),
            },
            score: 0,
            alive_time: 0.0,
        };
        state.reset_run(rng);
        state
    }

    /// Lay out a fresh run: player centred, new enemies and coin, counters zeroed.
    ///
    /// Does not change `phase`.
    pub fn reset_run(&mut self, rng: &mut impl Rng) {
        self.player = player_start();
        self.score = 0;
        self.alive_time = 0.0;

        self.enemies.clear();
        for _ in 0..ENEMY_COUNT {
            self.enemies.push(Enemy::spawn(rng));
        }

        self.coin = Coin::spawn(rng);
    }

    /// Move the coin somewhere new
    pub fn respawn_coin(&mut self, rng: &mut impl Rng) {
        self.coin = Coin::spawn(rng);
    }
}
