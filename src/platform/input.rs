//! Key bindings
//!
//! Arrows and WASD both steer; each axis is the OR of its bindings.

use std::collections::HashSet;

use crate::game::Command;
use crate::sim::DirectionInput;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    A,
    D,
    W,
    S,
    Enter,
    Escape,
}

/// Command bound to a key press, if any
pub fn command_for(key: Key) -> Option<Command> {
    match key {
        Key::Enter => Some(Command::Confirm),
        Key::Escape => Some(Command::Quit),
        _ => None,
    }
}

/// Currently held keys
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; returns the bound command, if any
    pub fn press(&mut self, key: Key) -> Option<Command> {
        self.held.insert(key);
        command_for(key)
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Direction keys folded into per-axis input
    pub fn direction(&self) -> DirectionInput {
        DirectionInput {
            left: self.is_held(Key::Left) || self.is_held(Key::A),
            right: self.is_held(Key::Right) || self.is_held(Key::D),
            up: self.is_held(Key::Up) || self.is_held(Key::W),
            down: self.is_held(Key::Down) || self.is_held(Key::S),
        }
    }
}
