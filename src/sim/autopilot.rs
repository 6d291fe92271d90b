//! Attract-mode steering
//!
//! Heads for the coin and sidesteps any enemy that is about to get close.
//! Purely a function of the current state, so replays stay deterministic.

use glam::Vec2;

use super::rect::Rect;
use super::state::GameState;
use super::tick::DirectionInput;

/// How far ahead (seconds) enemy positions are extrapolated
const LOOKAHEAD: f32 = 0.25;
/// Enemies whose predicted centre is closer than this are avoided
const DANGER_RADIUS: f32 = 150.0;
/// Components smaller than this are treated as "no key"
const DEADZONE: f32 = 0.2;

fn center(rect: &Rect) -> Vec2 {
    let (x, y) = rect.center();
    Vec2::new(x as f32, y as f32)
}

/// Pick the keys to hold this frame
pub fn steer(state: &GameState) -> DirectionInput {
    let me = center(&state.player);
    let to_coin = (center(&state.coin.rect) - me).normalize_or_zero();

    let threat = state
        .enemies
        .iter()
        .map(|e| center(&e.rect) + e.vel * LOOKAHEAD)
        .map(|future| (future, future.distance(me)))
        .filter(|(_, dist)| *dist < DANGER_RADIUS)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let dir = match threat {
        Some((pos, dist)) => {
            // Closer threats dominate the coin completely
            let urgency = 1.0 - dist / DANGER_RADIUS;
            let away = (me - pos).normalize_or_zero();
            (away * (1.0 + 2.0 * urgency) + to_coin * (1.0 - urgency)).normalize_or_zero()
        }
        None => to_coin,
    };

    DirectionInput {
        left: dir.x < -DEADZONE,
        right: dir.x > DEADZONE,
        up: dir.y < -DEADZONE,
        down: dir.y > DEADZONE,
    }
}
