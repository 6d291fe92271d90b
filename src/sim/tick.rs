//! Variable timestep simulation step
//!
//! `advance` moves everything by `dt` seconds and resolves pickups and hits.

use glam::Vec2;
use rand::Rng;

use super::collision::{aabb_overlap, first_overlap, reflect_within};
use super::state::{GameState, PLAYFIELD, Phase};
use crate::consts::*;

/// Held direction keys for a single step.
///
/// Axes are independent, so diagonals move at full speed on both axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl DirectionInput {
    /// Per-axis direction, each component in {-1, 0, +1}
    pub fn axis(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        dir
    }
}

/// What happened during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still playing
    Running { coin_collected: bool },
    /// Player touched an enemy; `score` is the final run score
    GameOver { coin_collected: bool, score: u32 },
}

impl StepOutcome {
    pub fn coin_collected(&self) -> bool {
        match *self {
            StepOutcome::Running { coin_collected } => coin_collected,
            StepOutcome::GameOver { coin_collected, .. } => coin_collected,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, StepOutcome::GameOver { .. })
    }
}

/// Whole-unit displacement for `vel` over `dt`, truncated toward zero
#[inline]
fn displacement(vel: Vec2, dt: f32) -> (i32, i32) {
    ((vel.x * dt) as i32, (vel.y * dt) as i32)
}

/// Advance a playing state by `dt` seconds.
///
/// Order matters: the coin is checked before enemies, so a step that both
/// collects and collides still scores the coin. Callers should only invoke
/// this while `state.phase == Phase::Playing`; any other phase is left
/// untouched and reported as `Running`.
pub fn advance(
    state: &mut GameState,
    input: &DirectionInput,
    dt: f32,
    rng: &mut impl Rng,
) -> StepOutcome {
    if state.phase != Phase::Playing {
        return StepOutcome::Running {
            coin_collected: false,
        };
    }

    state.alive_time += dt;

    // Player
    let player_vel = input.axis() * PLAYER_SPEED;
    let (dx, dy) = displacement(player_vel, dt);
    state.player.translate(dx, dy);
    state.player.clamp_within(&PLAYFIELD);

    // Enemies
    for enemy in &mut state.enemies {
        let (dx, dy) = displacement(enemy.vel, dt);
        enemy.rect.translate(dx, dy);
        reflect_within(&mut enemy.rect, &mut enemy.vel, &PLAYFIELD);
    }

    // Coin
    let coin_collected = aabb_overlap(&state.player, &state.coin.rect);
    if coin_collected {
        state.score += 1;
        state.respawn_coin(rng);
        log::debug!("Coin collected, score {}", state.score);
    }

    // Enemies vs player
    if first_overlap(&state.player, state.enemies.iter().map(|e| &e.rect)).is_some() {
        state.phase = Phase::GameOver;
        return StepOutcome::GameOver {
            coin_collected,
            score: state.score,
        };
    }

    StepOutcome::Running { coin_collected }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Coin, Enemy};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// A playing state with nothing near the centre
    fn quiet_state(rng: &mut Pcg32) -> GameState {
        let mut state = GameState::new(rng);
        state.phase = Phase::Playing;
        state.enemies = vec![Enemy {
            rect: Rect::new(100, 700, 36, 36),
            vel: Vec2::ZERO,
        }];
        state.coin = Coin {
            rect: Rect::new(1500, 100, 18, 18),
        };
        state
    }

    #[test]
    fn test_axis_diagonal_unnormalized() {
        let input = DirectionInput {
            right: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(input.axis(), Vec2::new(1.0, 1.0));

        let opposed = DirectionInput {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(opposed.axis(), Vec2::ZERO);
    }

    #[test]
    fn test_player_moves_and_truncates() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = quiet_state(&mut rng);
        let input = DirectionInput {
            right: true,
            up: true,
            ..Default::default()
        };

        // 360 * 0.1 = 36 on both axes
        advance(&mut state, &input, 0.1, &mut rng);
        assert_eq!((state.player.x, state.player.y), (820, 348));

        // 360 / 60 = 6
        advance(&mut state, &input, 1.0 / 60.0, &mut rng);
        assert_eq!((state.player.x, state.player.y), (826, 342));

        // 360 * 0.002 = 0.72 truncates to nothing
        advance(&mut state, &input, 0.002, &mut rng);
        assert_eq!((state.player.x, state.player.y), (826, 342));
    }

    #[test]
    fn test_player_clamped_to_playfield() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = quiet_state(&mut rng);
        let input = DirectionInput {
            left: true,
            up: true,
            ..Default::default()
        };

        advance(&mut state, &input, 10.0, &mut rng);
        assert_eq!((state.player.x, state.player.y), (0, HEADER_HEIGHT));
    }

    #[test]
    fn test_huge_dt_stays_in_bounds() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = quiet_state(&mut rng);
        state.enemies = vec![Enemy {
            rect: Rect::new(400, 400, 36, 36),
            vel: Vec2::new(220.0, 180.0),
        }];
        let input = DirectionInput {
            right: true,
            ..Default::default()
        };

        advance(&mut state, &input, 1.0e7, &mut rng);
        assert!(PLAYFIELD.contains_rect(&state.player));
        assert_eq!(state.player.right(), PLAYFIELD.right());

        let enemy = state.enemies[0];
        assert!(PLAYFIELD.contains_rect(&enemy.rect));
        assert_eq!(enemy.rect.right(), PLAYFIELD.right());
        assert_eq!(enemy.rect.bottom(), PLAYFIELD.bottom());
        assert_eq!(enemy.vel, Vec2::new(-220.0, -180.0));
    }

    #[test]
    fn test_enemy_bounces_off_left_wall() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = quiet_state(&mut rng);
        state.enemies = vec![Enemy {
            rect: Rect::new(2, 100, 36, 36),
            vel: Vec2::new(-220.0, 0.0),
        }];

        advance(&mut state, &DirectionInput::default(), 1.0, &mut rng);
        assert_eq!(state.enemies[0].rect.left(), PLAYFIELD.left());
        assert_eq!(state.enemies[0].vel.x, 220.0);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_coin_pickup_scores_and_relocates() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut state = quiet_state(&mut rng);
        state.coin = Coin {
            rect: Rect::new(784, 384, 18, 18),
        };

        let outcome = advance(&mut state, &DirectionInput::default(), 1.0 / 60.0, &mut rng);
        assert_eq!(
            outcome,
            StepOutcome::Running {
                coin_collected: true
            }
        );
        assert!(outcome.coin_collected());
        assert_eq!(state.score, 1);
        assert_ne!((state.coin.rect.x, state.coin.rect.y), (784, 384));
    }

    #[test]
    fn test_enemy_overlap_ends_run() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = quiet_state(&mut rng);
        state.enemies.push(Enemy {
            rect: state.player,
            vel: Vec2::ZERO,
        });

        let outcome = advance(&mut state, &DirectionInput::default(), 1.0 / 60.0, &mut rng);
        assert!(outcome.is_game_over());
        assert_eq!(state.phase, Phase::GameOver);
    }

    #[test]
    fn test_coin_counts_before_collision() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = quiet_state(&mut rng);
        state.score = 4;
        state.coin = Coin {
            rect: Rect::new(790, 390, 18, 18),
        };
        state.enemies.push(Enemy {
            rect: Rect::new(780, 380, 36, 36),
            vel: Vec2::ZERO,
        });

        let outcome = advance(&mut state, &DirectionInput::default(), 1.0 / 60.0, &mut rng);
        assert_eq!(
            outcome,
            StepOutcome::GameOver {
                coin_collected: true,
                score: 5
            }
        );
    }

    #[test]
    fn test_alive_time_accumulates() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = quiet_state(&mut rng);
        for _ in 0..4 {
            advance(&mut state, &DirectionInput::default(), 0.25, &mut rng);
        }
        assert!((state.alive_time - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_idle_phases_untouched() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = quiet_state(&mut rng);
        state.phase = Phase::Title;
        let before = state.clone();
        let input = DirectionInput {
            left: true,
            ..Default::default()
        };

        advance(&mut state, &input, 1.0, &mut rng);
        assert_eq!(state.player, before.player);
        assert_eq!(state.enemies, before.enemies);
        assert_eq!(state.alive_time, 0.0);
    }

    fn input_strategy() -> impl Strategy<Value = DirectionInput> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(left, right, up, down)| DirectionInput {
                left,
                right,
                up,
                down,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_player_stays_inside(
            x in -3000i32..3000,
            y in -3000i32..3000,
            input in input_strategy(),
            dt in prop_oneof![0.0f32..5.0, 5.0f32..1.0e9],
        ) {
            let mut rng = Pcg32::seed_from_u64(3);
            let mut state = quiet_state(&mut rng);
            state.player.x = x;
            state.player.y = y;

            advance(&mut state, &input, dt, &mut rng);
            prop_assert!(PLAYFIELD.contains_rect(&state.player));
        }

        #[test]
        fn prop_enemies_stay_inside(
            seed in any::<u64>(),
            dt in prop_oneof![0.0f32..3.0, 3.0f32..1.0e9],
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut state = GameState::new(&mut rng);
            state.phase = Phase::Playing;

            advance(&mut state, &DirectionInput::default(), dt, &mut rng);
            for enemy in &state.enemies {
                prop_assert!(PLAYFIELD.contains_rect(&enemy.rect));
                prop_assert_eq!(enemy.vel.x.abs(), ENEMY_SPEED_X);
                prop_assert_eq!(enemy.vel.y.abs(), ENEMY_SPEED_Y);
            }
        }

        #[test]
        fn prop_score_never_decreases(
            seed in any::<u64>(),
            inputs in proptest::collection::vec(input_strategy(), 1..200),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut state = GameState::new(&mut rng);
            state.phase = Phase::Playing;

            let mut last = state.score;
            for input in &inputs {
                advance(&mut state, input, 1.0 / 60.0, &mut rng);
                prop_assert!(state.score >= last);
                last = state.score;
            }
        }
    }
}
