//! Intro Arcade entry point
//!
//! Native headless driver: runs the game in attract mode, with the autopilot
//! holding the direction keys and Enter pressed on every idle screen.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use intro_arcade::platform::{FrameClock, Key, KeyState};
use intro_arcade::sim::{Phase, steer};
use intro_arcade::{Flow, Game, JsonFileStore, Settings};

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();

    let settings = Settings::load_from(&Settings::path_from_env());
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Intro Arcade (headless) starting, seed {}", seed);

    let store = JsonFileStore::new(&settings.save_path);
    log::info!("High score file: {}", store.path().display());

    let mut game = Game::new(store, seed);
    let mut keys = KeyState::new();
    let mut clock = FrameClock::new(settings.target_fps, settings.max_frame_dt);
    log::debug!("Frame budget {:?}", clock.frame_duration());

    let deadline = Duration::try_from_secs_f32(settings.demo_seconds)
        .ok()
        .and_then(|d| Instant::now().checked_add(d));
    let mut survived = 0.0_f32;
    let mut coins = 0_u32;

    loop {
        let dt = clock.tick();

        if deadline.is_some_and(|d| Instant::now() >= d) {
            let flow = keys.press(Key::Escape).map(|command| game.handle(command));
            keys.release(Key::Escape);
            if flow == Some(Flow::Quit) {
                break;
            }
        }

        match game.phase() {
            Phase::Title | Phase::GameOver => {
                if let Some(command) = keys.press(Key::Enter) {
                    game.handle(command);
                }
                keys.release(Key::Enter);
            }
            Phase::Playing => {
                let input = steer(game.state());
                if let Some(outcome) = game.update(dt, &input) {
                    if outcome.coin_collected() {
                        coins += 1;
                    }
                    if outcome.is_game_over() {
                        survived += game.state().alive_time;
                    }
                }
            }
        }
    }

    if game.phase() == Phase::Playing {
        survived += game.state().alive_time;
    }

    log::info!(
        "Session over: {} runs, {} coins, {:.1}s survived, high score {}",
        game.runs(),
        coins,
        survived,
        game.high_score()
    );
    println!(
        "Runs: {}   Last score: {}   High: {}",
        game.runs(),
        game.state().score,
        game.high_score()
    );
}
