//! Phase state machine around the simulation step
//!
//! Title --confirm--> Playing --hit--> GameOver --confirm--> Playing

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::highscores::{HighScore, Submission};
use crate::persistence::HighScoreStore;
use crate::sim::{DirectionInput, GameState, Phase, StepOutcome, advance};

/// Discrete key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start (or restart) a run
    Confirm,
    /// Leave the game
    Quit,
}

/// Whether the frame driver should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A game session: state, high score and RNG
pub struct Game<S: HighScoreStore> {
    state: GameState,
    high_score: HighScore<S>,
    rng: Pcg32,
    runs: u32,
}

impl<S: HighScoreStore> Game<S> {
    /// Load the high score from `store` and open on the title screen
    pub fn new(store: S, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(&mut rng);
        Self {
            state,
            high_score: HighScore::load(store),
            rng,
            runs: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    pub fn high_score_store(&self) -> &S {
        self.high_score.store()
    }

    /// Runs started this session
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Handle a discrete command.
    ///
    /// Confirm only does something on the title and game-over screens.
    pub fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => Flow::Quit,
            Command::Confirm => {
                if matches!(self.state.phase, Phase::Title | Phase::GameOver) {
                    self.start_run();
                }
                Flow::Continue
            }
        }
    }

    fn start_run(&mut self) {
        self.state.reset_run(&mut self.rng);
        self.state.phase = Phase::Playing;
        self.runs += 1;
        log::info!("Run {} started ({})", self.runs, self.state.phase.as_str());
    }

    /// Step the simulation if a run is in progress.
    ///
    /// Returns `None` on the idle screens. On game-over the high score is
    /// raised and persisted when beaten; a failed write is logged and play
    /// carries on with the raised in-memory value.
    pub fn update(&mut self, dt: f32, input: &DirectionInput) -> Option<StepOutcome> {
        if self.state.phase != Phase::Playing {
            return None;
        }

        let outcome = advance(&mut self.state, input, dt, &mut self.rng);

        if let StepOutcome::GameOver { score, .. } = outcome {
            log::info!(
                "Game over ({}): score {} after {:.1}s",
                self.state.phase.as_str(),
                score,
                self.state.alive_time
            );
            match self.high_score.submit(score) {
                Submission::Unchanged => {}
                Submission::Saved { previous } => {
                    log::info!("New high score {} (was {})", score, previous);
                }
                Submission::SaveFailed { previous, error } => {
                    log::info!("New high score {} (was {})", score, previous);
                    log::warn!("High score not persisted: {}", error);
                }
            }
        }

        Some(outcome)
    }
}
