//! Best-score tracking
//!
//! Holds the best score seen by this process next to the store it came from.
//! The in-memory value only ever goes up, and it is written through to the
//! store each time it does.

use crate::persistence::{HighScoreStore, PersistenceError};

/// Result of offering a finished run's score
#[derive(Debug)]
pub enum Submission {
    /// Score did not beat the current best; nothing written
    Unchanged,
    /// New best, stored successfully
    Saved { previous: u32 },
    /// New best in memory, but the store rejected it
    SaveFailed {
        previous: u32,
        error: PersistenceError,
    },
}

impl Submission {
    pub fn is_new_best(&self) -> bool {
        !matches!(self, Submission::Unchanged)
    }
}

/// The process-wide high score
#[derive(Debug)]
pub struct HighScore<S: HighScoreStore> {
    best: u32,
    store: S,
}

impl<S: HighScoreStore> HighScore<S> {
    /// Read the best score from `store`.
    ///
    /// Any read failure starts from 0; a missing file is expected on first run.
    pub fn load(store: S) -> Self {
        let best = match store.load() {
            Ok(best) => {
                log::info!("Loaded high score {}", best);
                best
            }
            Err(err) if err.is_not_found() => {
                log::info!("No high score saved yet, starting fresh");
                0
            }
            Err(err) => {
                log::warn!("Ignoring unreadable high score: {}", err);
                0
            }
        };
        Self { best, store }
    }

    /// Best score so far
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Offer a score; raises and persists the best if it is beaten
    pub fn submit(&mut self, score: u32) -> Submission {
        if score <= self.best {
            return Submission::Unchanged;
        }

        let previous = self.best;
        self.best = score;
        match self.store.save(score) {
            Ok(()) => Submission::Saved { previous },
            Err(error) => Submission::SaveFailed { previous, error },
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
