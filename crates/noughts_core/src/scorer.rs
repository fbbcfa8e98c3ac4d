//! Cumulative win counts for one session.

use crate::error::ScoreError;
use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Snapshot of both win counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scores {
    /// Wins for X.
    x: u32,
    /// Wins for O.
    o: u32,
}

impl Scores {
    /// Wins for the given mark.
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }
}

/// Tallies wins across rounds. Survives round restarts; only
/// [`SessionScorer::reset_session`] clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionScorer {
    scores: Scores,
}

impl SessionScorer {
    /// Creates a scorer with both counts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one win for `mark`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, mark: Mark) {
        let count = match mark {
            Mark::X => &mut self.scores.x,
            Mark::O => &mut self.scores.o,
        };
        *count = count.saturating_add(1);
        info!(%mark, wins = *count, "Recorded win");
    }

    /// Adds one win for the mark named by `symbol` ("X" or "O", any case).
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidMark`] if `symbol` names neither mark.
    /// The counts are unchanged in that case.
    #[instrument(skip(self))]
    pub fn record_win_symbol(&mut self, symbol: &str) -> Result<(), ScoreError> {
        let mark = symbol.trim().parse::<Mark>().map_err(|_| {
            debug!(symbol, "Rejected unknown mark");
            ScoreError::InvalidMark {
                symbol: symbol.to_string(),
            }
        })?;
        self.record_win(mark);
        Ok(())
    }

    /// Zeroes both counts.
    #[instrument(skip(self))]
    pub fn reset_session(&mut self) {
        info!(x = self.scores.x, o = self.scores.o, "Clearing session scores");
        self.scores = Scores::default();
    }

    /// Returns a snapshot of both counts.
    pub fn current_scores(&self) -> Scores {
        self.scores
    }
}
