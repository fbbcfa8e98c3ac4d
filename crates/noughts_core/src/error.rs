//! Error types for the game engine, scorer and configuration.

use crate::position::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// Error returned when a move is rejected. The engine is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Cell index is outside 0-8.
    #[display("Cell index {index} is off the board (must be 0-8)")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
    },

    /// The cell already holds a mark.
    #[display("{position} is already occupied")]
    CellOccupied {
        /// The occupied position.
        position: Position,
    },

    /// The round is already won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl MoveError {
    /// True for rejections caused by game state rather than a bad index.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, MoveError::CellOccupied { .. } | MoveError::GameOver)
    }
}

impl std::error::Error for MoveError {}

/// Error returned by the session scorer.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ScoreError {
    /// Text did not name either mark.
    #[display("Unrecognized mark: {symbol:?}")]
    InvalidMark {
        /// The rejected text.
        symbol: String,
    },
}

impl std::error::Error for ScoreError {}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
