//! Noughts core - pure game logic for noughts and crosses.
//!
//! # Architecture
//!
//! - **Engine**: board, turn and win/draw evaluation for one round
//! - **Scorer**: win counts that survive round restarts
//! - **Session**: ties an engine, a scorer and player names together
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameStatus, Mark, PlayerNames, Session};
//!
//! let mut session = Session::new(PlayerNames::new("Ada", "Grace"));
//! for idx in [0, 4, 1, 5] {
//!     session.play(idx).unwrap();
//! }
//! let status = session.play(2).unwrap();
//! assert_eq!(status, GameStatus::Won { mark: Mark::X, line: [0, 1, 2] });
//! assert_eq!(session.scores().get(Mark::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod engine;
mod error;
mod invariants;
mod lines;
mod players;
mod position;
mod scorer;
mod session;
mod types;

pub use config::SessionConfig;
pub use engine::GameEngine;
pub use error::{ConfigError, MoveError, ScoreError};
pub use invariants::{
    AlternatingMarks, HistoryMatchesBoard, Invariant, InvariantViolation, check_engine,
};
pub use lines::{LINES, Line};
pub use players::{PlayerNames, default_name};
pub use position::Position;
pub use scorer::{Scores, SessionScorer};
pub use session::Session;
pub use types::{Board, Cell, GameStatus, Mark, Move};
