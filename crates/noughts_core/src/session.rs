//! Session controller tying a round engine to scores and player names.

use crate::config::SessionConfig;
use crate::engine::GameEngine;
use crate::error::MoveError;
use crate::players::PlayerNames;
use crate::scorer::{Scores, SessionScorer};
use crate::types::GameStatus;
use tracing::{info, instrument};

/// One session: a sequence of rounds between the same two players.
///
/// Front ends forward every user event here. Wins are scored as they
/// happen, so callers never touch the scorer directly.
#[derive(Debug, Clone)]
pub struct Session {
    engine: GameEngine,
    scorer: SessionScorer,
    names: PlayerNames,
}

impl Session {
    /// Starts a session with fresh board and zero scores.
    #[instrument]
    pub fn new(names: PlayerNames) -> Self {
        info!(x = %names.x(), o = %names.o(), "Starting session");
        Self {
            engine: GameEngine::new(),
            scorer: SessionScorer::new(),
            names,
        }
    }

    /// Starts a session with the names from `config`.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.player_names())
    }

    /// Plays the current mark at `index`, scoring the round if it is won.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let status = self.engine.apply_move(index)?;

        if let GameStatus::Won { mark, .. } = status {
            self.scorer.record_win(mark);
            info!(winner = %self.names.name(mark), "Round won");
        }

        Ok(status)
    }

    /// Starts another round with the same players and scores.
    #[instrument(skip(self))]
    pub fn restart_round(&mut self) {
        self.engine.reset_round();
    }

    /// Rebinds names and clears both the board and the scores.
    #[instrument(skip(self))]
    pub fn new_session(&mut self, names: PlayerNames) {
        info!(x = %names.x(), o = %names.o(), "Rebinding players");
        self.names = names;
        self.scorer.reset_session();
        self.engine.reset_round();
    }

    /// The round engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Current score snapshot.
    pub fn scores(&self) -> Scores {
        self.scorer.current_scores()
    }

    /// Names bound for this session.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// One-line status for display.
    pub fn status_message(&self) -> String {
        match self.engine.status() {
            GameStatus::InProgress => {
                let mark = self.engine.current_mark();
                format!("{}'s Turn ({})", self.names.name(mark), mark)
            }
            GameStatus::Won { mark, .. } => format!("{} Wins!", self.names.name(mark)),
            GameStatus::Draw => "Game ended in a draw!".to_string(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PlayerNames::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_status_message_follows_turns() {
        let mut session = Session::new(PlayerNames::new("Ada", "Grace"));
        assert_eq!(session.status_message(), "Ada's Turn (X)");
        session.play(4).expect("valid move");
        assert_eq!(session.status_message(), "Grace's Turn (O)");
    }

    #[test]
    fn test_win_is_scored_once() {
        let mut session = Session::default();
        for idx in [0, 4, 1, 5, 2] {
            session.play(idx).expect("valid move");
        }
        assert_eq!(session.status_message(), "Player X Wins!");
        assert!(session.play(8).is_err());
        assert_eq!(session.scores().get(Mark::X), 1);
        assert_eq!(session.scores().get(Mark::O), 0);
    }

    #[test]
    fn test_draw_scores_nothing() {
        let mut session = Session::default();
        for idx in [0, 1, 2, 3, 4, 6, 5, 8, 7] {
            session.play(idx).expect("valid move");
        }
        assert_eq!(session.status_message(), "Game ended in a draw!");
        assert_eq!(session.scores(), Scores::default());
    }
}
