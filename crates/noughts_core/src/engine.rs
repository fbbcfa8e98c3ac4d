//! Round engine: board, turn and status.

use crate::error::MoveError;
use crate::position::Position;
use crate::types::{Board, Cell, GameStatus, Mark, Move};
use tracing::{debug, info, instrument};

/// Plays a single round at a time.
///
/// State only changes through [`GameEngine::apply_move`] and
/// [`GameEngine::reset_round`]. A rejected move leaves every field untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::FIRST,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Builds an engine by applying each index in turn, stopping at the first
    /// rejected move.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for &index in indices {
            engine.apply_move(index)?;
        }
        Ok(engine)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move. After a win this is the winning mark.
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the accepted moves of this round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the round is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Empty positions, or none once the round is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Places the current mark at `index` (0-8).
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidIndex`] if `index` is off the board.
    /// - [`MoveError::GameOver`] if the round is already won or drawn.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(mark = %self.current_mark))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let position = Position::from_index(index).ok_or_else(|| {
            debug!(index, "Rejected off-board index");
            MoveError::InvalidIndex { index }
        })?;

        if self.is_over() {
            debug!(index, status = ?self.status, "Rejected move after round ended");
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(position) {
            debug!(%position, "Rejected move on occupied cell");
            return Err(MoveError::CellOccupied { position });
        }

        let mark = self.current_mark;
        self.board.set(position, Cell::Occupied(mark));
        self.history.push(Move::new(mark, position));
        self.status = self.evaluate();

        if !self.is_over() {
            self.current_mark = mark.opponent();
        }

        #[cfg(debug_assertions)]
        self.debug_check_invariants();

        match self.status {
            GameStatus::Won { mark, line } => info!(%mark, ?line, "Round won"),
            GameStatus::Draw => info!("Round drawn"),
            GameStatus::InProgress => debug!(%position, next = %self.current_mark, "Move accepted"),
        }

        Ok(self.status)
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        debug!(moves = self.history.len(), "Resetting round");
        *self = Self::new();
    }

    fn evaluate(&self) -> GameStatus {
        if let Some((mark, line)) = self.board.winning_line() {
            GameStatus::Won { mark, line }
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    #[cfg(debug_assertions)]
    fn debug_check_invariants(&self) {
        let result = crate::invariants::check_engine(self);
        debug_assert!(result.is_ok(), "Engine invariants violated: {result:?}");
    }

    #[cfg(test)]
    pub(crate) fn corrupt_for_test(&mut self, index: usize, mark: Mark) {
        if let Some(pos) = Position::from_index(index) {
            self.board.set(pos, Cell::Occupied(mark));
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
