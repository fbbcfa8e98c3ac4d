//! Core domain types for noughts and crosses.

use crate::lines::LINES;
use crate::position::Position;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// The mark that opens every round.
    pub const FIRST: Mark = Mark::X;

    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at a raw index, or `None` when the index is off the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Writes a cell. Callers are responsible for the write-once rule.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the first uniformly marked line, scanning rows, then columns,
    /// then diagonals.
    #[instrument(skip(self))]
    pub fn winning_line(&self) -> Option<(Mark, [usize; 3])> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cells[a].mark()?;
            (self.cells[b] == Cell::Occupied(mark) && self.cells[c] == Cell::Occupied(mark))
                .then_some((mark, [a, b, c]))
        })
    }

    /// Formats the board as text. Empty cells show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A mark completed a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// Cell indices of the completed line, for highlighting.
        line: [usize; 3],
    },
    /// Board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// True once the round is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Who moved.
    pub mark: Mark,
    /// Where.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(idx, mark) in marks {
            board.cells[idx] = Cell::Occupied(mark);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(Board::new().winning_line(), None);
    }

    #[test]
    fn test_winner_middle_column() {
        let board = board_from(&[(1, Mark::O), (4, Mark::O), (7, Mark::O)]);
        assert_eq!(board.winning_line(), Some((Mark::O, [1, 4, 7])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from(&[(2, Mark::X), (4, Mark::X), (6, Mark::X)]);
        assert_eq!(board.winning_line(), Some((Mark::X, [2, 4, 6])));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let marks: Vec<_> = line.iter().map(|&idx| (idx, Mark::O)).collect();
            assert_eq!(board_from(&marks).winning_line(), Some((Mark::O, line)));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(board.winning_line(), None);
    }

    #[test]
    fn test_rows_take_precedence_in_scan_order() {
        // Row 0 and column 0 both complete; rows are scanned first.
        let board = board_from(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
            (6, Mark::X),
        ]);
        assert_eq!(board.winning_line(), Some((Mark::X, [0, 1, 2])));
    }

    #[test]
    fn test_cell_by_raw_index() {
        let board = board_from(&[(4, Mark::X)]);
        assert_eq!(board.cell(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.cell(0), Some(Cell::Empty));
        assert_eq!(board.cell(9), None);
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board = board_from(&[(0, Mark::X), (4, Mark::O)]);
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_mark_parses_case_insensitively() {
        assert_eq!("x".parse::<Mark>().ok(), Some(Mark::X));
        assert_eq!("O".parse::<Mark>().ok(), Some(Mark::O));
        assert!("Z".parse::<Mark>().is_err());
    }
}
