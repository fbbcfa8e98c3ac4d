//! Properties the engine keeps after every accepted move.

use crate::engine::GameEngine;
use crate::types::{Cell, Mark};

/// A property checked against an engine.
pub trait Invariant {
    /// What the property asserts.
    const DESCRIPTION: &'static str;

    /// True when the property holds.
    fn holds(engine: &GameEngine) -> bool;
}

/// A property that did not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvariantViolation {
    /// The failed property.
    pub description: &'static str,
}

/// Every history entry matches an occupied cell, and nothing else is occupied.
pub struct HistoryMatchesBoard;

impl Invariant for HistoryMatchesBoard {
    const DESCRIPTION: &'static str = "Move history matches the occupied cells";

    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        board.filled() == engine.history().len()
            && engine
                .history()
                .iter()
                .all(|m| board.get(m.position) == Cell::Occupied(m.mark))
    }
}

/// Marks alternate X, O, X, ... and the mark to move follows the history.
pub struct AlternatingMarks;

impl Invariant for AlternatingMarks {
    const DESCRIPTION: &'static str = "Marks alternate starting with X";

    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, m)| m.mark == if i % 2 == 0 { Mark::X } else { Mark::O });

        if !alternates {
            return false;
        }

        // A finished round keeps the last mover as current.
        if engine.status().is_terminal() {
            return history.last().map(|m| m.mark) == Some(engine.current_mark());
        }

        let expected = if history.len() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        engine.current_mark() == expected
    }
}

/// Checks every engine invariant, collecting the ones that fail.
pub fn check_engine(engine: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
    let checks: [(&'static str, fn(&GameEngine) -> bool); 2] = [
        (HistoryMatchesBoard::DESCRIPTION, HistoryMatchesBoard::holds),
        (AlternatingMarks::DESCRIPTION, AlternatingMarks::holds),
    ];

    let violations: Vec<_> = checks
        .iter()
        .filter(|(_, holds)| !holds(engine))
        .map(|&(description, _)| InvariantViolation { description })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
