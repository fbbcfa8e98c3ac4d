//! Winning line table.

/// Cell indices of one line on the board.
pub type Line = [usize; 3];

/// All eight lines: rows top-to-bottom, columns left-to-right, then the
/// main and anti diagonals. Win detection depends on this order.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_is_covered() {
        for cell in 0..9 {
            assert!(LINES.iter().any(|line| line.contains(&cell)));
        }
    }

    #[test]
    fn test_center_sits_on_four_lines() {
        let count = LINES.iter().filter(|line| line.contains(&4)).count();
        assert_eq!(count, 4);
    }

    #[test]
    fn test_lines_are_distinct() {
        for (i, a) in LINES.iter().enumerate() {
            for b in &LINES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
