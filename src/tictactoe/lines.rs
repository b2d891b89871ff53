//! Winning line analysis

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Cell, Mark};

/// Presentation tag for a completed line, used to draw the strike-through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strike {
    Row1,
    Row2,
    Row3,
    Column1,
    Column2,
    Column3,
    Diagonal1,
    Diagonal2,
}

impl Strike {
    /// Style-class name for renderers, e.g. `strike-row-1`
    pub fn class_name(self) -> &'static str {
        match self {
            Strike::Row1 => "strike-row-1",
            Strike::Row2 => "strike-row-2",
            Strike::Row3 => "strike-row-3",
            Strike::Column1 => "strike-column-1",
            Strike::Column2 => "strike-column-2",
            Strike::Column3 => "strike-column-3",
            Strike::Diagonal1 => "strike-diagonal-1",
            Strike::Diagonal2 => "strike-diagonal-2",
        }
    }
}

impl fmt::Display for Strike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Three cell indices that win when filled by one mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub cells: [usize; 3],
    pub strike: Strike,
}

/// Winning lines on the 3x3 board: rows, then columns, then diagonals
pub const WINNING_LINES: [Line; 8] = [
    Line {
        cells: [0, 1, 2],
        strike: Strike::Row1,
    },
    Line {
        cells: [3, 4, 5],
        strike: Strike::Row2,
    },
    Line {
        cells: [6, 7, 8],
        strike: Strike::Row3,
    },
    Line {
        cells: [0, 3, 6],
        strike: Strike::Column1,
    },
    Line {
        cells: [1, 4, 7],
        strike: Strike::Column2,
    },
    Line {
        cells: [2, 5, 8],
        strike: Strike::Column3,
    },
    Line {
        cells: [0, 4, 8],
        strike: Strike::Diagonal1,
    },
    Line {
        cells: [2, 4, 6],
        strike: Strike::Diagonal2,
    },
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First line (in [`WINNING_LINES`] order) filled by a single mark
    pub fn completed_line(cells: &[Cell; 9]) -> Option<(Line, Mark)> {
        WINNING_LINES.iter().find_map(|line| {
            let [a, b, c] = line.cells;
            let mark = cells[a].to_mark()?;
            let full = cells[a] == cells[b] && cells[a] == cells[c];
            full.then_some((*line, mark))
        })
    }

    /// Check if a mark has three in a row anywhere
    pub fn has_won(cells: &[Cell; 9], mark: Mark) -> bool {
        let target = mark.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.cells.iter().all(|&idx| cells[idx] == target))
    }

    /// Positions that would immediately complete a line for the mark, ascending
    pub fn winning_moves(cells: &[Cell; 9], mark: Mark) -> Vec<usize> {
        let mut moves: Vec<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, mark, line))
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], mark: Mark, line: &Line) -> Option<usize> {
        let target = mark.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in &line.cells {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_line_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[3] = Cell::X;
        cells[4] = Cell::X;
        cells[5] = Cell::X;

        let (line, mark) = LineAnalyzer::completed_line(&cells).unwrap();
        assert_eq!(mark, Mark::X);
        assert_eq!(line.strike, Strike::Row2);
        assert_eq!(line.strike.class_name(), "strike-row-2");
    }

    #[test]
    fn test_completed_line_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Mark::O));
        assert!(!LineAnalyzer::has_won(&cells, Mark::X));
        let (line, _) = LineAnalyzer::completed_line(&cells).unwrap();
        assert_eq!(line.strike, Strike::Column1);
    }

    #[test]
    fn test_completed_line_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        let (line, _) = LineAnalyzer::completed_line(&cells).unwrap();
        assert_eq!(line.strike, Strike::Diagonal2);
    }

    #[test]
    fn test_mixed_line_not_complete() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::O;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::completed_line(&cells).is_none());
    }

    #[test]
    fn test_strike_tags_unique() {
        let mut names: Vec<_> = WINNING_LINES
            .iter()
            .map(|l| l.strike.class_name())
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_winning_moves() {
        // X.X
        // ...
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(LineAnalyzer::winning_moves(&cells, Mark::X), vec![1]);
        assert!(LineAnalyzer::winning_moves(&cells, Mark::O).is_empty());
    }

    #[test]
    fn test_winning_moves_multiple() {
        // XX.
        // X..
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[3] = Cell::X;

        assert_eq!(LineAnalyzer::winning_moves(&cells, Mark::X), vec![2, 6]);
    }

    #[test]
    fn test_winning_moves_deduplicated() {
        // X.X
        // ...
        // X.X
        let mut cells = [Cell::Empty; 9];
        for idx in [0, 2, 6, 8] {
            cells[idx] = Cell::X;
        }

        // Both diagonals converge on the centre, which is reported once
        assert_eq!(
            LineAnalyzer::winning_moves(&cells, Mark::X),
            vec![1, 3, 4, 5, 7]
        );
    }
}
