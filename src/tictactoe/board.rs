//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn to_mark(self) -> Option<Mark> {
        match self {
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
            Cell::Empty => None,
        }
    }
}

/// One of the two symbols a player places on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Mark {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "first" | "p1" => Ok(Mark::X),
            "o" | "second" | "p2" => Ok(Mark::O),
            _ => Err(crate::Error::InvalidMark {
                input: s.to_string(),
            }),
        }
    }
}

/// A mark placed at a position, as recorded during a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub mark: Mark,
}

/// A 3x3 board in row-major order.
///
/// The board carries no turn information; whoever drives the game decides
/// which mark moves next. It is a 9-byte `Copy` value, so hypothetical
/// positions are built by copying rather than by mutating and restoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Wrap an arbitrary cell array.
    ///
    /// No consistency checks are made: boards that could never arise in a
    /// real game are still valid input for evaluation and search.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Parse a board from its text form.
    ///
    /// Whitespace is ignored, so both `"XO......."` and `"XO. ... ..."` work.
    ///
    /// # Errors
    ///
    /// Returns error if the board does not have exactly 9 cells or any
    /// character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8), `None` outside the board
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Check if a position is on the board and empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Check whether every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Place a mark and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`](crate::Error::InvalidPosition) for
    /// positions outside 0-8 and [`Error::CellOccupied`](crate::Error::CellOccupied)
    /// if the cell already holds a mark.
    #[must_use = "place returns a new board and leaves this one unchanged"]
    pub fn place(&self, pos: usize, mark: Mark) -> Result<Board, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::CellOccupied { position: pos });
        }
        Ok(self.with_mark(pos, mark))
    }

    /// Branch to a child position. Callers pass indices taken from
    /// [`Board::empty_positions`].
    pub(crate) fn with_mark(&self, pos: usize, mark: Mark) -> Board {
        debug_assert!(
            pos < 9 && self.is_empty(pos),
            "branching on occupied cell {pos}"
        );
        let mut child = *self;
        child.cells[pos] = mark.to_cell();
        child
    }

    /// Compact 9-character encoding, e.g. `"XO..X...O"`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
