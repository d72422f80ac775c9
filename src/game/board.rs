use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the grid.
pub const CELL_COUNT: usize = 9;

/// The eight winning lines: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player token. The inviter plays X and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// One snapshot of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [None; CELL_COUNT],
        }
    }

    /// The mark occupying `index`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `index >= CELL_COUNT`.
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }

    /// Write `mark` into `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= CELL_COUNT`.
    pub fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// The winning mark and the line it occupies, if any. The line is
    /// reported so the presentation layer can highlight it.
    pub fn winner(&self) -> Option<(Mark, [usize; 3])> {
        for line in WINNING_LINES {
            let [a, b, c] = line;
            if let Some(mark) = self.cells[a] {
                if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) {
                    return Some((mark, line));
                }
            }
        }
        None
    }

    /// The game is over when there is a winner or every cell is taken.
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
