//! The 3x3 board, its fixed win lines, and terminal evaluation.

use super::action::MoveError;
use super::types::{Cell, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// One of the eight fixed three-cell lines that wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 3]")]
pub struct WinLine([usize; 3]);

/// Three indices that are not one of the eight win lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{:?} is not a win line", cells)]
pub struct NotAWinLine {
    /// The rejected indices.
    pub cells: [usize; 3],
}

impl TryFrom<[usize; 3]> for WinLine {
    type Error = NotAWinLine;

    fn try_from(cells: [usize; 3]) -> Result<Self, Self::Error> {
        Self::from_cells(cells).ok_or(NotAWinLine { cells })
    }
}

impl WinLine {
    /// All win lines in evaluation order: rows, then columns, then diagonals.
    pub const ALL: [WinLine; 8] = [
        // Rows
        WinLine([0, 1, 2]),
        WinLine([3, 4, 5]),
        WinLine([6, 7, 8]),
        // Columns
        WinLine([0, 3, 6]),
        WinLine([1, 4, 7]),
        WinLine([2, 5, 8]),
        // Diagonals
        WinLine([0, 4, 8]),
        WinLine([2, 4, 6]),
    ];

    /// Returns the three board indices of this line.
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// Looks up the fixed line with exactly these indices.
    pub fn from_cells(cells: [usize; 3]) -> Option<Self> {
        Self::ALL.iter().copied().find(|line| line.0 == cells)
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a player owning a full line.
    Won(Player, WinLine),
    /// Game ended with a full board and no winner.
    Drawn,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player, _) => Some(*player),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from raw cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Off-board indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Places a mark for `player` at `index`.
    ///
    /// Only the target cell changes; turn order is the session's concern.
    ///
    /// # Errors
    ///
    /// - [`MoveError::IndexOutOfRange`] if `index` is not in 0-8.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::IndexOutOfRange { index })?;
        if !cell.is_empty() {
            return Err(MoveError::CellOccupied { index });
        }
        *cell = Cell::Marked(player);
        Ok(())
    }

    /// Resets the cell at `index` to empty.
    ///
    /// # Errors
    ///
    /// - [`MoveError::IndexOutOfRange`] if `index` is not in 0-8.
    /// - [`MoveError::CellEmpty`] if there is nothing to clear.
    #[instrument(level = "trace", skip(self))]
    pub fn clear(&mut self, index: usize) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::IndexOutOfRange { index })?;
        if cell.is_empty() {
            return Err(MoveError::CellEmpty { index });
        }
        *cell = Cell::Empty;
        Ok(())
    }

    /// Returns a copy of this board with `player` marked at `index`.
    ///
    /// Callers guarantee `index` is an empty on-board cell.
    pub(crate) fn with_mark(mut self, index: usize, player: Player) -> Self {
        self.cells[index] = Cell::Marked(player);
        self
    }

    /// Evaluates the board.
    ///
    /// The first fully owned line in [`WinLine::ALL`] order wins. A full
    /// board with no such line is a draw.
    pub fn evaluate(&self) -> GameStatus {
        for line in WinLine::ALL {
            let [a, b, c] = line.cells();
            if let Cell::Marked(player) = self.cells[a]
                && self.cells[b] == self.cells[a]
                && self.cells[c] == self.cells[a]
            {
                return GameStatus::Won(player, line);
            }
        }

        if self.is_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    /// Indices of all empty cells in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Independent copy for read-only analysis.
    pub fn snapshot(&self) -> Board {
        *self
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of marks held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Marked(player))
            .count()
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Marked(player) => write!(f, "{}", player.symbol())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
