//! Named board positions and presentation coordinates.
//!
//! Board indices are 0-based and row-major internally. Rows and columns
//! are 1-based only when talking to people.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// 1-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3 + 1
    }

    /// 1-based column.
    pub fn column(self) -> usize {
        self.to_index() % 3 + 1
    }

    /// Creates position from 1-based row and column.
    pub fn from_row_col(row: usize, column: usize) -> Option<Self> {
        if !(1..=3).contains(&row) || !(1..=3).contains(&column) {
            return None;
        }
        Self::from_index((row - 1) * 3 + (column - 1))
    }

    /// Parses user input: a cell number `1`-`9`, `row col` (1-based), or a
    /// label such as `center` (case-insensitive).
    #[instrument]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let numbers: Vec<&str> = trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .collect();

        match numbers.as_slice() {
            [single] if single.chars().all(|c| c.is_ascii_digit()) => {
                let number: usize = single.parse().ok()?;
                number.checked_sub(1).and_then(Self::from_index)
            }
            [row, column] => match (row.parse(), column.parse()) {
                (Ok(row), Ok(column)) => Self::from_row_col(row, column),
                _ => Self::from_label(trimmed),
            },
            _ => Self::from_label(trimmed),
        }
    }

    /// Finds a position by its label (case-insensitive, `-` optional).
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = normalize(label);
        if wanted.is_empty() {
            return None;
        }
        Self::iter().find(|pos| normalize(pos.label()) == wanted)
    }
}

fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
