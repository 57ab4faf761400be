//! Events emitted while a game is played, and the sinks that render them.

use serde::Serialize;
use std::io::Write;
use strictly_tictactoe::{Board, Player, Position, WinLine};

/// Something that happened at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A game began.
    Started {
        /// Human-readable mode name.
        mode: String,
        /// Mark the computer plays, if any.
        computer: Option<Player>,
    },
    /// Current board, rendered as text.
    Board {
        /// Rendered grid.
        grid: String,
    },
    /// It is `player`'s turn.
    Turn {
        /// Mark to move.
        player: Player,
    },
    /// The computer is choosing a move.
    Thinking {
        /// Mark the computer plays.
        player: Player,
    },
    /// A mark was placed.
    MovePlaced {
        /// Who moved.
        player: Player,
        /// Cell index, 0-8.
        index: usize,
        /// 1-based row.
        row: usize,
        /// 1-based column.
        column: usize,
    },
    /// The game was won.
    Won {
        /// Winner.
        player: Player,
        /// Winning cells.
        line: [usize; 3],
    },
    /// The board filled with no winner.
    Drawn,
    /// The last move was taken back.
    Undone {
        /// Who had made the move.
        player: Player,
        /// Cell that was cleared.
        index: usize,
    },
    /// The board was cleared.
    Reset,
    /// Input or a command was refused.
    Rejected {
        /// Why.
        reason: String,
    },
    /// Command summary requested.
    Help,
    /// The player left.
    Quit,
}

impl GameEvent {
    /// Board event for `board`.
    pub fn board(board: &Board) -> Self {
        Self::Board {
            grid: board.to_string(),
        }
    }

    /// Placement event for `index`.
    pub fn placed(player: Player, index: usize) -> Self {
        let (row, column) = Position::from_index(index)
            .map(|p| (p.row(), p.column()))
            .unwrap_or_default();
        Self::MovePlaced {
            player,
            index,
            row,
            column,
        }
    }

    /// Win event for `line`.
    pub fn won(player: Player, line: WinLine) -> Self {
        Self::Won {
            player,
            line: line.cells(),
        }
    }
}

/// Command summary shown by `help`.
pub const HELP_TEXT: &str = "\
Commands:
  1-9        place a mark (cells numbered left to right, top to bottom)
  r c        place a mark by row and column, e.g. `2 3`
  undo       take back the last move (two-player mode only)
  reset      start over
  board      show the board
  help       show this message
  quit       leave the game";

/// Destination for game events.
pub trait EventSink {
    /// Renders one event.
    fn emit(&mut self, event: &GameEvent) -> anyhow::Result<()>;
}

/// Renders events as prose.
#[derive(Debug)]
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    /// Creates a sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for TextSink<W> {
    fn emit(&mut self, event: &GameEvent) -> anyhow::Result<()> {
        match event {
            GameEvent::Started { mode, computer } => match computer {
                Some(mark) => writeln!(self.out, "New game: {} (computer plays {})", mode, mark)?,
                None => writeln!(self.out, "New game: {}", mode)?,
            },
            GameEvent::Board { grid } => writeln!(self.out, "\n{}\n", grid)?,
            GameEvent::Turn { player } => writeln!(self.out, "Player {}'s turn", player)?,
            GameEvent::Thinking { player } => {
                writeln!(self.out, "Computer ({}) is thinking...", player)?
            }
            GameEvent::MovePlaced {
                player,
                row,
                column,
                ..
            } => writeln!(
                self.out,
                "Player {} placed at row {}, column {}",
                player, row, column
            )?,
            GameEvent::Won { player, line } => writeln!(
                self.out,
                "Player {} wins! ({}, {}, {})",
                player,
                line[0] + 1,
                line[1] + 1,
                line[2] + 1
            )?,
            GameEvent::Drawn => writeln!(self.out, "It's a draw!")?,
            GameEvent::Undone { player, index } => {
                writeln!(self.out, "Undid Player {}'s move at cell {}", player, index + 1)?
            }
            GameEvent::Reset => writeln!(self.out, "Board cleared")?,
            GameEvent::Rejected { reason } => writeln!(self.out, "{}", reason)?,
            GameEvent::Help => writeln!(self.out, "{}", HELP_TEXT)?,
            GameEvent::Quit => writeln!(self.out, "Goodbye")?,
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Renders events as one JSON object per line.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    /// Creates a sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for JsonSink<W> {
    fn emit(&mut self, event: &GameEvent) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

impl EventSink for Box<dyn EventSink> {
    fn emit(&mut self, event: &GameEvent) -> anyhow::Result<()> {
        (**self).emit(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_is_one_based() {
        assert_eq!(
            GameEvent::placed(Player::First, 5),
            GameEvent::MovePlaced {
                player: Player::First,
                index: 5,
                row: 2,
                column: 3
            }
        );
    }

    #[test]
    fn test_text_announcement() {
        let mut sink = TextSink::new(Vec::new());
        sink.emit(&GameEvent::placed(Player::Second, 0)).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "Player O placed at row 1, column 1\n");
    }

    #[test]
    fn test_json_is_tagged() {
        let mut sink = JsonSink::new(Vec::new());
        sink.emit(&GameEvent::Drawn).unwrap();
        sink.emit(&GameEvent::placed(Player::First, 4)).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[0]["event"], "drawn");
        assert_eq!(lines[1]["event"], "move_placed");
        assert_eq!(lines[1]["row"], 2);
    }
}
