//! Participants that supply actions to the orchestrator.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use strictly_tictactoe::{Position, Session};

/// What a participant wants to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Place the current mark at this index.
    Place(usize),
    /// Take back the last move.
    Undo,
    /// Clear the board.
    Reset,
    /// Show the board.
    ShowBoard,
    /// Show the command summary.
    Help,
    /// Leave the game.
    Quit,
    /// Unrecognised input, kept verbatim.
    Invalid(String),
}

/// Parses one line typed at the prompt.
///
/// Empty input is invalid. Cells are accepted as `1`-`9`, `row col`,
/// `row,col` or a position name like `top-left`.
pub fn parse_command(line: &str) -> Action {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "undo" | "u" => Action::Undo,
        "reset" | "new" | "r" => Action::Reset,
        "board" | "b" => Action::ShowBoard,
        "help" | "h" | "?" => Action::Help,
        "quit" | "exit" | "q" => Action::Quit,
        _ => match Position::parse(trimmed) {
            Some(position) => Action::Place(position.to_index()),
            None => Action::Invalid(trimmed.to_string()),
        },
    }
}

/// Something that takes turns at the board.
pub trait Participant {
    /// Returns the next action given the current session.
    fn next_action(&mut self, session: &Session) -> anyhow::Result<Action>;

    /// Display name.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands() {
        assert_eq!(parse_command(" UNDO "), Action::Undo);
        assert_eq!(parse_command("reset"), Action::Reset);
        assert_eq!(parse_command("q"), Action::Quit);
        assert_eq!(parse_command("?"), Action::Help);
    }

    #[test]
    fn test_cells() {
        assert_eq!(parse_command("5"), Action::Place(4));
        assert_eq!(parse_command("3 1"), Action::Place(6));
        assert_eq!(parse_command("1,3"), Action::Place(2));
    }

    #[test]
    fn test_invalid() {
        assert_eq!(parse_command("0"), Action::Invalid("0".to_string()));
        assert_eq!(parse_command(""), Action::Invalid(String::new()));
        assert_eq!(parse_command("4 4"), Action::Invalid("4 4".to_string()));
    }
}
