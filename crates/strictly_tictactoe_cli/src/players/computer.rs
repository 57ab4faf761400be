//! Computer player backed by a decision strategy.

use super::{Action, Participant};
use std::time::Duration;
use strictly_tictactoe::{Opponent, Session};
use tracing::{debug, instrument};

/// Computer player with an optional thinking pause.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    name: String,
    opponent: Opponent,
    think: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player.
    pub fn new(opponent: Opponent, think: Duration) -> Self {
        Self {
            name: format!("Computer ({})", opponent.strategy().difficulty()),
            opponent,
            think,
        }
    }
}

impl Participant for ComputerPlayer {
    #[instrument(skip(self, session), fields(player = %self.name))]
    fn next_action(&mut self, session: &Session) -> anyhow::Result<Action> {
        if !self.think.is_zero() {
            std::thread::sleep(self.think);
        }

        match self
            .opponent
            .choose(session.board(), session.current_player())
        {
            Some(index) => {
                debug!(index, "Computer chose cell");
                Ok(Action::Place(index))
            }
            None => anyhow::bail!("No valid moves available"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
