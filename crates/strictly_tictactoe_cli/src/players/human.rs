//! Human player reading commands from a line-oriented input.

use super::{Action, Participant, parse_command};
use std::io::{BufRead, Write};
use strictly_tictactoe::Session;
use tracing::debug;

/// Human player typing at a prompt.
pub struct HumanPlayer<R: BufRead> {
    name: String,
    input: R,
    prompt: Option<Box<dyn Write>>,
}

impl<R: BufRead> HumanPlayer<R> {
    /// Creates a player reading from `input` with no prompt.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
            prompt: None,
        }
    }

    /// Writes a prompt to `out` before each read.
    pub fn with_prompt(mut self, out: impl Write + 'static) -> Self {
        self.prompt = Some(Box::new(out));
        self
    }
}

impl<R: BufRead> Participant for HumanPlayer<R> {
    fn next_action(&mut self, session: &Session) -> anyhow::Result<Action> {
        if let Some(out) = self.prompt.as_mut() {
            write!(out, "Player {} > ", session.current_player())?;
            out.flush()?;
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!(player = %self.name, "Input closed");
            return Ok(Action::Quit);
        }

        let action = parse_command(&line);
        debug!(player = %self.name, ?action, "Read command");
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
