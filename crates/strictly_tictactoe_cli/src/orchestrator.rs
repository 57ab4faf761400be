//! Game orchestration between the participants and a session.

use crate::config::Mode;
use crate::events::{EventSink, GameEvent};
use crate::players::{Action, Participant};
use anyhow::Result;
use strictly_tictactoe::{GameStatus, Player, Session};
use tracing::{debug, info, instrument, warn};

/// Drives one table: asks whoever is to act, applies the action, reports events.
pub struct Orchestrator<S: EventSink> {
    session: Session,
    mode: Mode,
    human: Box<dyn Participant>,
    computer: Option<(Player, Box<dyn Participant>)>,
    sink: S,
}

impl<S: EventSink> Orchestrator<S> {
    /// Two people sharing one input.
    pub fn two_player(human: Box<dyn Participant>, sink: S) -> Self {
        Self {
            session: Session::new(),
            mode: Mode::TwoPlayer,
            human,
            computer: None,
            sink,
        }
    }

    /// A person against the computer playing `mark`.
    pub fn versus_computer(
        human: Box<dyn Participant>,
        computer: Box<dyn Participant>,
        mark: Player,
        sink: S,
    ) -> Self {
        Self {
            session: Session::new(),
            mode: Mode::Computer,
            human,
            computer: Some((mark, computer)),
            sink,
        }
    }

    /// Consumes the orchestrator, returning the session and sink.
    pub fn into_parts(self) -> (Session, S) {
        (self.session, self.sink)
    }

    fn computer_to_move(&self) -> bool {
        matches!(
            self.computer,
            Some((mark, _)) if !self.session.is_over() && self.session.current_player() == mark
        )
    }

    /// Runs until a participant quits.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn run(&mut self) -> Result<()> {
        info!("Starting game orchestration");
        self.sink.emit(&GameEvent::Started {
            mode: self.mode.to_string(),
            computer: self.computer.as_ref().map(|(mark, _)| *mark),
        })?;
        self.show_position()?;

        loop {
            let computer_turn = self.computer_to_move();
            let action = match self.computer.as_mut() {
                Some((mark, computer)) if computer_turn => {
                    self.sink.emit(&GameEvent::Thinking { player: *mark })?;
                    debug!(player = computer.name(), "Waiting for computer");
                    computer.next_action(&self.session)?
                }
                _ => {
                    debug!(player = self.human.name(), "Waiting for human");
                    self.human.next_action(&self.session)?
                }
            };

            if !self.apply(action)? {
                info!("Game orchestration finished");
                return Ok(());
            }
        }
    }

    /// Applies one action; returns `false` once the table should close.
    fn apply(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Place(index) => self.place(index)?,
            Action::Undo if self.computer.is_some() => {
                self.reject("Undo is only available in two-player mode")?
            }
            Action::Undo => match self.session.undo() {
                Ok(mv) => {
                    self.sink.emit(&GameEvent::Undone {
                        player: mv.player(),
                        index: mv.index(),
                    })?;
                    self.show_position()?;
                }
                Err(e) => self.reject(e.to_string())?,
            },
            Action::Reset => {
                self.session.reset();
                self.sink.emit(&GameEvent::Reset)?;
                self.show_position()?;
            }
            Action::ShowBoard => self.sink.emit(&GameEvent::board(self.session.board()))?,
            Action::Help => self.sink.emit(&GameEvent::Help)?,
            Action::Quit => {
                self.sink.emit(&GameEvent::Quit)?;
                return Ok(false);
            }
            Action::Invalid(input) => self.reject(format!(
                "Unrecognised input '{}', type `help` for commands",
                input
            ))?,
        }
        Ok(true)
    }

    fn place(&mut self, index: usize) -> Result<()> {
        let outcome = match self.session.submit_move(index) {
            Ok(outcome) => outcome,
            Err(e) => {
                if self.computer_to_move() {
                    warn!(error = %e, "Computer proposed an illegal move");
                    anyhow::bail!("Computer proposed an illegal move: {}", e);
                }
                return self.reject(e.to_string());
            }
        };

        let applied = outcome.applied();
        self.sink
            .emit(&GameEvent::placed(applied.player(), applied.index()))?;
        self.sink.emit(&GameEvent::board(self.session.board()))?;

        match *outcome.status() {
            GameStatus::Won(player, line) => self.sink.emit(&GameEvent::won(player, line))?,
            GameStatus::Drawn => self.sink.emit(&GameEvent::Drawn)?,
            GameStatus::InProgress => self.sink.emit(&GameEvent::Turn {
                player: self.session.current_player(),
            })?,
        }
        Ok(())
    }

    fn show_position(&mut self) -> Result<()> {
        self.sink.emit(&GameEvent::board(self.session.board()))?;
        match self.session.status() {
            GameStatus::InProgress => self.sink.emit(&GameEvent::Turn {
                player: self.session.current_player(),
            }),
            GameStatus::Won(player, line) => self.sink.emit(&GameEvent::won(player, line)),
            GameStatus::Drawn => self.sink.emit(&GameEvent::Drawn),
        }
    }

    fn reject(&mut self, reason: impl Into<String>) -> Result<()> {
        let reason = reason.into();
        debug!(%reason, "Action rejected");
        self.sink.emit(&GameEvent::Rejected { reason })
    }
}
