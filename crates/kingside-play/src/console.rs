//! Line-oriented text console around a [`TurnController`].

use std::io::{BufRead, Write};

use kingside_core::Color;
use tracing::{debug, info};

use crate::command::{Command, parse_command};
use crate::controller::{Phase, TurnController};
use crate::error::ConsoleError;

const HELP: &str = "\
commands:
  e2e4 | move e2e4   play a move (add q/r/b/n to promote)
  undo               take back your last move
  reset              start over
  moves              list legal moves
  log                move history
  board              draw the board
  fen                position as FEN
  status             side to move and result
  help               this text
  quit               leave";

/// Reads commands from an input, drives computer turns and prints the game.
///
/// Computer moves are played as soon as a computer is to move, before the
/// next prompt. A session without humans runs until the game ends or the
/// configured ply limit is reached.
pub struct Console<W: Write> {
    controller: TurnController,
    out: W,
    announced: bool,
}

impl<W: Write> Console<W> {
    pub fn new(controller: TurnController, out: W) -> Self {
        Self {
            controller,
            out,
            announced: false,
        }
    }

    pub fn controller(&self) -> &TurnController {
        &self.controller
    }

    pub fn into_inner(self) -> (TurnController, W) {
        (self.controller, self.out)
    }

    /// Run until `quit`, end of input, or the end of an unattended game.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), ConsoleError> {
        let mut lines = input.lines();
        self.print_board()?;

        loop {
            self.play_computer_turns()?;
            self.announce_result()?;

            if !self.controller.config().has_human() {
                break;
            }

            write!(self.out, "{}> ", self.controller.state().turn())?;
            self.out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(self.out)?;
                break;
            };
            let line = line?;

            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(self.out, "error: {err}")?;
                    continue;
                }
            };
            debug!(?command, "console command");

            if command == Command::Quit {
                break;
            }
            match self.dispatch(command) {
                Ok(()) => {}
                Err(ConsoleError::Io { source }) => return Err(ConsoleError::Io { source }),
                Err(err) => writeln!(self.out, "error: {err}")?,
            }
        }

        info!(ply = self.controller.state().ply(), "console closed");
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<(), ConsoleError> {
        match command {
            Command::Move(text) => {
                let mv = self.controller.submit_uci(&text)?;
                self.print_last_move(mv.piece().color())?;
            }
            Command::Undo => {
                for mv in self.controller.undo_to_human_turn()? {
                    writeln!(self.out, "took back {mv}")?;
                }
            }
            Command::Reset => {
                self.controller.reset();
                self.announced = false;
                self.print_board()?;
            }
            Command::Moves => {
                let moves: Vec<String> = self.controller.state().valid_moves().into_iter().map(|mv| mv.to_uci()).collect();
                writeln!(self.out, "{}", moves.join(" "))?;
            }
            Command::Log => self.print_log()?,
            Command::Board => self.print_board()?,
            Command::Fen => writeln!(self.out, "{}", self.controller.state().board())?,
            Command::Status => self.print_status()?,
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn play_computer_turns(&mut self) -> Result<(), ConsoleError> {
        while self.controller.computer_to_move() && !self.ply_limit_reached() {
            match self.controller.tick() {
                Ok(Some(mv)) => self.print_last_move(mv.piece().color())?,
                Ok(None) => break,
                Err(err) => {
                    writeln!(self.out, "error: {err}")?;
                    break;
                }
            }
        }
        Ok(())
    }

    fn ply_limit_reached(&self) -> bool {
        self.controller
            .config()
            .max_plies()
            .is_some_and(|limit| self.controller.state().ply() >= limit)
    }

    fn announce_result(&mut self) -> Result<(), ConsoleError> {
        if self.announced {
            return Ok(());
        }
        match self.controller.phase() {
            Phase::GameOver(outcome) => writeln!(self.out, "game over: {outcome}")?,
            Phase::Aborted => writeln!(self.out, "session aborted; type reset to start again")?,
            _ if self.ply_limit_reached() && !self.controller.config().has_human() => {
                writeln!(self.out, "ply limit reached")?;
            }
            _ => return Ok(()),
        }
        self.announced = true;
        Ok(())
    }

    fn print_last_move(&mut self, side: Color) -> Result<(), ConsoleError> {
        let san = self.controller.state().last_move_notation().unwrap_or_default();
        writeln!(self.out, "{side} plays {san}")?;
        Ok(())
    }

    fn print_board(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.out, "{}", self.controller.state().board().pretty())?;
        Ok(())
    }

    fn print_log(&mut self) -> Result<(), ConsoleError> {
        let state = self.controller.state();
        let initial = state.initial_board();
        let mut number = initial.fullmove_number();
        let mut side = initial.side_to_move();
        let mut line = String::new();

        for san in state.notation_log() {
            match side {
                Color::White => line.push_str(&format!("{number}. {san}")),
                Color::Black if line.is_empty() => line.push_str(&format!("{number}... {san}")),
                Color::Black => line.push_str(&format!(" {san}")),
            }
            if side == Color::Black {
                writeln!(self.out, "{line}")?;
                line.clear();
                number = number.saturating_add(1);
            }
            side = side.flip();
        }
        if !line.is_empty() {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn print_status(&mut self) -> Result<(), ConsoleError> {
        let state = self.controller.state();
        let status = match self.controller.phase() {
            Phase::GameOver(outcome) => format!("over ({outcome})"),
            Phase::Aborted => "aborted".to_string(),
            Phase::AwaitingMove | Phase::Applying => "in progress".to_string(),
        };
        writeln!(
            self.out,
            "{} to move ({}), ply {}, check: {}, game {status}",
            state.turn(),
            self.controller.current_player(),
            state.ply(),
            if state.in_check() { "yes" } else { "no" },
        )?;
        Ok(())
    }
}
