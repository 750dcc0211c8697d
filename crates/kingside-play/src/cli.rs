//! Command-line arguments for a session.

use std::fmt;

use clap::{Parser, ValueEnum};
use kingside_core::Color;

use crate::config::{DEFAULT_DEPTH, Player, SessionConfig};
use crate::error::ConfigError;

/// Who sits at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Two humans.
    Pvp,
    /// A human against an alpha-beta computer.
    Pvc,
    /// Minimax (White) against alpha-beta (Black).
    Cvc,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Pvp => f.write_str("pvp"),
            Mode::Pvc => f.write_str("pvc"),
            Mode::Cvc => f.write_str("cvc"),
        }
    }
}

/// Color of the human in `pvc` mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "kingside", version)]
#[command(about = "Chess in the terminal against a person or a minimax/alpha-beta computer", long_about = None)]
pub struct Cli {
    /// Who plays
    #[arg(value_enum, default_value_t = Mode::Pvc)]
    pub mode: Mode,

    /// Human color in pvc mode
    #[arg(value_enum)]
    pub color: Option<Side>,

    /// Search depth in plies (1-8)
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u8,

    /// Override White: human, minimax or alphabeta
    #[arg(long)]
    pub white: Option<Player>,

    /// Override Black: human, minimax or alphabeta
    #[arg(long)]
    pub black: Option<Player>,

    /// Starting position, quoted or as its six FEN fields
    #[arg(long, num_args = 1..=6)]
    pub fen: Vec<String>,

    /// Stop a computer-vs-computer game after this many plies
    #[arg(long)]
    pub max_plies: Option<usize>,
}

impl Cli {
    /// Build and validate the session these arguments describe.
    pub fn into_config(self) -> Result<SessionConfig, ConfigError> {
        let mut config = match (self.mode, self.color) {
            (Mode::Pvc, side) => SessionConfig::human_vs_computer(side.map_or(Color::White, Color::from)),
            (Mode::Pvp, None) => SessionConfig::human_vs_human(),
            (Mode::Cvc, None) => SessionConfig::computer_vs_computer(),
            (mode, Some(_)) => return Err(ConfigError::ColorOutsidePvc { mode: mode.to_string() }),
        };

        if let Some(player) = self.white {
            config = config.with_player(Color::White, player);
        }
        if let Some(player) = self.black {
            config = config.with_player(Color::Black, player);
        }
        if !self.fen.is_empty() {
            config = config.with_fen(&self.fen.join(" "))?;
        }
        if let Some(limit) = self.max_plies {
            config = config.with_max_plies(limit);
        }
        config.with_depth(self.depth)
    }
}
