//! Interactive play for kingside: session settings, the turn controller and
//! a text console.

pub mod cli;
pub mod command;
pub mod config;
pub mod console;
pub mod controller;
pub mod error;

pub use cli::{Cli, Mode, Side};
pub use command::{Command, parse_command};
pub use config::{DEFAULT_DEPTH, MAX_DEPTH, Player, SessionConfig};
pub use console::Console;
pub use controller::{Phase, TurnController};
pub use error::{ConfigError, ConsoleError, ControllerError};
