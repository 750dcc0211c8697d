//! Console command parsing.

use crate::error::ConsoleError;

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `move <uci>` or a bare coordinate move such as `e2e4`.
    Move(String),
    /// `undo` -- take back one ply.
    Undo,
    /// `reset` -- start again from the configured position.
    Reset,
    /// `moves` -- list the legal moves.
    Moves,
    /// `log` -- print the move history in algebraic notation.
    Log,
    /// `board` -- draw the board.
    Board,
    /// `fen` -- print the position as FEN.
    Fen,
    /// `status` -- turn, check flag and result.
    Status,
    /// `help` -- list commands.
    Help,
    /// `quit` -- leave the console.
    Quit,
}

/// Parse a single input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ConsoleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = tokens.first() else {
        return Ok(None);
    };

    let command = match first {
        "move" | "m" => match tokens.get(1) {
            Some(text) => Command::Move((*text).to_string()),
            None => {
                return Err(ConsoleError::MissingArgument {
                    command: first.to_string(),
                });
            }
        },
        "undo" | "z" => Command::Undo,
        "reset" | "r" => Command::Reset,
        "moves" => Command::Moves,
        "log" => Command::Log,
        "board" | "b" => Command::Board,
        "fen" => Command::Fen,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        text if looks_like_move(text) => Command::Move(text.to_string()),
        other => {
            return Err(ConsoleError::UnknownCommand {
                command: other.to_string(),
            });
        }
    };
    Ok(Some(command))
}

/// Coordinate moves start with a file letter and a rank digit.
fn looks_like_move(text: &str) -> bool {
    let bytes = text.as_bytes();
    matches!(bytes, [b'a'..=b'h', b'1'..=b'8', ..]) && (4..=5).contains(&bytes.len())
}

#[cfg(test)]
mod tests {
    use super::{Command, parse_command};
    use crate::error::ConsoleError;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("undo").unwrap(), Some(Command::Undo));
        assert_eq!(parse_command("  reset  ").unwrap(), Some(Command::Reset));
        assert_eq!(parse_command("z").unwrap(), Some(Command::Undo));
        assert_eq!(parse_command("quit").unwrap(), Some(Command::Quit));
        assert_eq!(parse_command("").unwrap(), None);
    }

    #[test]
    fn parse_moves() {
        assert_eq!(parse_command("move e2e4").unwrap(), Some(Command::Move("e2e4".into())));
        assert_eq!(parse_command("e7e8q").unwrap(), Some(Command::Move("e7e8q".into())));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(parse_command("move"), Err(ConsoleError::MissingArgument { .. })));
        assert!(matches!(parse_command("castle"), Err(ConsoleError::UnknownCommand { .. })));
        assert!(matches!(parse_command("e2"), Err(ConsoleError::UnknownCommand { .. })));
    }
}
