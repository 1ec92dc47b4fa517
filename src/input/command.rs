//! Command parsing for typed input

use chess_rules::Square;
use thiserror::Error;

/// What a line of input asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Click these squares in order (`e2`, `e2 e4` or `e2e4`)
    Click(Vec<Square>),
    NewGame,
    Undo,
    /// List the moves played so far
    Moves,
    /// Redraw the board
    Board,
    Help,
    Quit,
}

/// Errors for lines that are not commands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Nothing entered")]
    Empty,

    #[error("Unknown command or square: {0:?}")]
    Unknown(String),
}

/// Parse one line of input
pub fn parse_command(line: &str) -> Result<SessionCommand, InputError> {
    let normalized = line.trim().to_ascii_lowercase();

    let command = match normalized.as_str() {
        "" => return Err(InputError::Empty),
        "new" | "reset" => SessionCommand::NewGame,
        "undo" | "u" => SessionCommand::Undo,
        "moves" | "history" => SessionCommand::Moves,
        "board" => SessionCommand::Board,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        _ => SessionCommand::Click(parse_squares(&normalized)?),
    };
    Ok(command)
}

fn parse_squares(line: &str) -> Result<Vec<Square>, InputError> {
    let mut squares = Vec::new();
    for token in line.split_whitespace() {
        if !token.is_ascii() {
            return Err(InputError::Unknown(token.to_string()));
        }
        match token.len() {
            2 => squares.push(parse_square(token)?),
            4 => {
                squares.push(parse_square(&token[..2])?);
                squares.push(parse_square(&token[2..])?);
            }
            _ => return Err(InputError::Unknown(token.to_string())),
        }
    }
    Ok(squares)
}

fn parse_square(token: &str) -> Result<Square, InputError> {
    Square::from_algebraic(token).ok_or_else(|| InputError::Unknown(token.to_string()))
}
