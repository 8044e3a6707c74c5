use std::fmt;

use crate::command::Command;
use crate::error::{PathError, Result};

#[derive(PartialEq, Clone, Copy)]
pub enum Token<'a> {
    /// A command letter, with `true` for the absolute (uppercase) form.
    Command(Command, bool),
    Number(&'a str),
}

impl<'a> Token<'a> {
    pub fn as_f64(&self) -> Result<f64> {
        match self {
            Token::Number(literal) => literal
                .parse::<f64>()
                .map_err(|_| PathError::InvalidNumber(literal.to_string())),
            Token::Command(command, _) => Err(PathError::InvalidNumber(command.to_string())),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Command(command, true) => write!(f, "Command({})", command.letter()),
            Token::Command(command, false) => {
                write!(f, "Command({})", command.letter().to_ascii_lowercase())
            }
            Token::Number(n) => write!(f, "Number({})", n),
        }
    }
}
