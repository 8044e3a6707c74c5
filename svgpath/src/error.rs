use thiserror::Error;

use crate::command::Command;

#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("Unallowed implicit command at position {position}")]
    UnallowedImplicitCommand { position: usize },

    #[error("Truncated path data: `{command}` expects {expected} numbers, found {found}")]
    TruncatedData {
        command: Command,
        expected: usize,
        found: usize,
    },

    #[error("Invalid number:`{0}`")]
    InvalidNumber(String),
}

pub type Result<T> = std::result::Result<T, PathError>;
