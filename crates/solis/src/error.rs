//! Crate-wide error type.
//!
//! A single [`Error`] struct carries an [`ErrorKind`] discriminator, a
//! human-readable message, and an optional source [`Position`]. Every
//! fallible entry point in this crate returns [`SolisResult<T>`].

use std::fmt;

use strum::{Display, EnumString};

/// A 1-based (line, column) source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Discriminates the error taxonomy the core can raise.
///
/// Matches the surface behavior exactly: the lexer never throws (it embeds
/// `Lex` errors as tokens, which the parser turns into a fatal `Parse`
/// error); everything else is raised by the parser or evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum ErrorKind {
    Lex,
    Parse,
    UnboundVariable,
    TypeMismatch,
    MatchFailure,
    NoSuchField,
    ArityMismatch,
    InfiniteLoop,
    DivisionByZero,
}

/// The crate's single error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub position: Option<Position>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), position: None }
    }

    pub fn at(kind: ErrorKind, position: Position, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), position: Some(position) }
    }

    pub fn lex(position: Position, message: impl Into<String>) -> Self {
        Self::at(ErrorKind::Lex, position, message)
    }

    pub fn parse(position: Position, message: impl Into<String>) -> Self {
        Self::at(ErrorKind::Parse, position, message)
    }

    pub fn unbound_variable(name: &str) -> Self {
        Self::new(ErrorKind::UnboundVariable, format!("unbound variable `{name}`"))
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeMismatch, message)
    }

    pub fn match_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MatchFailure, message)
    }

    pub fn no_such_field(field: &str) -> Self {
        Self::new(ErrorKind::NoSuchField, format!("no such field `{field}`"))
    }

    pub fn arity_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ArityMismatch, message)
    }

    pub fn infinite_loop() -> Self {
        Self::new(ErrorKind::InfiniteLoop, "thunk forced re-entrantly while still evaluating")
    }

    pub fn division_by_zero() -> Self {
        Self::new(ErrorKind::DivisionByZero, "division by zero")
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{}: {} at {pos}", self.kind, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used by every fallible public function in this crate.
pub type SolisResult<T> = Result<T, Error>;
