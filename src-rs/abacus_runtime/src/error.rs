use std::fmt;

use abacus_eval::{DomainReason, EvalError, NonFiniteKind};
use abacus_parser::ParserError;
use abacus_shared::error::{AsAbacusError, Context, ErrorLocation};

/// The kind of failure reported to callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A character outside of the allowed set
    InvalidCharacter {
        /// The byte offset of the character
        position: usize,
        /// The rejected character
        character: char,
    },
    /// The text does not form a single valid expression
    SyntaxError {
        /// The byte offset where parsing stopped
        position: usize,
        /// What the parser expected to find there
        expected: String,
    },
    /// A divisor evaluated to zero
    DivisionByZero,
    /// A scientific operation was given a value outside of its domain
    DomainError {
        /// Why the value was rejected
        reason: DomainReason,
    },
    /// The result is NaN or infinite
    NonFiniteResult {
        /// Which kind of non-finite value was produced
        kind: NonFiniteKind,
    },
    /// A number in the expression, or the result of a scientific operation
    /// on a finite value, is too large to represent
    Overflow,
    /// No scientific operation has the given name
    UnknownOperation {
        /// The name that was looked up
        name: String,
    },
}

impl From<&ParserError> for ErrorKind {
    fn from(error: &ParserError) -> Self {
        if error.is_number_too_large() {
            return Self::Overflow;
        }

        match error.invalid_character() {
            Some(character) => Self::InvalidCharacter {
                position: error.error_offset,
                character,
            },
            None => Self::SyntaxError {
                position: error.error_offset,
                expected: error.expected(),
            },
        }
    }
}

impl From<ParserError> for ErrorKind {
    fn from(error: ParserError) -> Self {
        Self::from(&error)
    }
}

impl From<&EvalError> for ErrorKind {
    fn from(error: &EvalError) -> Self {
        match error {
            EvalError::DivisionByZero { .. } => Self::DivisionByZero,
            EvalError::DomainError { reason, .. } => Self::DomainError { reason: *reason },
            EvalError::NonFiniteResult { kind } => Self::NonFiniteResult { kind: *kind },
            EvalError::Overflow { .. } => Self::Overflow,
            EvalError::UnknownOperation { name } => Self::UnknownOperation { name: name.clone() },
        }
    }
}

impl From<EvalError> for ErrorKind {
    fn from(error: EvalError) -> Self {
        Self::from(&error)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, .. } => write!(
                f,
                "invalid character `{}` in expression",
                character.escape_debug()
            ),
            Self::SyntaxError { expected, .. } => write!(f, "expected {expected}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::DomainError { reason } => write!(f, "{reason}"),
            Self::NonFiniteResult {
                kind: NonFiniteKind::NaN,
            } => write!(f, "result is not a number"),
            Self::NonFiniteResult {
                kind: NonFiniteKind::Infinite,
            } => write!(f, "result is infinite"),
            Self::Overflow => write!(f, "result too large to calculate"),
            Self::UnknownOperation { name } => {
                write!(f, "unknown operation `{}`", name.escape_debug())
            }
        }
    }
}

impl std::error::Error for ErrorKind {}

/// A failure along with everything needed to explain it
///
/// Converts into an [`ErrorKind`] with [`Error::kind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression could not be tokenized or parsed
    Parser(ParserError),
    /// The expression or operation could not be evaluated
    Eval(EvalError),
}

impl Error {
    /// Returns the kind of failure
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parser(error) => ErrorKind::from(error),
            Self::Eval(error) => ErrorKind::from(error),
        }
    }
}

impl From<ParserError> for Error {
    fn from(error: ParserError) -> Self {
        Self::Parser(error)
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl From<Error> for ErrorKind {
    fn from(error: Error) -> Self {
        error.kind()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parser(error) => write!(f, "{error}"),
            Self::Eval(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parser(error) => Some(error),
            Self::Eval(error) => Some(error),
        }
    }
}

impl AsAbacusError for Error {
    fn message(&self) -> String {
        match self {
            Self::Parser(error) => error.message(),
            Self::Eval(error) => error.message(),
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Parser(error) => error.context(),
            Self::Eval(error) => error.context(),
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        match self {
            Self::Parser(error) => error.error_location(source),
            Self::Eval(error) => error.error_location(source),
        }
    }
}
