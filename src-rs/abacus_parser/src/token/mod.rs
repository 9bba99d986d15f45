//! Tokens and the tokenizer that produces them
//!
//! The tokenizer accepts only digits, the decimal point, `+`, `-`, `*`,
//! `/`, parentheses and the space character. Every other character is
//! rejected before any parsing happens.

use std::fmt;

use abacus_shared::span::Span;
use nom::{Parser as _, error::ParseError as _};

use crate::util::InputSpan;

pub mod error;
mod literal;
mod symbol;
mod util;

use error::TokenError;

/// The kind of a token, along with the value of numeric literals
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A numeric literal such as `12`, `3.5`, `.5` or `5.`
    Number(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    ParenLeft,
    /// `)`
    ParenRight,
    /// The end of the input
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number `{value}`"),
            Self::Plus => f.write_str("`+`"),
            Self::Minus => f.write_str("`-`"),
            Self::Star => f.write_str("`*`"),
            Self::Slash => f.write_str("`/`"),
            Self::ParenLeft => f.write_str("`(`"),
            Self::ParenRight => f.write_str("`)`"),
            Self::End => f.write_str("end of input"),
        }
    }
}

/// A single token and the span of source text it was read from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    kind: TokenKind,
    span: Span,
}

impl Token {
    /// Creates a new token
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates the terminal token placed at `offset`
    #[must_use]
    pub const fn end(offset: usize) -> Self {
        Self::new(TokenKind::End, Span::empty_at(offset))
    }

    /// Returns the kind of the token
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the span of the token
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns whether this is the terminal token
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self.kind, TokenKind::End)
    }
}

/// Splits `input` into tokens
///
/// The returned sequence always ends with a [`TokenKind::End`] token whose
/// span sits at the end of the input. Spaces separate tokens but never
/// produce tokens of their own.
///
/// # Errors
///
/// Returns the first [`TokenError`] encountered, such as an invalid
/// character, a number with more than one decimal point, a lone decimal
/// point or a number too large to represent.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenError> {
    let mut tokens = Vec::new();

    let input = InputSpan::new(input);
    let (mut rest, _) = util::inline_whitespace
        .parse(input)
        .map_err(|error| flatten_error(error, input))?;

    while !rest.fragment().is_empty() {
        let (next, token) =
            util::next_token(rest).map_err(|error| flatten_error(error, rest))?;

        tokens.push(token);
        rest = next;
    }

    tokens.push(Token::end(rest.location_offset()));

    Ok(tokens)
}

fn flatten_error(error: nom::Err<TokenError>, input: InputSpan<'_>) -> TokenError {
    match error {
        nom::Err::Error(error) | nom::Err::Failure(error) => error,
        nom::Err::Incomplete(_) => {
            TokenError::from_error_kind(input, nom::error::ErrorKind::Complete)
        }
    }
}
