//! Errors produced while splitting an expression into tokens

use nom::error::ParseError;

use crate::util::InputSpan;

/// An error that occurred during tokenizing.
///
/// Contains both the type of error and the byte offset where it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenError {
    /// The specific kind of error that occurred
    pub kind: TokenErrorKind,
    /// The offset in the source where the error occurred
    pub offset: usize,
}

/// The different kinds of errors that can occur during tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenErrorKind {
    /// Expected a specific kind of token
    Expect(ExpectKind),
    /// A character outside of the allowed set
    InvalidCharacter(char),
    /// A number containing a second decimal point
    ///
    /// The offset of the error is the offset of the second point.
    MultipleDecimalPoints,
    /// A decimal point with no digits on either side
    MissingDigits,
    /// A number beyond the range of `f64`
    ///
    /// The offset of the error is the start of the number.
    NumberTooLarge,
    /// A low-level nom parsing error
    NomError(nom::error::ErrorKind),
}

/// The different kinds of tokens that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectKind {
    /// Expected a number
    Number,
    /// Expected an operator or a parenthesis
    Symbol,
}

impl TokenError {
    /// Creates a new `TokenError`
    fn new(kind: TokenErrorKind, span: InputSpan<'_>) -> Self {
        Self {
            kind,
            offset: span.location_offset(),
        }
    }

    /// Updates the kind of a low-level nom error
    ///
    /// Errors that already carry a specific kind are left as they are.
    fn update_kind(self, kind: TokenErrorKind) -> Self {
        match self.kind {
            TokenErrorKind::NomError(_) => Self { kind, ..self },
            TokenErrorKind::Expect(_)
            | TokenErrorKind::InvalidCharacter(_)
            | TokenErrorKind::MultipleDecimalPoints
            | TokenErrorKind::MissingDigits
            | TokenErrorKind::NumberTooLarge => self,
        }
    }

    /// Creates a new `TokenError` instance for an expected number
    pub fn expected_number(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Number))
    }

    /// Creates a new `TokenError` instance for an expected symbol
    pub fn expected_symbol(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Symbol))
    }


    /// Creates a new `TokenError` instance for a character outside of the
    /// allowed set
    #[must_use]
    pub fn invalid_character(character: char, span: InputSpan<'_>) -> Self {
        Self::new(TokenErrorKind::InvalidCharacter(character), span)
    }

    /// Creates a new `TokenError` instance for a second decimal point
    #[must_use]
    pub fn multiple_decimal_points(second_point_span: InputSpan<'_>) -> Self {
        Self::new(TokenErrorKind::MultipleDecimalPoints, second_point_span)
    }

    /// Creates a new `TokenError` instance for a decimal point without digits
    #[must_use]
    pub fn missing_digits(decimal_point_span: InputSpan<'_>) -> Self {
        Self::new(TokenErrorKind::MissingDigits, decimal_point_span)
    }

    /// Creates a new `TokenError` instance for a number beyond the range
    /// of `f64`
    #[must_use]
    pub fn number_too_large(number_span: InputSpan<'_>) -> Self {
        Self::new(TokenErrorKind::NumberTooLarge, number_span)
    }
}

impl ParseError<InputSpan<'_>> for TokenError {
    fn from_error_kind(input: InputSpan<'_>, kind: nom::error::ErrorKind) -> Self {
        Self {
            kind: TokenErrorKind::NomError(kind),
            offset: input.location_offset(),
        }
    }

    fn append(_input: InputSpan<'_>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}
