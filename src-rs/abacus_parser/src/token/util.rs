use nom::{Parser as _, branch::alt, bytes::complete::take_while, character::complete::anychar};

use super::{Token, TokenKind, error::TokenError, literal, symbol};
use crate::util::{InputSpan, Parser, Result, span_from};

/// Consumes any run of space characters
///
/// Only `' '` counts as whitespace. Tabs and newlines are rejected as
/// invalid characters by [`next_token`].
pub fn inline_whitespace(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    take_while(|c: char| c == ' ').parse(input)
}

/// Wraps a parser that recognizes a token kind so that it records the
/// span of the token and consumes any trailing whitespace
pub fn token<'a>(
    mut f: impl Parser<'a, TokenKind, TokenError>,
) -> impl Parser<'a, Token, TokenError> {
    move |input: InputSpan<'a>| -> Result<'a, Token, TokenError> {
        let (rest, kind) = f.parse(input)?;
        let span = span_from(input, rest);
        let (rest, _) = inline_whitespace.parse(rest)?;
        Ok((rest, Token::new(kind, span)))
    }
}

/// Reads the next token
///
/// Fails with an invalid character error when neither a number nor a
/// symbol starts at `input`.
pub fn next_token(input: InputSpan<'_>) -> Result<'_, Token, TokenError> {
    alt((literal::number, symbol::symbol, invalid_character)).parse(input)
}

fn invalid_character(input: InputSpan<'_>) -> Result<'_, Token, TokenError> {
    let (_, character) = anychar.parse(input)?;
    Err(nom::Err::Failure(TokenError::invalid_character(
        character, input,
    )))
}
