//! Numeric literals
//!
//! A number is a run of digits containing at most one decimal point. Both
//! `.5` and `5.` are numbers, a lone `.` is not. Signs are never part of a
//! literal: `-5` is a negation applied to `5`.

use nom::{
    Parser as _,
    character::complete::{char, digit0},
    combinator::{opt, recognize},
    error::{ErrorKind, ParseError as _},
};

use super::{Token, TokenKind, error::TokenError, util::token};
use crate::util::{InputSpan, Result};

/// Parses a number literal
///
/// Returns a recoverable error when `input` does not start with a digit or
/// a decimal point, and a failure when it does but the literal is
/// malformed.
pub fn number(input: InputSpan<'_>) -> Result<'_, Token, TokenError> {
    token(number_kind).parse(input)
}

fn number_kind(input: InputSpan<'_>) -> Result<'_, TokenKind, TokenError> {
    let lexeme_result: Result<'_, InputSpan<'_>, TokenError> =
        recognize((digit0, opt((char('.'), digit0)))).parse(input);
    let (rest, lexeme) = lexeme_result.map_err(|e| e.map(TokenError::expected_number))?;

    if lexeme.fragment().is_empty() {
        return Err(nom::Err::Error(TokenError::expected_number(
            TokenError::from_error_kind(input, ErrorKind::Digit),
        )));
    }

    if !lexeme.fragment().bytes().any(|b| b.is_ascii_digit()) {
        return Err(nom::Err::Failure(TokenError::missing_digits(input)));
    }

    let second_point: Result<'_, char, TokenError> = char('.').parse(rest);
    if second_point.is_ok() {
        return Err(nom::Err::Failure(TokenError::multiple_decimal_points(rest)));
    }

    // digits with at most one point always form a valid float, but one
    // that is out of range parses as infinity
    match lexeme.fragment().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok((rest, TokenKind::Number(value))),
        Ok(_) => Err(nom::Err::Failure(TokenError::number_too_large(input))),
        Err(_) => Err(nom::Err::Failure(TokenError::from_error_kind(
            input,
            ErrorKind::Float,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::token::error::{ExpectKind, TokenErrorKind};

    fn parse_number(text: &str) -> (f64, &str) {
        let (rest, token) = number(InputSpan::new(text)).expect("number should parse");
        let TokenKind::Number(value) = token.kind() else {
            panic!("expected a number token, got {:?}", token.kind());
        };
        (value, *rest.fragment())
    }

    #[test]
    fn integer() {
        assert_eq!(parse_number("42"), (42.0, ""));
    }

    #[test]
    fn decimal() {
        assert_eq!(parse_number("3.25 + 1"), (3.25, "+ 1"));
    }

    #[test]
    fn leading_point() {
        assert_eq!(parse_number(".5"), (0.5, ""));
    }

    #[test]
    fn trailing_point() {
        assert_eq!(parse_number("5.)"), (5.0, ")"));
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(parse_number("007"), (7.0, ""));
    }

    #[test]
    fn sign_is_not_part_of_the_literal() {
        let Err(nom::Err::Error(error)) = number(InputSpan::new("-5")) else {
            panic!("expected a recoverable error");
        };

        assert_eq!(error.kind, TokenErrorKind::Expect(ExpectKind::Number));
    }

    #[test]
    fn second_point_fails_at_that_point() {
        let Err(nom::Err::Failure(error)) = number(InputSpan::new("12.5.1")) else {
            panic!("expected a failure");
        };

        assert_eq!(error.kind, TokenErrorKind::MultipleDecimalPoints);
        assert_eq!(error.offset, 4);
    }

    #[test]
    fn double_point() {
        let Err(nom::Err::Failure(error)) = number(InputSpan::new("1..2")) else {
            panic!("expected a failure");
        };

        assert_eq!(error.kind, TokenErrorKind::MultipleDecimalPoints);
        assert_eq!(error.offset, 2);
    }

    #[test]
    fn largest_finite_literal() {
        let text = format!("{}", f64::MAX);
        assert_eq!(parse_number(&text), (f64::MAX, ""));
    }

    #[test]
    fn out_of_range_literal() {
        let text = format!("1{}.5", "0".repeat(400));
        let Err(nom::Err::Failure(error)) = number(InputSpan::new(&text)) else {
            panic!("expected a failure");
        };

        assert_eq!(error.kind, TokenErrorKind::NumberTooLarge);
        assert_eq!(error.offset, 0);
    }

    #[test]
    fn lone_point() {
        let Err(nom::Err::Failure(error)) = number(InputSpan::new(". 1")) else {
            panic!("expected a failure");
        };

        assert_eq!(error.kind, TokenErrorKind::MissingDigits);
        assert_eq!(error.offset, 0);
    }
}
