//! Operator and parenthesis tokens

use nom::{Parser as _, branch::alt, character::complete::char, combinator::value};

use super::{Token, TokenKind, error::TokenError, util::token};
use crate::util::{InputSpan, Result};

/// Parses one of `+ - * / ( )`
pub fn symbol(input: InputSpan<'_>) -> Result<'_, Token, TokenError> {
    token(alt((
        value(TokenKind::Plus, char('+')),
        value(TokenKind::Minus, char('-')),
        value(TokenKind::Star, char('*')),
        value(TokenKind::Slash, char('/')),
        value(TokenKind::ParenLeft, char('(')),
        value(TokenKind::ParenRight, char(')')),
    )))
    .parse(input)
    .map_err(|e| e.map(TokenError::expected_symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::token::error::{ExpectKind, TokenErrorKind};

    #[test]
    fn parses_each_symbol() {
        for (text, kind) in [
            ("+", TokenKind::Plus),
            ("-", TokenKind::Minus),
            ("*", TokenKind::Star),
            ("/", TokenKind::Slash),
            ("(", TokenKind::ParenLeft),
            (")", TokenKind::ParenRight),
        ] {
            let (rest, token) = symbol(InputSpan::new(text)).expect("symbol should parse");
            assert_eq!(token.kind(), kind);
            assert_eq!(rest.fragment(), &"");
        }
    }

    #[test]
    fn consumes_trailing_whitespace() {
        let (rest, token) = symbol(InputSpan::new("+  1")).expect("symbol should parse");

        assert_eq!(token.kind(), TokenKind::Plus);
        assert_eq!(token.span().len(), 1);
        assert_eq!(rest.fragment(), &"1");
    }

    #[test]
    fn rejects_other_characters() {
        let Err(nom::Err::Error(error)) = symbol(InputSpan::new("%")) else {
            panic!("expected a recoverable error");
        };

        assert_eq!(error.kind, TokenErrorKind::Expect(ExpectKind::Symbol));
        assert_eq!(error.offset, 0);
    }
}
