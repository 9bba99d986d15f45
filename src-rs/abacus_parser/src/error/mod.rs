//! Error handling for the expression parser.

use std::fmt;

use abacus_ast::{BinaryOpNode, UnaryOpNode};
use abacus_shared::error::{AsAbacusError, Context, ErrorLocation};

use crate::token::{
    Token,
    error::{TokenError, TokenErrorKind},
};

mod context;

mod display;

pub mod reason;
use reason::ParserErrorReason;

/// An error that occurred during tokenizing or parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserError {
    /// The byte offset in the source where the error occurred
    pub error_offset: usize,
    /// The reason for the error
    pub reason: ParserErrorReason,
}

impl ParserError {
    /// Creates a new `ParserError` at the start of `token`
    const fn at_token(token: &Token, reason: ParserErrorReason) -> Self {
        Self {
            error_offset: token.span().start(),
            reason,
        }
    }

    /// Converts the reason of an error that only says an expression was
    /// expected into a more specific reason
    ///
    /// Any other error already describes the problem better and is returned
    /// unchanged.
    fn convert_reason(self, reason: ParserErrorReason) -> Self {
        if self.is_expect_expr() {
            Self { reason, ..self }
        } else {
            self
        }
    }

    const fn is_expect_expr(&self) -> bool {
        matches!(
            self.reason,
            ParserErrorReason::Expect(reason::ExpectKind::Expr)
        )
    }

    /// Creates a new `ParserError` for an expected expression
    pub(crate) const fn expect_expr(found: &Token) -> Self {
        Self::at_token(found, ParserErrorReason::expect_expr())
    }

    /// Creates a new `ParserError` for a token that follows a complete
    /// expression
    pub(crate) const fn expect_end_of_input(found: &Token) -> Self {
        Self::at_token(found, ParserErrorReason::expect_end_of_input())
    }

    /// Creates a new `ParserError` for a `)` that follows a complete
    /// expression
    pub(crate) const fn unmatched_paren(paren_right: &Token) -> Self {
        Self::at_token(paren_right, ParserErrorReason::UnmatchedParen)
    }

    /// Creates a new `ParserError` for a binary operation missing its second
    /// operand
    pub(crate) fn binary_op_missing_second_operand(
        operator: &BinaryOpNode,
    ) -> impl Fn(Self) -> Self {
        let operator_span = operator.span();
        let operator = *operator.node_value();
        move |error| {
            error.convert_reason(ParserErrorReason::binary_op_missing_second_operand(
                operator_span,
                operator,
            ))
        }
    }

    /// Creates a new `ParserError` for a unary operation missing its operand
    pub(crate) fn unary_op_missing_operand(operator: &UnaryOpNode) -> impl Fn(Self) -> Self {
        let operator_span = operator.span();
        let operator = *operator.node_value();
        move |error| {
            error.convert_reason(ParserErrorReason::unary_op_missing_operand(
                operator_span,
                operator,
            ))
        }
    }

    /// Creates a new `ParserError` for parentheses with nothing inside
    pub(crate) fn paren_missing_expression(paren_left: &Token) -> impl Fn(Self) -> Self {
        let paren_left_span = paren_left.span();
        move |error| error.convert_reason(ParserErrorReason::paren_missing_expr(paren_left_span))
    }

    /// Creates a new `ParserError` for an unclosed parenthesis
    pub(crate) const fn unclosed_paren(paren_left: &Token, found: &Token) -> Self {
        Self::at_token(found, ParserErrorReason::unclosed_paren(paren_left.span()))
    }

    /// Returns a description of what was expected at the error offset
    ///
    /// For example `operand after `+`` or `end of input`.
    #[must_use]
    pub fn expected(&self) -> String {
        display::expected_to_string(&self.reason)
    }

    /// Returns the rejected character if this error is about a character
    /// outside of the allowed set
    #[must_use]
    pub const fn invalid_character(&self) -> Option<char> {
        match self.reason {
            ParserErrorReason::TokenError(TokenErrorKind::InvalidCharacter(character)) => {
                Some(character)
            }
            ParserErrorReason::Expect(_)
            | ParserErrorReason::Incomplete { .. }
            | ParserErrorReason::UnmatchedParen
            | ParserErrorReason::TokenError(_) => None,
        }
    }

    /// Returns whether this error is about a number too large to represent
    #[must_use]
    pub const fn is_number_too_large(&self) -> bool {
        matches!(
            self.reason,
            ParserErrorReason::TokenError(TokenErrorKind::NumberTooLarge)
        )
    }
}

impl From<TokenError> for ParserError {
    fn from(error: TokenError) -> Self {
        Self {
            error_offset: error.offset,
            reason: ParserErrorReason::TokenError(error.kind),
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", display::reason_to_string(&self.reason))
    }
}

impl std::error::Error for ParserError {}

impl AsAbacusError for ParserError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        context::from_reason(&self.reason)
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        // the offset came from a different source if it does not fit
        let fits_source = self.error_offset <= source.len()
            && source.is_char_boundary(self.error_offset);

        fits_source.then(|| ErrorLocation::from_source_and_offset(source, self.error_offset))
    }
}
