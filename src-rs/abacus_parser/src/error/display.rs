use crate::{
    error::reason::{ExpectKind, IncompleteKind, ParserErrorReason},
    token::error::{ExpectKind as TokenExpectKind, TokenErrorKind},
};

/// Returns the full message for a reason
pub fn reason_to_string(reason: &ParserErrorReason) -> String {
    match reason {
        ParserErrorReason::TokenError(TokenErrorKind::InvalidCharacter(character)) => {
            format!("invalid character `{}` in expression", character.escape_debug())
        }
        ParserErrorReason::TokenError(TokenErrorKind::MultipleDecimalPoints) => {
            "number has more than one decimal point".to_string()
        }
        ParserErrorReason::TokenError(TokenErrorKind::NumberTooLarge) => {
            "number is too large to represent".to_string()
        }
        ParserErrorReason::UnmatchedParen => "unmatched `)`".to_string(),
        ParserErrorReason::Expect(_)
        | ParserErrorReason::Incomplete { .. }
        | ParserErrorReason::TokenError(_) => format!("expected {}", expected_to_string(reason)),
    }
}

/// Returns a description of what the parser expected to find
///
/// This is the part of the message that follows "expected".
pub fn expected_to_string(reason: &ParserErrorReason) -> String {
    match reason {
        ParserErrorReason::Expect(expect_kind) => match expect_kind {
            ExpectKind::Expr => "expression".to_string(),
            ExpectKind::EndOfInput => "end of input".to_string(),
        },
        ParserErrorReason::Incomplete { cause: _, kind } => match kind {
            IncompleteKind::BinaryOpMissingSecondOperand { operator } => {
                format!("operand after `{operator}`")
            }
            IncompleteKind::UnaryOpMissingOperand { operator } => {
                format!("operand after `{operator}`")
            }
            IncompleteKind::ParenMissingExpr => "expression inside parentheses".to_string(),
            IncompleteKind::UnclosedParen => "`)`".to_string(),
        },
        ParserErrorReason::UnmatchedParen => "end of input".to_string(),
        ParserErrorReason::TokenError(token_error_kind) => match token_error_kind {
            TokenErrorKind::Expect(TokenExpectKind::Number) => "number".to_string(),
            TokenErrorKind::Expect(TokenExpectKind::Symbol) => "operator".to_string(),
            TokenErrorKind::NomError(_) => "token".to_string(),
            TokenErrorKind::InvalidCharacter(_) => {
                "digit, operator, parenthesis or space".to_string()
            }
            TokenErrorKind::MultipleDecimalPoints => "at most one decimal point".to_string(),
            TokenErrorKind::MissingDigits => "digit".to_string(),
            TokenErrorKind::NumberTooLarge => "a number no larger than 1.8e308".to_string(),
        },
    }
}
