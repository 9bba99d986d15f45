//! Detailed error reasons for parser errors.
//!
//! # Error Categories
//!
//! - **Expect**: Expected a specific construct but found something else
//! - **Incomplete**: Found a construct that was started but not finished
//! - **UnmatchedParen**: Found a closing parenthesis that closes nothing
//! - **TokenError**: Low-level tokenization errors
use abacus_ast::{BinaryOp, UnaryOp};
use abacus_shared::span::Span;

use crate::token::error::TokenErrorKind;

/// The different kinds of errors that can occur during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErrorReason {
    /// Expected a construct but found something else
    Expect(ExpectKind),
    /// Found an incomplete input
    Incomplete {
        /// The span in the source that indicated that the input was incomplete
        cause: Span,
        /// The specific type of incomplete input that was found
        kind: IncompleteKind,
    },
    /// Found a `)` with no matching `(` after a complete expression
    UnmatchedParen,
    /// A token-level error occurred
    TokenError(TokenErrorKind),
}

impl ParserErrorReason {
    pub(crate) const fn expect_expr() -> Self {
        Self::Expect(ExpectKind::Expr)
    }

    pub(crate) const fn expect_end_of_input() -> Self {
        Self::Expect(ExpectKind::EndOfInput)
    }

    pub(crate) const fn binary_op_missing_second_operand(
        operator_span: Span,
        operator: BinaryOp,
    ) -> Self {
        Self::Incomplete {
            cause: operator_span,
            kind: IncompleteKind::BinaryOpMissingSecondOperand { operator },
        }
    }

    pub(crate) const fn unary_op_missing_operand(operator_span: Span, operator: UnaryOp) -> Self {
        Self::Incomplete {
            cause: operator_span,
            kind: IncompleteKind::UnaryOpMissingOperand { operator },
        }
    }

    pub(crate) const fn paren_missing_expr(paren_left_span: Span) -> Self {
        Self::Incomplete {
            cause: paren_left_span,
            kind: IncompleteKind::ParenMissingExpr,
        }
    }

    pub(crate) const fn unclosed_paren(paren_left_span: Span) -> Self {
        Self::Incomplete {
            cause: paren_left_span,
            kind: IncompleteKind::UnclosedParen,
        }
    }
}

/// The different constructs that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectKind {
    /// Expected an expression
    Expr,
    /// Expected the end of the input after a complete expression
    EndOfInput,
}

/// The different kinds of incomplete input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteKind {
    /// A binary operator with no right operand, as in `2 +`
    BinaryOpMissingSecondOperand {
        /// The operator
        operator: BinaryOp,
    },
    /// A unary operator with no operand, as in `-`
    UnaryOpMissingOperand {
        /// The operator
        operator: UnaryOp,
    },
    /// Parentheses with nothing inside, as in `()`
    ParenMissingExpr,
    /// An opening parenthesis that is never closed, as in `(1 + 2`
    UnclosedParen,
}
