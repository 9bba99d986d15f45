//! Parser for Abacus arithmetic expressions
//!
//! Parsing happens in two stages. [`token::tokenize`] turns the text into
//! a sequence of tokens, rejecting any character outside of the allowed
//! set, and [`expression::parse`] turns the tokens into an expression
//! tree. [`parse_expression`] runs both stages.
//!
//! The parser never evaluates anything. Evaluation lives in
//! `abacus_eval`.
//!
//! # Examples
//!
//! ```
//! use abacus_parser::parse_expression;
//!
//! let expr = parse_expression("1 + 2 * 3").unwrap();
//! assert_eq!(expr.node_count(), 5);
//!
//! let error = parse_expression("1 + a").unwrap_err();
//! assert_eq!(error.to_string(), "invalid character `a` in expression");
//! ```

use abacus_ast::ExprNode;

pub mod error;
pub mod expression;
pub mod token;
mod util;

pub use error::ParserError;
pub use token::{Token, TokenKind};

/// Splits an expression into tokens
///
/// # Errors
///
/// Returns a [`ParserError`] if the text contains a character outside of
/// the allowed set or a malformed number.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParserError> {
    token::tokenize(input).map_err(ParserError::from)
}

/// Parses a token sequence into an expression tree
///
/// # Errors
///
/// Returns a [`ParserError`] if the tokens do not form exactly one
/// expression.
pub fn parse(tokens: &[Token]) -> Result<ExprNode, ParserError> {
    expression::parse(tokens)
}

/// Tokenizes and parses an expression
///
/// # Errors
///
/// Returns the first [`ParserError`] from either stage.
pub fn parse_expression(input: &str) -> Result<ExprNode, ParserError> {
    let tokens = tokenize(input)?;
    parse(&tokens)
}
